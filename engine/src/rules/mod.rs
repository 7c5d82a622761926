//! Pure domain rules. Nothing here touches the store: each function is a
//! deterministic map from inputs (plus injected configuration) to outputs,
//! which keeps the ranking and rewards math testable in isolation.

pub mod membership;
pub mod monthly;
pub mod profit;
pub mod ranking;
pub mod rewards;
