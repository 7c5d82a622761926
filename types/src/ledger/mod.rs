mod config;
mod constants;
mod events;
mod monthly;
mod player;
mod profit;
mod ranking;
mod receipt;
mod rewards;

pub use config::*;
pub use constants::*;
pub use events::*;
pub use monthly::*;
pub use player::*;
pub use profit::*;
pub use ranking::*;
pub use receipt::*;
pub use rewards::*;
