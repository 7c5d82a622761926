mod players;
mod profit;
mod ranking;
mod rewards;
mod settlement;
