pub mod chat;
pub mod countdown;
pub mod pomodoro;
pub mod sidebar;
pub mod units;
