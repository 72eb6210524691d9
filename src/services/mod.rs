pub mod homework;
pub mod monitor;
pub mod telegram;
