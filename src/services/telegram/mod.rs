pub mod client;
pub mod notifier;

pub use client::*;
pub use notifier::*;
