pub mod engine;

pub use engine::{CycleOutcome, MonitorEngine};
