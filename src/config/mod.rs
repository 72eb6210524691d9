pub mod environment;
pub mod logging;

pub use environment::{Config, ConfigError, Credentials};
pub use logging::init_logging;
