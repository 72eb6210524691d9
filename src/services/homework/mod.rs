pub mod types;
pub mod status;
pub mod client;
pub mod validator;
pub mod formatter;

pub use types::*;
pub use status::*;
pub use client::*;
pub use validator::*;
pub use formatter::*;
