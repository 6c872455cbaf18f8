// Domain module - Parsed values, configuration and error types
pub mod config;
pub mod error;
pub mod namespace;

pub use config::DemoConfig;
pub use error::{DemoError, DemoResult};
pub use namespace::{Namespace, Value};
