//! argdemo Library
//!
//! Three command-line parser variants (shared-destination aliases, a single
//! positional, grouped and mutually exclusive options with nested
//! subcommands) and the namespace they produce.

pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use cli::{try_parse_from, Args, Command};
pub use domain::config::DemoConfig;
pub use domain::error::{DemoError, DemoResult};
pub use domain::namespace::{Namespace, Value};
