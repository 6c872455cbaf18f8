// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::{try_parse_from, Args, Command, OutputFormat};
pub use commands::execute_command;
pub use output::{render_namespace, ConsoleWriter, OutputWriter};
