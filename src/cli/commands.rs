use crate::cli::args::{Args, OutputFormat};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::domain::config::DemoConfig;
use crate::domain::error::DemoError;

/// Execute the selected parser variant and print its namespace
pub fn execute_command(args: &Args, config: &DemoConfig) -> Result<(), DemoError> {
    let format = resolve_output_format(args.output, config);
    let writer = ConsoleWriter::new(format);

    tracing::debug!(variant = args.command.name(), %format, "Parsed command line");

    let namespace = args.command.to_namespace();
    tracing::debug!(values = namespace.len(), "Built namespace");

    writer.write_namespace(&namespace)?;
    Ok(())
}

/// `--output` wins over the configured default, which wins over text
pub fn resolve_output_format(explicit: Option<OutputFormat>, config: &DemoConfig) -> OutputFormat {
    explicit.or(config.default_output).unwrap_or_default()
}
