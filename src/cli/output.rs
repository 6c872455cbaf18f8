use crate::cli::args::OutputFormat;
use crate::domain::namespace::Namespace;
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_namespace(&self, namespace: &Namespace) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::DemoError {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::IoError(e) => Self::Io(e),
            other => Self::Output(other.to_string()),
        }
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_namespace(&self, namespace: &Namespace) -> Result<(), OutputError> {
        let rendered = render_namespace(namespace, self.format)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", rendered)?;
        Ok(())
    }
}

/// Render a namespace without printing it
pub fn render_namespace(namespace: &Namespace, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(namespace.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(namespace)?),
        OutputFormat::Table => {
            let rows: Vec<NamespaceTableRow> = namespace
                .iter()
                .map(|(name, value)| NamespaceTableRow {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect();
            Ok(Table::new(rows).to_string())
        }
    }
}

#[derive(Tabled)]
struct NamespaceTableRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "value")]
    value: String,
}
