use thiserror::Error;

/// argdemo unified error type
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type DemoResult<T> = Result<T, DemoError>;
