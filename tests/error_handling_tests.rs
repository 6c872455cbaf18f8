use argdemo::cli::output::OutputError;
use argdemo::{DemoError, DemoResult};
use std::error::Error;

/// Error handling tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let errors = vec![
            DemoError::Config { message: "Config error".to_string() },
            DemoError::Output("Output error".to_string()),
            DemoError::Logging("Logging error".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty(), "Error display should not be empty");
        }

        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<DemoError>();
    }

    #[test]
    fn test_io_error_conversion_keeps_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Access denied");
        let demo_error: DemoError = io_error.into();

        assert!(matches!(demo_error, DemoError::Io(_)));
        assert!(demo_error.source().is_some());
    }

    #[test]
    fn test_output_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let demo_error: DemoError = OutputError::from(json_error).into();

        assert!(matches!(demo_error, DemoError::Output(_)));
        assert!(demo_error.to_string().starts_with("Output error: JSON serialization error"));
    }

    #[test]
    fn test_output_io_error_becomes_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let demo_error: DemoError = OutputError::from(io_error).into();

        assert!(matches!(demo_error, DemoError::Io(_)));
        assert_eq!(demo_error.to_string(), "IO error: pipe closed");
    }

    #[test]
    fn test_result_type() {
        fn failing() -> DemoResult<()> {
            Err(DemoError::Config { message: "Test error".to_string() })
        }

        let error = failing().unwrap_err();
        assert_eq!(error.to_string(), "Configuration error: Test error");
    }
}
