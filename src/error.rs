//! Error types for scriven library.

use std::io;
use thiserror::Error;

/// Result type alias for scriven operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading images or writing the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The image format tag or payload is not a recognized image format.
    #[error("Unknown image format: {0}")]
    UnknownImageFormat(String),

    /// No chart was given and no current chart is set.
    #[error("No chart available to capture")]
    NoChart,

    /// The chart source failed to encode the figure.
    #[error("Chart rendering error: {0}")]
    Chart(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A block could not be laid out, such as footnotes under a grid too
    /// narrow to hold them.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoChart;
        assert_eq!(err.to_string(), "No chart available to capture");

        let err = Error::UnknownImageFormat("xyz".to_string());
        assert_eq!(err.to_string(), "Unknown image format: xyz");

        let err = Error::Render("too narrow".to_string());
        assert_eq!(err.to_string(), "Rendering error: too narrow");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
