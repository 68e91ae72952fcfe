// src/error.rs

use thiserror::Error;

/// Error type shared by the whole application.
#[derive(Debug, Error)]
pub enum QvError {
    /// Bad arguments handed to the pipeline (negative or fractional counts, empty export size)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Element symbol not present in the element table
    #[error("unknown element symbol: {0}")]
    NotFound(String),

    /// Malformed element table or arguments
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Plot drawing or surface failures
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, QvError>;

impl QvError {
    /// Text shown to the user in the results view or on stdout.
    pub fn user_message(&self) -> String {
        match self {
            QvError::NotFound(symbol) => {
                format!("\"{}\" is not an element. Try a symbol like H, C or Fe.", symbol)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_friendly() {
        let err = QvError::NotFound("Xx".to_string());
        let msg = err.user_message();
        assert!(msg.contains("\"Xx\" is not an element"));
    }

    #[test]
    fn test_other_errors_use_display() {
        let err = QvError::InvalidInput("electron count -1 is negative".to_string());
        assert_eq!(err.user_message(), "invalid input: electron count -1 is negative");
    }
}
