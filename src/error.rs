//! Error handling for resume pivot
//!
//! The signal extractors themselves are total and never produce these; errors
//! come from construction of matchers, file input, configuration and output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PivotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Matcher construction error: {0}")]
    Matcher(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PivotError>;

impl From<regex::Error> for PivotError {
    fn from(err: regex::Error) -> Self {
        PivotError::Matcher(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for PivotError {
    fn from(err: aho_corasick::BuildError) -> Self {
        PivotError::Matcher(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PivotError::UnsupportedFormat("resume.docx".to_string());
        assert_eq!(err.to_string(), "File format not supported: resume.docx");

        let err: PivotError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, PivotError::Matcher(_)));
    }
}
