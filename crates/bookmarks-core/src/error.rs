//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: code must be a non-empty string")]
    InvalidInput,

    #[error("Parser \"{0}\" does not exist")]
    UnknownParser(String),

    #[error("Parser \"{0}\" could not parse the provided HTML code")]
    UnrecognizedFormat(String),

    #[error("Parser \"{parser}\": bookmarks file malformed: {message}")]
    MalformedDocument { parser: String, message: String },

    #[error("An error occurred while parsing with \"{parser}\": {message}")]
    ParseFailure { parser: String, message: String },

    #[error("Model error: {0}")]
    Model(#[from] bookmarks_model::ModelError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure reported by a [`crate::BookmarkParser`], before the converter
/// attaches the parser name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("{0}")]
    Malformed(String),

    #[error("{0}")]
    Failed(String),
}

impl From<bookmarks_netscape::NetscapeError> for ParserError {
    fn from(err: bookmarks_netscape::NetscapeError) -> Self {
        match err {
            bookmarks_netscape::NetscapeError::MalformedDocument => {
                ParserError::Malformed("no DL nodes were found".to_string())
            }
            other => ParserError::Failed(other.to_string()),
        }
    }
}
