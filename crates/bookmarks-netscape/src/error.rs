//! Netscape parser error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetscapeError {
    #[error("Bookmarks file malformed: no DL nodes were found")]
    MalformedDocument,

    #[error("Invalid selector: {0}")]
    Selector(String),
}
