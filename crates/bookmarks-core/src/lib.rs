//! Bookmarks Core
//!
//! Entry points for turning a browser bookmark export into a
//! [`BookmarkNode`] tree and back. Input is validated, dispatched to a
//! registered [`BookmarkParser`] by name, sniffed, then parsed.

mod config;
mod converter;
mod error;
mod parser;

pub use config::{ConvertOptions, DEFAULT_PARSER};
pub use converter::{convert, convert_to_html, convert_to_json, ConvertHooks, Converter};
pub use error::{CoreError, ParserError};
pub use parser::{BookmarkParser, NetscapeParser};

// Re-export the model so callers need a single dependency
pub use bookmarks_model::{
    count, filter_by_keyword, search, sort_by_date, sort_tree_by_date, Bookmark, BookmarkNode,
    Folder, RootKind, SortOrder, TreeStats,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
