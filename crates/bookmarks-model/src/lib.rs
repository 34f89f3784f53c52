//! Bookmark tree model
//!
//! The single output shape of every bookmark parser: an ordered list of
//! [`BookmarkNode`]s, each either a bookmark or a folder owning its children.
//! Also hosts the post-processing helpers that run over an already-built tree
//! (sorting, filtering, JSON encoding).

mod error;
mod node;
mod query;

pub use error::ModelError;
pub use node::{Bookmark, BookmarkNode, Folder, RootKind};
pub use query::{
    count, filter_by_keyword, from_json, search, sort_by_date, sort_tree_by_date, to_json, walk,
    SortOrder, TreeStats,
};

pub type Result<T> = std::result::Result<T, ModelError>;
