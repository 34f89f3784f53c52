//! Netscape bookmark file support
//!
//! The de facto browser export format: an HTML document whose bookmarks live
//! in nested `<DL>` lists, one `<DT>` per entry, `<H3>` for folders and `<A>`
//! for links.
//!
//! - [`can_parse`] — cheap sniffing, no DOM work
//! - [`parse`] / [`TreeBuilder`] — HTML → bookmark tree
//! - [`render`] — bookmark tree → HTML

mod builder;
mod classify;
pub mod dom;
mod error;
mod render;
mod sniff;

pub use builder::{parse, parse_with_depth, TreeBuilder};
pub use error::NetscapeError;
pub use render::render;
pub use sniff::can_parse;

pub type Result<T> = std::result::Result<T, NetscapeError>;
