//! Format parsers

use bookmarks_model::BookmarkNode;
use bookmarks_netscape::TreeBuilder;

use crate::error::ParserError;

/// One bookmark export format the [`crate::Converter`] can dispatch to
pub trait BookmarkParser: Send + Sync {
    /// Registry key, e.g. `"netscape"`
    fn name(&self) -> &str;

    /// Cheap check run before [`BookmarkParser::parse`]
    fn can_parse(&self, code: &str) -> bool;

    fn parse(
        &self,
        code: &str,
        max_depth: Option<usize>,
    ) -> std::result::Result<Vec<BookmarkNode>, ParserError>;
}

/// Netscape bookmark file (`<DL>/<DT>/<H3>/<A>`) exported by every major browser
#[derive(Debug, Clone, Copy, Default)]
pub struct NetscapeParser;

impl BookmarkParser for NetscapeParser {
    fn name(&self) -> &str {
        "netscape"
    }

    fn can_parse(&self, code: &str) -> bool {
        bookmarks_netscape::can_parse(code)
    }

    fn parse(
        &self,
        code: &str,
        max_depth: Option<usize>,
    ) -> std::result::Result<Vec<BookmarkNode>, ParserError> {
        let builder = max_depth.map_or_else(TreeBuilder::new, TreeBuilder::with_max_depth);
        Ok(builder.parse(code)?)
    }
}
