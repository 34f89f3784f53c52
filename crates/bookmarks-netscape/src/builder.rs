//! Bookmark tree construction from nested `<DL>` lists

use bookmarks_model::{BookmarkNode, Folder, RootKind};

use crate::classify::{classify, Classified};
use crate::dom::{HtmlDocument, HtmlNode, ScraperDocument};
use crate::error::NetscapeError;
use crate::Result;

const MENU_TITLE: &str = "Menu";

/// Parse a Netscape bookmark file with no depth limit
pub fn parse(html: &str) -> Result<Vec<BookmarkNode>> {
    TreeBuilder::new().parse(html)
}

/// Parse a Netscape bookmark file, dropping entries nested deeper than
/// `max_depth` (top-level entries are depth 0)
pub fn parse_with_depth(html: &str, max_depth: usize) -> Result<Vec<BookmarkNode>> {
    TreeBuilder::with_max_depth(max_depth).parse(html)
}

/// Recursive `<DL>` walker
///
/// At the top level, every entry without a root marker is gathered into a
/// synthesized [`RootKind::Menu`] folder which is placed after all marked
/// roots. Deeper levels keep source order untouched.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn parse(&self, html: &str) -> Result<Vec<BookmarkNode>> {
        let doc = ScraperDocument::parse(html);
        self.parse_document(&doc)
    }

    /// Build from the first `<DL>` of an already parsed document
    pub fn parse_document<D: HtmlDocument>(&self, doc: &D) -> Result<Vec<BookmarkNode>> {
        let lists = doc.select_all("dl")?;
        let Some(root) = lists.first().copied() else {
            return Err(NetscapeError::MalformedDocument);
        };

        let nodes = self.build(root, 0)?;
        tracing::debug!(
            lists = lists.len(),
            top_level = nodes.len(),
            "Built bookmark tree"
        );
        Ok(nodes)
    }

    /// Entries of one `<DL>` at nesting `level`
    pub fn build<'a, N: HtmlNode<'a>>(&self, list: N, level: usize) -> Result<Vec<BookmarkNode>> {
        if level > self.max_depth {
            return Ok(Vec::new());
        }

        let mut items = Vec::new();
        let mut menu: Option<Folder> = None;

        for child in list.children() {
            if !child.is_element("dt") {
                continue;
            }
            let Some(Classified {
                mut node,
                children_source,
            }) = classify(child)?
            else {
                continue;
            };

            if let (Some(source), Some(folder)) = (children_source, node.as_folder_mut()) {
                folder.children = Some(self.build(source, level + 1)?);
            }

            if level == 0 && node.root_kind().is_none() {
                menu.get_or_insert_with(menu_root)
                    .children_mut()
                    .push(node);
            } else {
                items.push(node);
            }
        }

        if let Some(menu) = menu {
            items.push(menu.into());
        }
        Ok(items)
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn menu_root() -> Folder {
    Folder {
        root_kind: Some(RootKind::Menu),
        ..Folder::with_children(MENU_TITLE, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmarks_model::Bookmark;

    const EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file. -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><A HREF="https://news.example" ADD_DATE="1600000000">News</A>
    <DT><H3 ADD_DATE="1500000000" LAST_MODIFIED="1600000001" PERSONAL_TOOLBAR_FOLDER="true">Bookmarks bar</H3>
    <DL><p>
        <DT><A HREF="https://rust-lang.org" ADD_DATE="1500000001" ICON="data:image/png;base64,AAAA">Rust</A>
        <DT><H3 ADD_DATE="1500000002">Crates</H3>
        <DL><p>
            <DT><A HREF="https://serde.rs">Serde</A>
            <DT><A HREF="https://tokio.rs">Tokio</A>
        </DL><p>
    </DL><p>
    <DT><H3>Reading</H3>
    <DL><p>
        <DT><A HREF="https://blog.example">Blog</A>
    </DL><p>
    <DT><H3 UNFILED_BOOKMARKS_FOLDER="true">Other bookmarks</H3>
    <DL><p>
    </DL><p>
</DL><p>
"#;

    fn titles(nodes: &[BookmarkNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.title()).collect()
    }

    #[test]
    fn test_parse_flat_list_into_menu() {
        let html = r#"<DL><p>
            <DT><A HREF="http://a.com">A</A>
            <DT><A HREF="http://b.com">B</A>
            <DT><A HREF="http://c.com">C</A>
        </DL>"#;
        let tree = parse(html).unwrap();

        assert_eq!(tree.len(), 1);
        let menu = tree[0].as_folder().unwrap();
        assert_eq!(menu.title, "Menu");
        assert_eq!(menu.root_kind, Some(RootKind::Menu));
        assert_eq!(titles(menu.children()), vec!["A", "B", "C"]);
        assert!(menu.children().iter().all(|n| !n.is_folder()));
    }

    #[test]
    fn test_parse_toolbar_only() {
        let html = r#"<DL><DT><H3 PERSONAL_TOOLBAR_FOLDER>Bar</H3><DL><DT><A HREF="http://a.com">A</A></DL></DL>"#;
        let tree = parse(html).unwrap();

        let mut expected = Folder::with_children(
            "Bar",
            vec![Bookmark::new("A", "http://a.com").into()],
        );
        expected.root_kind = Some(RootKind::Toolbar);
        assert_eq!(tree, vec![BookmarkNode::Folder(expected)]);
    }

    #[test]
    fn test_parse_unmarked_folder_goes_to_menu() {
        let tree = parse("<DL><DT><H3>Plain</H3></DL>").unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].root_kind(), Some(RootKind::Menu));
        let plain = tree[0].children()[0].as_folder().unwrap();
        assert_eq!(plain.title, "Plain");
        assert!(plain.root_kind.is_none());
        // no list at all: children unknown, not empty
        assert!(plain.children.is_none());
    }

    #[test]
    fn test_parse_full_export() {
        let tree = parse(EXPORT).unwrap();

        // marked roots in source order, menu last
        assert_eq!(titles(&tree), vec!["Bookmarks bar", "Other bookmarks", "Menu"]);
        assert_eq!(tree[0].root_kind(), Some(RootKind::Toolbar));
        assert_eq!(tree[1].root_kind(), Some(RootKind::Unsorted));
        assert_eq!(tree[2].root_kind(), Some(RootKind::Menu));

        let toolbar = tree[0].as_folder().unwrap();
        assert_eq!(toolbar.add_date.as_deref(), Some("1500000000"));
        assert_eq!(toolbar.last_modified.as_deref(), Some("1600000001"));
        assert_eq!(titles(toolbar.children()), vec!["Rust", "Crates"]);

        let rust = toolbar.children()[0].as_bookmark().unwrap();
        assert_eq!(rust.url, "https://rust-lang.org");
        assert_eq!(rust.icon.as_deref(), Some("data:image/png;base64,AAAA"));

        let crates = toolbar.children()[1].as_folder().unwrap();
        assert_eq!(titles(crates.children()), vec!["Serde", "Tokio"]);

        let other = tree[1].as_folder().unwrap();
        assert_eq!(other.children, Some(Vec::new()));

        assert_eq!(titles(tree[2].children()), vec!["News", "Reading"]);
        assert_eq!(titles(tree[2].children()[1].children()), vec!["Blog"]);
    }

    #[test]
    fn test_parse_depth_zero() {
        let tree = parse_with_depth(EXPORT, 0).unwrap();

        assert_eq!(titles(&tree), vec!["Bookmarks bar", "Other bookmarks", "Menu"]);
        assert_eq!(tree[0].as_folder().unwrap().children, Some(Vec::new()));
        assert_eq!(tree[1].as_folder().unwrap().children, Some(Vec::new()));
        // the synthesized menu still gathers the level-0 entries
        let reading = tree[2].children()[1].as_folder().unwrap();
        assert_eq!(reading.children, Some(Vec::new()));
    }

    #[test]
    fn test_parse_depth_one() {
        let tree = parse_with_depth(EXPORT, 1).unwrap();
        let toolbar = tree[0].as_folder().unwrap();
        assert_eq!(titles(toolbar.children()), vec!["Rust", "Crates"]);
        assert_eq!(toolbar.children()[1].as_folder().unwrap().children, Some(Vec::new()));
    }

    #[test]
    fn test_parse_dd_wrapped_children() {
        let html = "<DL><p>\n<DT><H3 PERSONAL_TOOLBAR_FOLDER>Bar</H3>\n<DD>Toolbar links\n<DL><p>\n<DT><A HREF=\"http://a.com\">A</A>\n</DL><p>\n</DL>";
        let tree = parse(html).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(titles(tree[0].children()), vec!["A"]);
    }

    #[test]
    fn test_parse_skips_unclassified_entries() {
        let html = "<DL><DT>stray text<DT><A HREF=\"x\">X</A><p>junk</p></DL>";
        let tree = parse(html).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(titles(tree[0].children()), vec!["X"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse("<DL></DL>").unwrap().is_empty());
    }

    #[test]
    fn test_parse_without_list_is_malformed() {
        assert_eq!(
            parse("<p>not bookmarks</p>"),
            Err(NetscapeError::MalformedDocument)
        );
    }
}
