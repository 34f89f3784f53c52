//! Netscape bookmark file serializer

use bookmarks_model::{Bookmark, BookmarkNode, Folder, RootKind};

const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
";

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Marker attribute the parser reads back for a root folder.
///
/// The synthesized menu has none, so it comes back as an ordinary folder.
fn root_marker(kind: RootKind) -> Option<&'static str> {
    match kind {
        RootKind::Toolbar => Some("PERSONAL_TOOLBAR_FOLDER"),
        RootKind::Unsorted => Some("UNFILED_BOOKMARKS_FOLDER"),
        RootKind::Menu => None,
    }
}

fn pad(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value.unwrap_or("")));
    out.push('"');
}

fn render_bookmark(bookmark: &Bookmark, out: &mut String, indent: usize) {
    pad(out, indent);
    out.push_str("<DT><A");
    push_attr(out, "HREF", Some(&bookmark.url));
    push_attr(out, "ADD_DATE", bookmark.add_date.as_deref());
    push_attr(out, "ICON", bookmark.icon.as_deref());
    push_attr(out, "DESCRIPTION", bookmark.description.as_deref());
    out.push('>');
    out.push_str(&escape_html(&bookmark.title));
    out.push_str("</A>\n");
}

fn render_folder(folder: &Folder, out: &mut String, indent: usize) {
    pad(out, indent);
    out.push_str("<DT><H3");
    push_attr(out, "ADD_DATE", folder.add_date.as_deref());
    push_attr(out, "LAST_MODIFIED", folder.last_modified.as_deref());
    if let Some(marker) = folder.root_kind.and_then(root_marker) {
        push_attr(out, marker, Some("true"));
    }
    out.push('>');
    out.push_str(&escape_html(&folder.title));
    out.push_str("</H3>\n");

    // An empty list is still written so it reads back as empty, not absent
    let Some(children) = folder.children.as_deref() else {
        return;
    };

    pad(out, indent);
    out.push_str("<DL><p>\n");
    render_nodes(children, out, indent + 2);
    pad(out, indent);
    out.push_str("</DL><p>\n");
}

fn render_nodes(nodes: &[BookmarkNode], out: &mut String, indent: usize) {
    for node in nodes {
        match node {
            BookmarkNode::Bookmark(bookmark) => render_bookmark(bookmark, out, indent),
            BookmarkNode::Folder(folder) => render_folder(folder, out, indent),
        }
    }
}

/// Render a bookmark tree as a complete Netscape bookmark file.
///
/// Absent optional fields become empty attributes, which the parser reads
/// back as absent. A folder gets a nested list, possibly empty, unless its
/// children are unknown.
pub fn render(nodes: &[BookmarkNode]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("<DL><p>\n");
    render_nodes(nodes, &mut out, 2);
    out.push_str("</DL><p>\n");
    out
}
