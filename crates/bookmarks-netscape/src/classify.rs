//! Per-entry classification of `<DT>` elements

use bookmarks_model::{Bookmark, BookmarkNode, Folder, RootKind};

use crate::dom::HtmlNode;
use crate::Result;

const TOOLBAR_MARKER: &str = "personal_toolbar_folder";
const UNSORTED_MARKER: &str = "unfiled_bookmarks_folder";

/// A classified entry paired with the list its children still have to be
/// read from. The pending list never becomes part of the node itself.
pub(crate) struct Classified<N> {
    pub node: BookmarkNode,
    pub children_source: Option<N>,
}

fn optional_attr<'a, N: HtmlNode<'a>>(node: &N, name: &str) -> Option<String> {
    node.attr(name)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn bookmark_from_anchor<'a, N: HtmlNode<'a>>(anchor: &N) -> Bookmark {
    Bookmark {
        title: anchor.text(),
        url: anchor.attr("href").unwrap_or_default().to_string(),
        add_date: optional_attr(anchor, "add_date"),
        icon: optional_attr(anchor, "icon"),
        description: optional_attr(anchor, "description"),
    }
}

fn folder_from_heading<'a, N: HtmlNode<'a>>(heading: &N) -> Folder {
    // Toolbar is checked first and wins when both markers are present.
    let root_kind = if heading.attr(TOOLBAR_MARKER).is_some() {
        Some(RootKind::Toolbar)
    } else if heading.attr(UNSORTED_MARKER).is_some() {
        Some(RootKind::Unsorted)
    } else {
        None
    };

    Folder {
        title: heading.text(),
        add_date: optional_attr(heading, "add_date"),
        last_modified: optional_attr(heading, "last_modified"),
        root_kind,
        children: None,
    }
}

/// Classify one `<DT>` by its direct children.
///
/// Returns `None` for an entry holding neither an anchor nor a heading. When
/// an entry has both, the later one decides.
pub(crate) fn classify<'a, N: HtmlNode<'a>>(dt: N) -> Result<Option<Classified<N>>> {
    let mut node = None;
    let mut children_source = None;

    for child in dt.children() {
        match child.tag_name() {
            Some("a") => node = Some(BookmarkNode::Bookmark(bookmark_from_anchor(&child))),
            Some("h3") => node = Some(BookmarkNode::Folder(folder_from_heading(&child))),
            Some("dl") if children_source.is_none() => children_source = Some(child),
            _ => {}
        }
    }

    let Some(node) = node else {
        return Ok(None);
    };

    if !node.is_folder() {
        return Ok(Some(Classified {
            node,
            children_source: None,
        }));
    }

    if children_source.is_none() {
        children_source = description_list(dt)?;
    }

    Ok(Some(Classified {
        node,
        children_source,
    }))
}

/// Children nested in a `<DD>` right after the entry instead of inside it
fn description_list<'a, N: HtmlNode<'a>>(dt: N) -> Result<Option<N>> {
    let mut sibling = dt.next_sibling();
    while let Some(node) = sibling.filter(|n| n.is_blank()) {
        sibling = node.next_sibling();
    }

    match sibling {
        Some(dd) if dd.is_element("dd") => dd.select_first("dl"),
        _ => Ok(None),
    }
}
