//! Post-processing over an already-built tree

use std::cmp::Ordering;

use crate::node::{Bookmark, BookmarkNode};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Bookmark and folder totals for a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub bookmarks: usize,
    pub folders: usize,
    /// Deepest nesting level reached, top level being 0
    pub max_depth: usize,
}

/// Sort one level of entries by `add_date`.
///
/// The sort is stable. Entries without a parseable date go after every dated
/// entry regardless of `order`.
pub fn sort_by_date(nodes: &mut [BookmarkNode], order: SortOrder) {
    nodes.sort_by(|a, b| match (a.added_at(), b.added_at()) {
        (Some(x), Some(y)) => match order {
            SortOrder::Ascending => x.cmp(&y),
            SortOrder::Descending => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// [`sort_by_date`] applied to every level of the tree
pub fn sort_tree_by_date(nodes: &mut [BookmarkNode], order: SortOrder) {
    sort_by_date(nodes, order);
    for node in nodes.iter_mut() {
        if let Some(children) = node.as_folder_mut().and_then(|f| f.children.as_mut()) {
            sort_tree_by_date(children, order);
        }
    }
}

/// Keep the top-level entries whose title or URL contains `keyword`.
///
/// Case-sensitive, and does not descend into folders.
pub fn filter_by_keyword(nodes: &[BookmarkNode], keyword: &str) -> Vec<BookmarkNode> {
    nodes
        .iter()
        .filter(|node| {
            node.title().contains(keyword) || node.url().is_some_and(|u| u.contains(keyword))
        })
        .cloned()
        .collect()
}

/// Find bookmarks anywhere in the tree whose title or URL contains `query`,
/// ignoring case. Results come back in depth-first order.
pub fn search<'a>(nodes: &'a [BookmarkNode], query: &str) -> Vec<&'a Bookmark> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    walk(nodes)
        .filter_map(|(_, node)| node.as_bookmark())
        .filter(|b| {
            b.title.to_lowercase().contains(&query) || b.url.to_lowercase().contains(&query)
        })
        .collect()
}

/// Depth-first, pre-order iteration yielding `(depth, node)` pairs
pub fn walk(nodes: &[BookmarkNode]) -> impl Iterator<Item = (usize, &BookmarkNode)> {
    let mut stack: Vec<(usize, &BookmarkNode)> = nodes.iter().rev().map(|n| (0, n)).collect();
    std::iter::from_fn(move || {
        let (depth, node) = stack.pop()?;
        stack.extend(node.children().iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    })
}

pub fn count(nodes: &[BookmarkNode]) -> TreeStats {
    walk(nodes).fold(TreeStats::default(), |mut stats, (depth, node)| {
        if node.is_folder() {
            stats.folders += 1;
        } else {
            stats.bookmarks += 1;
        }
        stats.max_depth = stats.max_depth.max(depth);
        stats
    })
}

/// Pretty-printed JSON with two-space indentation
pub fn to_json(nodes: &[BookmarkNode]) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

pub fn from_json(json: &str) -> Result<Vec<BookmarkNode>> {
    Ok(serde_json::from_str(json)?)
}
