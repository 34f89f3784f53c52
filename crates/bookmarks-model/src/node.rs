//! Bookmark tree nodes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distinguished top-level container a folder stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootKind {
    /// Implicit "bookmarks menu" bucket, synthesized by the parser
    Menu,
    /// Browser toolbar (`PERSONAL_TOOLBAR_FOLDER`)
    Toolbar,
    /// Other / unfiled bookmarks (`UNFILED_BOOKMARKS_FOLDER`)
    Unsorted,
}

impl RootKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootKind::Menu => "menu",
            RootKind::Toolbar => "toolbar",
            RootKind::Unsorted => "unsorted",
        }
    }
}

impl std::fmt::Display for RootKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub title: String,
    /// Empty when the source anchor had no `href`
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}

/// A container entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_kind: Option<RootKind>,
    /// `None` when the source had no list for this folder at all,
    /// `Some(vec![])` when it had one with no entries (or depth ran out).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkNode>>,
}

impl Folder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Folder holding `children`, with a known (possibly empty) child list
    pub fn with_children(title: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        Self {
            title: title.into(),
            children: Some(children),
            ..Default::default()
        }
    }

    pub fn children(&self) -> &[BookmarkNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Mutable child list, materializing an empty one if none was recorded
    pub fn children_mut(&mut self) -> &mut Vec<BookmarkNode> {
        self.children.get_or_insert_with(Vec::new)
    }
}

/// One entry of a bookmark tree
///
/// Owned strictly hierarchically: a folder owns its children and nothing
/// points back up the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookmarkNode {
    Bookmark(Bookmark),
    Folder(Folder),
}

impl BookmarkNode {
    pub fn title(&self) -> &str {
        match self {
            BookmarkNode::Bookmark(b) => &b.title,
            BookmarkNode::Folder(f) => &f.title,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            BookmarkNode::Bookmark(b) => Some(&b.url),
            BookmarkNode::Folder(_) => None,
        }
    }

    pub fn add_date(&self) -> Option<&str> {
        match self {
            BookmarkNode::Bookmark(b) => b.add_date.as_deref(),
            BookmarkNode::Folder(f) => f.add_date.as_deref(),
        }
    }

    pub fn root_kind(&self) -> Option<RootKind> {
        match self {
            BookmarkNode::Bookmark(_) => None,
            BookmarkNode::Folder(f) => f.root_kind,
        }
    }

    /// Child entries; always empty for bookmarks
    pub fn children(&self) -> &[BookmarkNode] {
        match self {
            BookmarkNode::Bookmark(_) => &[],
            BookmarkNode::Folder(f) => f.children(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, BookmarkNode::Folder(_))
    }

    pub fn as_bookmark(&self) -> Option<&Bookmark> {
        match self {
            BookmarkNode::Bookmark(b) => Some(b),
            BookmarkNode::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            BookmarkNode::Folder(f) => Some(f),
            BookmarkNode::Bookmark(_) => None,
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            BookmarkNode::Folder(f) => Some(f),
            BookmarkNode::Bookmark(_) => None,
        }
    }

    /// Interpret `add_date` as a timestamp.
    ///
    /// Netscape exports store Unix epoch seconds; RFC 3339 strings are also
    /// accepted. Anything else yields `None`.
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.add_date()?.trim();
        if let Ok(secs) = raw.parse::<i64>() {
            return DateTime::from_timestamp(secs, 0);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<Bookmark> for BookmarkNode {
    fn from(bookmark: Bookmark) -> Self {
        BookmarkNode::Bookmark(bookmark)
    }
}

impl From<Folder> for BookmarkNode {
    fn from(folder: Folder) -> Self {
        BookmarkNode::Folder(folder)
    }
}
