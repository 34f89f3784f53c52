//! HTML DOM provider
//!
//! The tree builder only needs a handful of read-only queries over a parsed
//! document, so it is written against [`HtmlDocument`] and [`HtmlNode`]
//! rather than a concrete parser. [`ScraperDocument`] is the html5ever-backed
//! implementation used by [`crate::parse`].

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::NetscapeError;
use crate::Result;

/// A parsed document that can be queried by CSS selector
pub trait HtmlDocument {
    type Node<'a>: HtmlNode<'a>
    where
        Self: 'a;

    fn parse(html: &str) -> Self
    where
        Self: Sized;

    /// Every element matching `selector`, in document order
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Node<'_>>>;
}

/// Read-only handle on one node of an [`HtmlDocument`]
pub trait HtmlNode<'a>: Copy {
    /// Lowercase tag name, `None` for text, comments and other non-elements
    fn tag_name(&self) -> Option<&'a str>;

    /// Attribute value by (lowercase) name; `Some("")` for a bare attribute
    fn attr(&self, name: &str) -> Option<&'a str>;

    /// Concatenated text of all descendant text nodes
    fn text(&self) -> String;

    fn children(&self) -> Vec<Self>;

    fn next_sibling(&self) -> Option<Self>;

    /// First descendant element matching `selector`
    fn select_first(&self, selector: &str) -> Result<Option<Self>>;

    /// Whitespace-only text or a comment
    fn is_blank(&self) -> bool;

    fn is_element(&self, tag: &str) -> bool {
        self.tag_name() == Some(tag)
    }
}

fn selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| NetscapeError::Selector(e.to_string()))
}

/// html5ever document via `scraper`
pub struct ScraperDocument(Html);

impl HtmlDocument for ScraperDocument {
    type Node<'a> = ScraperNode<'a>;

    fn parse(html: &str) -> Self {
        Self(Html::parse_document(html))
    }

    fn select_all(&self, query: &str) -> Result<Vec<ScraperNode<'_>>> {
        let sel = selector(query)?;
        Ok(self.0.select(&sel).map(|el| ScraperNode(*el)).collect())
    }
}

#[derive(Clone, Copy)]
pub struct ScraperNode<'a>(NodeRef<'a, Node>);

impl<'a> HtmlNode<'a> for ScraperNode<'a> {
    fn tag_name(&self) -> Option<&'a str> {
        self.0.value().as_element().map(|el| el.name())
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().as_element().and_then(|el| el.attr(name))
    }

    fn text(&self) -> String {
        match ElementRef::wrap(self.0) {
            Some(el) => el.text().collect(),
            None => self
                .0
                .value()
                .as_text()
                .map(|t| String::from(&*t.text))
                .unwrap_or_default(),
        }
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().map(ScraperNode).collect()
    }

    fn next_sibling(&self) -> Option<Self> {
        self.0.next_sibling().map(ScraperNode)
    }

    fn select_first(&self, query: &str) -> Result<Option<Self>> {
        let Some(el) = ElementRef::wrap(self.0) else {
            return Ok(None);
        };
        let sel = selector(query)?;
        let found = el.select(&sel).next().map(|hit| ScraperNode(*hit));
        Ok(found)
    }

    fn is_blank(&self) -> bool {
        match self.0.value() {
            Node::Text(t) => t.text.trim().is_empty(),
            Node::Comment(_) => true,
            _ => false,
        }
    }
}
