//! Conversion options

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

pub const DEFAULT_PARSER: &str = "netscape";

const PARSER_VAR: &str = "BOOKMARKS_PARSER";
const MAX_DEPTH_VAR: &str = "BOOKMARKS_MAX_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Registered parser name
    pub parser: String,
    /// Deepest folder level to descend into; `None` for no limit
    pub max_depth: Option<usize>,
}

impl ConvertOptions {
    pub fn new(parser: impl Into<String>) -> Self {
        Self {
            parser: parser.into(),
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Defaults overridden by `BOOKMARKS_PARSER` and `BOOKMARKS_MAX_DEPTH`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();

        if let Some(parser) = lookup(PARSER_VAR).filter(|p| !p.trim().is_empty()) {
            options.parser = parser.trim().to_string();
        }

        if let Some(depth) = lookup(MAX_DEPTH_VAR) {
            let depth = depth.trim().parse::<usize>().map_err(|e| {
                CoreError::Config(format!("{MAX_DEPTH_VAR}={depth:?}: {e}"))
            })?;
            options.max_depth = Some(depth);
        }

        Ok(options)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PARSER)
    }
}
