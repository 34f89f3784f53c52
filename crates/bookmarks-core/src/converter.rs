//! Parser registry and conversion entry points

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use bookmarks_model::BookmarkNode;

use crate::config::ConvertOptions;
use crate::error::{CoreError, ParserError};
use crate::parser::{BookmarkParser, NetscapeParser};
use crate::Result;

type SuccessHook = Box<dyn Fn(&[BookmarkNode]) + Send + Sync>;
type FailureHook = Box<dyn Fn(&CoreError) + Send + Sync>;

/// Optional side-channel notifications for a conversion.
///
/// Hooks run just before the result is returned and never change it.
#[derive(Default)]
pub struct ConvertHooks {
    on_success: Option<SuccessHook>,
    on_failure: Option<FailureHook>,
}

impl ConvertHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(mut self, hook: impl Fn(&[BookmarkNode]) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(hook));
        self
    }

    pub fn on_failure(mut self, hook: impl Fn(&CoreError) + Send + Sync + 'static) -> Self {
        self.on_failure = Some(Box::new(hook));
        self
    }
}

/// Converts bookmark exports using a registry of named parsers
///
/// Cloning is cheap and clones share the registry.
#[derive(Clone)]
pub struct Converter {
    parsers: Arc<RwLock<HashMap<String, Arc<dyn BookmarkParser>>>>,
}

impl Converter {
    /// Converter with the built-in parsers registered
    pub fn new() -> Self {
        let converter = Self::empty();
        converter.register(NetscapeParser);
        converter
    }

    /// Converter with no parsers at all
    pub fn empty() -> Self {
        Self {
            parsers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a parser, replacing any previous one with the same name
    pub fn register(&self, parser: impl BookmarkParser + 'static) {
        let name = parser.name().to_string();
        let replaced = self
            .parsers
            .write()
            .insert(name.clone(), Arc::new(parser))
            .is_some();
        tracing::debug!(parser = %name, replaced, "Registered bookmark parser");
    }

    /// Registered parser names, sorted
    pub fn parsers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.parsers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn convert(&self, code: &str, options: &ConvertOptions) -> Result<Vec<BookmarkNode>> {
        self.convert_with(code, options, &ConvertHooks::default())
    }

    /// [`Converter::convert`], reporting the outcome to `hooks` as well
    pub fn convert_with(
        &self,
        code: &str,
        options: &ConvertOptions,
        hooks: &ConvertHooks,
    ) -> Result<Vec<BookmarkNode>> {
        match self.run(code, options) {
            Ok(nodes) => {
                tracing::info!(
                    parser = %options.parser,
                    top_level = nodes.len(),
                    "Parsing succeeded"
                );
                if let Some(hook) = &hooks.on_success {
                    hook(&nodes);
                }
                Ok(nodes)
            }
            Err(err) => {
                tracing::error!(parser = %options.parser, "{}", err);
                if let Some(hook) = &hooks.on_failure {
                    hook(&err);
                }
                Err(err)
            }
        }
    }

    fn run(&self, code: &str, options: &ConvertOptions) -> Result<Vec<BookmarkNode>> {
        if code.trim().is_empty() {
            return Err(CoreError::InvalidInput);
        }

        // Clone the handle so the lock is not held while parsing
        let parser = self
            .parsers
            .read()
            .get(&options.parser)
            .cloned()
            .ok_or_else(|| CoreError::UnknownParser(options.parser.clone()))?;

        if !parser.can_parse(code) {
            return Err(CoreError::UnrecognizedFormat(options.parser.clone()));
        }

        parser
            .parse(code, options.max_depth)
            .map_err(|err| match err {
                ParserError::Malformed(message) => CoreError::MalformedDocument {
                    parser: options.parser.clone(),
                    message,
                },
                ParserError::Failed(message) => CoreError::ParseFailure {
                    parser: options.parser.clone(),
                    message,
                },
            })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `code` as a Netscape bookmark file with default options
pub fn convert(code: &str) -> Result<Vec<BookmarkNode>> {
    Converter::new().convert(code, &ConvertOptions::default())
}

/// Pretty-printed JSON encoding of a tree
pub fn convert_to_json(nodes: &[BookmarkNode]) -> Result<String> {
    Ok(bookmarks_model::to_json(nodes)?)
}

/// Netscape bookmark file for a tree
pub fn convert_to_html(nodes: &[BookmarkNode]) -> String {
    bookmarks_netscape::render(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmarks_model::{Bookmark, RootKind};
    use parking_lot::Mutex;

    const SIMPLE: &str = r#"<DL><p>
        <DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bar</H3>
        <DL><p>
            <DT><A HREF="http://a.com">A</A>
        </DL><p>
        <DT><A HREF="http://b.com">B</A>
    </DL>"#;

    struct FailingParser;

    impl BookmarkParser for FailingParser {
        fn name(&self) -> &str {
            "failing"
        }

        fn can_parse(&self, _code: &str) -> bool {
            true
        }

        fn parse(
            &self,
            _code: &str,
            _max_depth: Option<usize>,
        ) -> std::result::Result<Vec<BookmarkNode>, ParserError> {
            Err(ParserError::Failed("DOM provider fault".to_string()))
        }
    }

    struct LinesParser;

    impl BookmarkParser for LinesParser {
        fn name(&self) -> &str {
            "lines"
        }

        fn can_parse(&self, code: &str) -> bool {
            code.lines().all(|l| l.trim().starts_with("http"))
        }

        fn parse(
            &self,
            code: &str,
            _max_depth: Option<usize>,
        ) -> std::result::Result<Vec<BookmarkNode>, ParserError> {
            Ok(code
                .lines()
                .map(|l| Bookmark::new(l.trim(), l.trim()).into())
                .collect())
        }
    }

    #[test]
    fn test_convert_default() {
        let tree = convert(SIMPLE).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].root_kind(), Some(RootKind::Toolbar));
        assert_eq!(tree[1].root_kind(), Some(RootKind::Menu));
        assert_eq!(tree[1].children()[0].title(), "B");
    }

    #[test]
    fn test_convert_with_max_depth() {
        let converter = Converter::new();
        let tree = converter
            .convert(SIMPLE, &ConvertOptions::default().with_max_depth(0))
            .unwrap();
        assert!(tree[0].children().is_empty());
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(convert(""), Err(CoreError::InvalidInput)));
        assert!(matches!(convert(" \n\t "), Err(CoreError::InvalidInput)));
    }

    #[test]
    fn test_unknown_parser() {
        let err = Converter::new()
            .convert(SIMPLE, &ConvertOptions::new("firefox"))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownParser(ref name) if name == "firefox"));
        assert_eq!(err.to_string(), "Parser \"firefox\" does not exist");
    }

    #[test]
    fn test_unrecognized_format() {
        let err = convert("plain text, not markup").unwrap_err();
        assert!(matches!(err, CoreError::UnrecognizedFormat(_)));

        let err = convert("<html><body><p>hello</p></body></html>").unwrap_err();
        assert!(matches!(err, CoreError::UnrecognizedFormat(_)));
    }

    #[test]
    fn test_malformed_document() {
        // passes sniffing, but the only <dl> is inside a comment
        let html = r#"<!-- <dl></dl> --><dt><a href="http://x">x</a>"#;
        let err = convert(html).unwrap_err();
        assert!(matches!(err, CoreError::MalformedDocument { ref parser, .. } if parser == "netscape"));
    }

    #[test]
    fn test_parse_failure_is_wrapped() {
        let converter = Converter::new();
        converter.register(FailingParser);

        let err = converter
            .convert("anything", &ConvertOptions::new("failing"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "An error occurred while parsing with \"failing\": DOM provider fault"
        );
    }

    #[test]
    fn test_register_custom_parser() {
        let converter = Converter::new();
        converter.register(LinesParser);
        assert_eq!(converter.parsers(), vec!["lines", "netscape"]);

        let tree = converter
            .convert("http://a\nhttp://b", &ConvertOptions::new("lines"))
            .unwrap();
        assert_eq!(tree.len(), 2);

        // clones share the registry
        let empty = Converter::empty();
        let clone = empty.clone();
        clone.register(LinesParser);
        assert_eq!(empty.parsers(), vec!["lines"]);
    }

    #[test]
    fn test_hooks() {
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let ok_seen = Arc::clone(&seen);
        let err_seen = Arc::clone(&seen);
        let hooks = ConvertHooks::new()
            .on_success(move |nodes| ok_seen.lock().push(format!("ok:{}", nodes.len())))
            .on_failure(move |err| err_seen.lock().push(format!("err:{err}")));

        let converter = Converter::new();
        let options = ConvertOptions::default();
        let tree = converter.convert_with(SIMPLE, &options, &hooks).unwrap();
        assert_eq!(tree.len(), 2);
        assert!(converter.convert_with("", &options, &hooks).is_err());

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], "ok:2");
        assert!(seen[1].starts_with("err:Invalid input"));
    }

    #[test]
    fn test_convert_to_json_and_html() {
        let tree = convert(SIMPLE).unwrap();

        let json = convert_to_json(&tree).unwrap();
        assert!(json.contains("\"rootKind\": \"toolbar\""));
        assert!(json.contains("\"url\": \"http://a.com\""));

        let html = convert_to_html(&tree);
        let reparsed = convert(&html).unwrap();
        assert_eq!(reparsed[0], tree[0]);
    }
}
