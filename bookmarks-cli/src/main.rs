//! Bookmarks CLI
//!
//! Reads a bookmark export, converts it and writes JSON or a regenerated
//! Netscape bookmark file. The only place file I/O happens.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

use bookmarks_core::{
    convert_to_html, convert_to_json, count, filter_by_keyword, search, sort_tree_by_date,
    BookmarkNode, ConvertOptions, Converter, SortOrder, TreeStats,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sort {
    Asc,
    Desc,
}

impl From<Sort> for SortOrder {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Asc => SortOrder::Ascending,
            Sort::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Bookmark export to read
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Input parser (default: $BOOKMARKS_PARSER or "netscape")
    #[arg(long)]
    parser: Option<String>,

    /// Deepest folder level to read (default: $BOOKMARKS_MAX_DEPTH or unlimited)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Sort every folder by date added
    #[arg(long, value_enum)]
    sort: Option<Sort>,

    /// Keep only top-level entries whose title or URL contains this text
    #[arg(long)]
    filter: Option<String>,

    /// Output only the bookmarks anywhere in the tree matching this text (any case)
    #[arg(long)]
    search: Option<String>,

    /// Print bookmark and folder totals to stderr
    #[arg(long)]
    stats: bool,
}

fn print_stats(stats: &TreeStats) {
    eprintln!(
        "{} bookmarks, {} folders, max depth {}",
        stats.bookmarks, stats.folders, stats.max_depth
    );
}

fn main() -> Result<()> {
    bookmarks_core::init_logging();
    let cli = Cli::parse();

    let mut options = ConvertOptions::from_env()?;
    if let Some(parser) = cli.parser {
        options.parser = parser;
    }
    if let Some(depth) = cli.max_depth {
        options.max_depth = Some(depth);
    }

    let code = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let mut nodes = Converter::new().convert(&code, &options)?;
    if let Some(sort) = cli.sort {
        sort_tree_by_date(&mut nodes, sort.into());
    }
    if let Some(keyword) = cli.filter.as_deref() {
        nodes = filter_by_keyword(&nodes, keyword);
    }
    if let Some(query) = cli.search.as_deref() {
        let hits: Vec<BookmarkNode> = search(&nodes, query)
            .into_iter()
            .cloned()
            .map(BookmarkNode::from)
            .collect();
        tracing::info!(query = %query, hits = hits.len(), "Searched bookmarks");
        nodes = hits;
    }
    if cli.stats {
        print_stats(&count(&nodes));
    }

    let rendered = match cli.format {
        Format::Json => convert_to_json(&nodes)?,
        Format::Html => convert_to_html(&nodes),
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote bookmarks");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
