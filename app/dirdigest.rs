//! Command-line interface for dirdigest.
//!
//! Scans a directory for files matching an extension allow-list and writes a
//! single digest file: a tree overview, an info line, and each file's content
//! in a delimited block.

use clap::Parser;
use dirdigest::{DigestBuilder, DigestOptions, SortKey, SortOrder, SortSpec, digest, output};
use std::path::PathBuf;
use std::process::exit;

/// dirdigest — concatenate a directory's text files into one digest file
#[derive(Parser)]
#[command(name = "dirdigest", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan for text files
    directory: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "digest.txt")]
    output: PathBuf,

    /// File extensions to include, case-insensitive (e.g. -e .md .py)
    #[arg(short, long, num_args = 1..)]
    extensions: Option<Vec<String>>,

    /// Sort key for file blocks: name, created (creation time, where the
    /// platform records one), or modified (modification time)
    #[arg(long = "sort-by", default_value = "name", value_parser = parse_sort_key)]
    sort_by: SortKey,

    /// Reverse the sort order
    #[arg(short, long)]
    reverse: bool,

    /// Glob patterns to exclude (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Respect .gitignore files under the root
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,
}

/// Parse string into SortKey enum.
fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    match s {
        "name" => Ok(SortKey::Name),
        "created" | "ctime" => Ok(SortKey::Created),
        "modified" | "mtime" => Ok(SortKey::Modified),
        _ => Err(format!("invalid sort key: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (DigestOptions, PathBuf) {
        let order = if self.reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        let mut builder = DigestBuilder::new(self.directory)
            .sort(SortSpec::new(self.sort_by, order))
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.skip_hidden)
            .follow_links(self.follow_links)
            .ignore_patterns(self.ignore_patterns);

        if let Some(extensions) = self.extensions {
            builder = builder.extensions(extensions);
        }
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.output)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, output_path) = cli.into_options();

    println!("Scanning directory: {}", options.root.display());
    println!(
        "Looking for file extensions: {}",
        options.extensions.join(", ")
    );

    let result = match digest(options.clone()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if result.files.is_empty() {
        eprintln!("Warning: no files found matching the specified extensions.");
    }
    println!("Found {} files to include.", result.files.len());
    println!("Writing digest to: {}", output_path.display());

    if let Err(e) = output::write_digest_to_file(&result, &options, &output_path) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Digest file created successfully.");
}
