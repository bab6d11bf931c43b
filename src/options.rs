use crate::sort::SortSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extensions treated as text when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".py", ".js", ".html", ".css", ".tex", ".rst", ".json", ".yaml", ".yml",
    ".xml", ".sh", ".bash",
];

/// Normalizes an extension to its canonical form: lowercase, dot-prefixed.
pub fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim_start_matches('.').to_lowercase())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestOptions {
    pub root: PathBuf,
    /// Normalized extension allow-list.
    pub extensions: Vec<String>,
    pub sort: SortSpec,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            sort: SortSpec::default(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
            ignore_patterns: Vec::new(),
        }
    }
}

impl DigestOptions {
    /// Returns the allow-list extension a file name matches, if any.
    ///
    /// Matching is a case-insensitive suffix check against the file name.
    pub fn matched_extension(&self, file_name: &str) -> Option<&str> {
        let lower = file_name.to_lowercase();
        self.extensions
            .iter()
            .find(|ext| lower.ends_with(ext.as_str()))
            .map(|ext| ext.as_str())
    }
}

#[derive(Debug, Default)]
pub struct DigestBuilder {
    options: DigestOptions,
}

impl DigestBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DigestOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }
    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.options.sort = sort;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> DigestOptions {
        self.options
    }
}
