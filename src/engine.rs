use crate::error::DigestError;
use crate::options::DigestOptions;
use crate::sort::sort_entries;
use crate::tree::render_tree;
use crate::types::{DigestResult, FileEntry};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    fn new(root: &Path, options: &DigestOptions) -> Result<Self, DigestError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .git_ignore(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .parents(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    DigestError::InvalidPattern(format!("'{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| DigestError::InvalidPattern(e.to_string()))?;
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }

    /// Collects every walked path, logging and skipping entries the walk
    /// cannot read. A single bad entry never aborts the scan.
    fn collect_paths(self) -> Vec<PathBuf> {
        self.inner
            .filter_map(|result| match result {
                Ok(entry) => Some(entry.into_path()),
                Err(e) => {
                    eprintln!("Warning: skipping unreadable entry: {}", e);
                    None
                }
            })
            .collect()
    }
}

fn scan_file(path: PathBuf, root: &Path, options: &DigestOptions) -> Option<FileEntry> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    let extension = options.matched_extension(&name)?.to_string();
    let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
    // Times are captured once here; a failed stat leaves None and the sorter
    // falls back to name ordering if it needs the missing key.
    let (modified, created) = match fs::metadata(&path) {
        Ok(meta) => (meta.modified().ok(), meta.created().ok()),
        Err(_) => (None, None),
    };
    Some(FileEntry {
        path,
        relative,
        extension,
        modified,
        created,
    })
}

/// Scans `options.root` for files matching the extension allow-list, sorts
/// them, and captures the directory tree overview.
pub fn digest(options: DigestOptions) -> Result<DigestResult, DigestError> {
    let root = options
        .root
        .canonicalize()
        .map_err(|e| DigestError::io(&options.root, e))?;
    if !root.is_dir() {
        return Err(DigestError::NotADirectory(root));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("scanning {}", root.display());
    let walker = Walker::new(&root, &options)?;
    let mut files: Vec<FileEntry> = walker
        .collect_paths()
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| scan_file(path, &root, &options))
        .collect();
    #[cfg(feature = "logging")]
    tracing::debug!("matched {} files", files.len());
    sort_entries(&mut files, options.sort);
    let tree = render_tree(&root);
    Ok(DigestResult { tree, files })
}
