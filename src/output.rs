//! Digest rendering and writing.
//!
//! Streams a [`DigestResult`] into any [`Write`] sink: a tree section, an
//! info line naming the active extensions and sort order, then one delimited
//! block per file. Content is decoded permissively, so undecodable bytes
//! become replacement characters instead of errors.

use crate::error::DigestError;
use crate::options::DigestOptions;
use crate::types::{DigestResult, FileEntry};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const SEPARATOR_WIDTH: usize = 80;

/// Writes the digest to `path`, creating parent directories as needed.
///
/// The file is opened once, written sequentially through a [`BufWriter`],
/// and flushed before returning.
pub fn write_digest_to_file(
    result: &DigestResult,
    options: &DigestOptions,
    path: impl AsRef<Path>,
) -> Result<(), DigestError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DigestError::io(parent, e))?;
        }
    }
    let file = File::create(path).map_err(|e| DigestError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_digest(&mut out, result, options).map_err(|e| DigestError::io(path, e))?;
    out.flush().map_err(|e| DigestError::io(path, e))?;
    Ok(())
}

/// Streams the digest into `out`.
///
/// For N matched files the output contains exactly N blocks; zero matches
/// produce a single explicit no-files notice instead of an empty list.
pub fn write_digest<W: Write>(
    out: &mut W,
    result: &DigestResult,
    options: &DigestOptions,
) -> std::io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);

    writeln!(out, "Directory structure:")?;
    out.write_all(result.tree.as_bytes())?;
    if !result.tree.ends_with('\n') { writeln!(out)?; }
    writeln!(out)?;
    writeln!(out, "{}", info_line(options))?;

    if result.files.is_empty() {
        writeln!(out, "\n\n[No files found matching the specified extensions.]")?;
        return Ok(());
    }

    for file in &result.files {
        write_file_block(out, file, &separator)?;
    }
    Ok(())
}

fn info_line(options: &DigestOptions) -> String {
    format!(
        "Included extensions: {} | Sorted by: {}",
        options.extensions.join(", "),
        options.sort.describe()
    )
}

/// Writes one delimited file block.
///
/// A failed read is recovered locally: the block carries an inline error
/// placeholder, a warning goes to stderr, and the writer moves on.
fn write_file_block<W: Write>(
    out: &mut W,
    file: &FileEntry,
    separator: &str,
) -> std::io::Result<()> {
    let display_path = format!("/{}", file.relative.display());
    writeln!(out, "\n\n{}", separator)?;
    writeln!(out, "File: {}", display_path)?;
    writeln!(out, "{}\n", separator)?;
    match fs::read(&file.path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            out.write_all(content.as_bytes())?;
            if !content.ends_with('\n') { writeln!(out)?; }
        }
        Err(e) => {
            eprintln!(
                "Warning: could not read file {}: {}",
                file.path.display(),
                e
            );
            writeln!(out, "[Error: could not read file {}: {}]\n", display_path, e)?;
        }
    }
    Ok(())
}
