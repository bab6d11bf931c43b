use dirdigest::{
    DigestBuilder,
    DigestResult,
    FileEntry,
    SortKey,
    SortOrder,
    SortSpec,
    digest,
    normalize_extension,
    output,
    sort_entries,
};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

fn entry(name: &str, modified: Option<SystemTime>, created: Option<SystemTime>) -> FileEntry {
    FileEntry {
        path: PathBuf::from(name),
        relative: PathBuf::from(name),
        extension: ".txt".to_string(),
        modified,
        created,
    }
}

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

#[test]
fn test_extension_filtering() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "alpha").unwrap();
    fs::write(dir.path().join("b.py"), "beta").unwrap();
    fs::write(dir.path().join("img.png"), [0u8, 1, 2]).unwrap();
    let options = DigestBuilder::new(dir.path())
        .extensions([".md", ".py"])
        .build();
    let result = digest(options).unwrap();
    assert_eq!(result.files.len(), 2);
    assert!(
        result
            .files
            .iter()
            .all(|f| f.extension == ".md" || f.extension == ".py")
    );
}

#[test]
fn test_case_insensitive_match() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.MD"), "hello").unwrap();
    let options = DigestBuilder::new(dir.path()).extensions(["md"]).build();
    let result = digest(options).unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].extension, ".md");
}

#[test]
fn test_normalize_extension() {
    assert_eq!(normalize_extension("MD"), ".md");
    assert_eq!(normalize_extension(".Py"), ".py");
    assert_eq!(normalize_extension("txt"), ".txt");
}

#[test]
fn test_sort_by_name() {
    let mut entries = vec![entry("b.txt", None, None), entry("a.txt", None, None)];
    sort_entries(
        &mut entries,
        SortSpec::new(SortKey::Name, SortOrder::Ascending),
    );
    assert_eq!(entries[0].path, PathBuf::from("a.txt"));
    assert_eq!(entries[1].path, PathBuf::from("b.txt"));
}

#[test]
fn test_sort_by_modified() {
    let mut entries = vec![
        entry("new.txt", Some(at(200)), None),
        entry("old.txt", Some(at(100)), None),
    ];
    sort_entries(
        &mut entries,
        SortSpec::new(SortKey::Modified, SortOrder::Ascending),
    );
    assert_eq!(entries[0].path, PathBuf::from("old.txt"));
}

#[test]
fn test_stable_sort_keeps_enumeration_order_on_ties() {
    let t = at(100);
    let mut entries = vec![
        entry("z.txt", Some(t), Some(t)),
        entry("a.txt", Some(t), Some(t)),
    ];
    sort_entries(
        &mut entries,
        SortSpec::new(SortKey::Modified, SortOrder::Ascending),
    );
    assert_eq!(entries[0].path, PathBuf::from("z.txt"));
}

#[test]
fn test_reverse_exactly_inverts_forward_order() {
    let forward_input = vec![
        entry("b.txt", Some(at(2)), None),
        entry("a.txt", Some(at(1)), None),
        entry("c.txt", Some(at(3)), None),
    ];
    let mut forward = forward_input.clone();
    let mut reversed = forward_input;
    sort_entries(
        &mut forward,
        SortSpec::new(SortKey::Modified, SortOrder::Ascending),
    );
    sort_entries(
        &mut reversed,
        SortSpec::new(SortKey::Modified, SortOrder::Descending),
    );
    let forward_paths: Vec<_> = forward.iter().map(|e| e.path.clone()).collect();
    let mut reversed_paths: Vec<_> = reversed.iter().map(|e| e.path.clone()).collect();
    reversed_paths.reverse();
    assert_eq!(forward_paths, reversed_paths);
}

#[test]
fn test_missing_time_falls_back_to_name_for_whole_batch() {
    let mut entries = vec![
        entry("b.txt", Some(at(100)), Some(at(100))),
        entry("a.txt", None, None),
    ];
    sort_entries(
        &mut entries,
        SortSpec::new(SortKey::Created, SortOrder::Ascending),
    );
    assert_eq!(entries[0].path, PathBuf::from("a.txt"));
    assert_eq!(entries[1].path, PathBuf::from("b.txt"));
}

#[test]
fn test_no_files_notice() {
    let result = DigestResult {
        tree: "[Could not generate tree view. 'tree' command not found.]\n".to_string(),
        files: Vec::new(),
    };
    let options = DigestBuilder::new(".").build();
    let mut out = Vec::new();
    output::write_digest(&mut out, &result, &options).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[No files found matching the specified extensions.]"));
    assert_eq!(text.matches("Directory structure:").count(), 1);
}

#[test]
fn test_file_block_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "no trailing newline").unwrap();
    let options = DigestBuilder::new(dir.path()).extensions([".md"]).build();
    let result = digest(options.clone()).unwrap();
    let mut out = Vec::new();
    output::write_digest(&mut out, &result, &options).unwrap();
    let text = String::from_utf8(out).unwrap();
    let separator = "=".repeat(80);
    assert!(text.contains(&format!("{}\nFile: /a.md\n{}\n", separator, separator)));
    assert!(text.contains("no trailing newline\n"));
    assert!(text.contains("Included extensions: .md | Sorted by: name (ascending)"));
}

#[test]
fn test_unreadable_file_gets_inline_placeholder() {
    let dir = tempdir().unwrap();
    let result = DigestResult {
        tree: String::new(),
        files: vec![FileEntry {
            path: dir.path().join("missing.txt"),
            relative: PathBuf::from("missing.txt"),
            extension: ".txt".to_string(),
            modified: None,
            created: None,
        }],
    };
    let options = DigestBuilder::new(dir.path()).build();
    let mut out = Vec::new();
    output::write_digest(&mut out, &result, &options).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[Error: could not read file /missing.txt:"));
}

#[test]
fn test_undecodable_bytes_are_replaced() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("weird.txt"), b"ok \xff\xfe bytes").unwrap();
    let options = DigestBuilder::new(dir.path()).extensions([".txt"]).build();
    let result = digest(options.clone()).unwrap();
    let mut out = Vec::new();
    output::write_digest(&mut out, &result, &options).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("ok \u{FFFD}\u{FFFD} bytes"));
}
