//! Internal module for capturing the directory tree overview.

use std::path::Path;
use std::process::Command;

/// Runs the system `tree` command scoped to `root` and captures its output.
///
/// Failure is never fatal: a missing command or a non-zero exit yields a
/// bracketed placeholder in the digest and a warning on stderr, and the run
/// continues.
pub(crate) fn render_tree(root: &Path) -> String {
    match Command::new("tree").arg(root).output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).into_owned()
        }
        Ok(output) => {
            eprintln!("Warning: 'tree' command failed ({}).", output.status);
            format!(
                "[Could not generate tree view. 'tree' command failed.]\n[Error: {}]\n",
                String::from_utf8_lossy(&output.stderr).trim_end()
            )
        }
        Err(e) => {
            eprintln!("Warning: 'tree' command not found: {}", e);
            "[Could not generate tree view. 'tree' command not found.]\n".to_string()
        }
    }
}
