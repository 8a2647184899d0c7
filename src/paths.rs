//! Expands a comma-separated path argument into concrete config files.
//!
//! Accepts plain files, directories (their directly-contained `.yaml` /
//! `.yml` files, non-recursive), and glob patterns (`**` recurses). Entries
//! that do not resolve are warned about and skipped; resolution never fails
//! the run by itself.

use std::path::{Path, PathBuf};

use tracing::warn;

/// Resolve a comma-separated list of files, directories, and glob patterns
/// into an ordered list of configuration file paths.
pub fn resolve_paths(input: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let path = Path::new(entry);
        if entry.contains('*') || entry.contains('?') {
            push_glob_matches(entry, &mut files);
        } else if path.is_file() {
            if has_config_extension(path) {
                files.push(path.to_path_buf());
            } else {
                warn!("skipping non-YAML file: {}", path.display());
            }
        } else if path.is_dir() {
            for ext in ["yaml", "yml"] {
                let pattern = path.join(format!("*.{ext}"));
                push_glob_matches(&pattern.to_string_lossy(), &mut files);
            }
        } else {
            warn!("path does not exist: {}", path.display());
        }
    }

    files
}

fn push_glob_matches(pattern: &str, files: &mut Vec<PathBuf>) {
    let matches = match glob::glob(pattern) {
        Ok(matches) => matches,
        Err(e) => {
            warn!("invalid glob pattern '{pattern}': {e}");
            return;
        }
    };
    for entry in matches {
        match entry {
            Ok(path) if path.is_file() && has_config_extension(&path) => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("unreadable glob match: {e}"),
        }
    }
}

fn has_config_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "yaml" || ext == "yml"
        })
}
