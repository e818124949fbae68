use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Searches `dir` recursively for a file named exactly `file_name`.
///
/// Entries are visited top-down, depth-first, with each directory's
/// children sorted lexicographically by file name, and the match from the
/// directory visited last in that order wins. Matching is case-sensitive
/// with no wildcards.
pub fn find_file(dir: &Path, file_name: &str) -> Result<Option<PathBuf>, walkdir::Error> {
    let mut found = None;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name().to_str() == Some(file_name) {
            found = Some(entry.into_path());
        }
    }
    Ok(found)
}
