// src/core/classify.rs
use std::path::Path;

/// Extensions that mark a file as a scannable source file.
const SOURCE_EXTENSIONS: [&str; 4] = [".h", ".c", ".hpp", ".cpp"];

/// Returns `true` for files the checker should scan. The match is a
/// case-sensitive suffix check; anything else is skipped silently and
/// contributes nothing to the totals.
#[must_use]
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}
