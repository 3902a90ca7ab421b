// src/core/walker.rs
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::classify::is_source_file;
use crate::core::scanner::scan_code;
use crate::error::CheckError;
use crate::models::ScanTotals;

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Walks a source tree depth-first and checks every source file in it.
///
/// Hidden entries (names starting with `.`) are pruned together with
/// everything underneath them; the root itself is exempt so a hidden
/// directory can still be scanned when named explicitly. Traversal is
/// single-threaded and stops at the first error.
///
/// # Arguments
///
/// * `root` - The directory to scan
///
/// # Returns
///
/// * `Ok(ScanTotals)` - Counts of scanned files and resolved references
///
/// # Errors
///
/// This function may return an error if:
/// * The root or a subdirectory cannot be opened or read
/// * A source file cannot be read
/// * A file contains a malformed or unresolvable `@ref` annotation
pub fn check_tree(root: &Path) -> Result<ScanTotals, CheckError> {
    let mut totals = ScanTotals::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_source_file(path) {
            continue;
        }

        check_file(path, &mut totals)?;
    }

    Ok(totals)
}

/// Reads one source file into memory and scans it. The buffer lives
/// only for the duration of this call.
fn check_file(path: &Path, totals: &mut ScanTotals) -> Result<(), CheckError> {
    let code = fs::read(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let references = scan_code(&code, &file_name, path)?;
    totals.record_file(references);
    Ok(())
}
