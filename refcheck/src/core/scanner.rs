// src/core/scanner.rs
use std::path::Path;

use crate::core::resolver::resolve_name;
use crate::error::CheckError;

/// The annotation keyword with its single mandatory trailing space.
pub const MARKER: &[u8] = b"@ref ";

const fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Scans one file's contents for `@ref <name>` annotations and resolves
/// each one against the same buffer.
///
/// The walk is byte-by-byte with no backtracking; a second marker may
/// start anywhere after the first, including inside the first marker's
/// identifier run. Every marker is resolved before the scan continues.
///
/// # Arguments
///
/// * `code` - The full file contents
/// * `file_name` - The file's name, for diagnostics
/// * `path` - The file's full path, for diagnostics
///
/// # Returns
///
/// * `Ok(u64)` - The number of annotations that resolved
///
/// # Errors
///
/// This function may return an error if:
/// * A marker is followed by two or more spaces (`CheckError::ExtraSpace`)
/// * An extracted identifier has no declaration/usage site in the file
///   (`CheckError::Unresolved`)
pub fn scan_code(code: &[u8], file_name: &str, path: &Path) -> Result<u64, CheckError> {
    let mut references: u64 = 0;

    for i in 0..code.len() {
        if !code[i..].starts_with(MARKER) {
            continue;
        }

        let rest = &code[i + MARKER.len()..];
        if rest.first() == Some(&b' ') {
            return Err(CheckError::ExtraSpace {
                path: path.to_path_buf(),
            });
        }

        let name_len = rest.iter().take_while(|&&b| is_identifier_byte(b)).count();
        let name = &rest[..name_len];

        if !resolve_name(code, name) {
            return Err(CheckError::Unresolved {
                name: String::from_utf8_lossy(name).into_owned(),
                file: file_name.to_owned(),
                path: path.to_path_buf(),
            });
        }

        references = references.saturating_add(1);
    }

    Ok(references)
}
