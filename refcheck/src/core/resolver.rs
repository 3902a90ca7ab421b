// src/core/resolver.rs

use super::scanner::MARKER;

/// Decides whether `name` occurs in `code` as a plausible declaration or
/// usage site, distinct from its own `@ref` mention.
///
/// The scan keeps a restartable match cursor over `name`: any mismatch
/// resets the whole candidate match rather than sliding to the next
/// possible start. A candidate may only start at the beginning of the
/// buffer or right after an ASCII space, and never directly after the
/// literal `@ref `. A completed match counts only if the very next byte
/// is `(` or `;`; a match ending at the last byte of the buffer fails
/// the whole lookup.
///
/// # Arguments
///
/// * `code` - The full file contents
/// * `name` - The identifier extracted from an `@ref` annotation
///
/// # Returns
///
/// `true` if a confirmed declaration/usage site exists, `false` otherwise
#[must_use]
pub fn resolve_name(code: &[u8], name: &[u8]) -> bool {
    if name.is_empty() {
        return false;
    }

    let mut matched = 0;
    for (i, &byte) in code.iter().enumerate() {
        if byte != name[matched] {
            matched = 0;
            continue;
        }

        if matched == 0 {
            // Identifiers only start at the buffer start or after a space.
            if i > 0 && code[i - 1] != b' ' {
                continue;
            }
            // Never match the identifier at its own @ref mention.
            if i >= MARKER.len() && &code[i - MARKER.len()..i] == MARKER {
                continue;
            }
        }

        matched += 1;
        if matched == name.len() {
            let Some(&next) = code.get(i + 1) else {
                return false;
            };
            if next == b'(' || next == b';' {
                return true;
            }
            matched = 0;
        }
    }

    false
}
