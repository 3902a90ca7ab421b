// src/models.rs

/// Running totals for one traversal: files that were actually scanned
/// and `@ref` annotations that resolved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanTotals {
    pub source_files: u64,
    pub references: u64,
}

impl ScanTotals {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source_files: 0,
            references: 0,
        }
    }

    /// Records one successfully scanned file and its resolved references.
    #[inline]
    pub fn record_file(&mut self, references: u64) {
        self.source_files = self.source_files.saturating_add(1);
        self.references = self.references.saturating_add(references);
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "checked {} source file(s) and {} ref(s)",
            self.source_files, self.references
        )
    }
}
