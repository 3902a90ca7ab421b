// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure is fatal: the first error anywhere unwinds the whole
/// traversal and becomes the single diagnostic line the user sees.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("the specified path should not have a trailing path separator")]
    TrailingSeparator,

    #[error("unable to walk the source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("unable to read the file \"{}\" ({source})", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("found \"@ref\" followed by more than one space in \"{}\"", .path.display())]
    ExtraSpace { path: PathBuf },

    #[error("unable to find a referenced name \"{name}\" in the file \"{file}\" ({})", .path.display())]
    Unresolved {
        name: String,
        file: String,
        path: PathBuf,
    },
}
