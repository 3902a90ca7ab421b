// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::walker::check_tree;
use crate::error::CheckError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root of the source tree to check
    pub root: PathBuf,
}

/// Runs one full check over the tree and prints the summary line.
///
/// # Errors
///
/// This function may return an error if:
/// * The root path ends with a path separator
/// * The tree cannot be traversed or a file cannot be read
/// * Any `@ref` annotation is malformed or unresolvable
pub fn run(args: &Args) -> Result<()> {
    let raw_root = args.root.as_os_str().to_string_lossy();
    if raw_root.ends_with(std::path::is_separator) {
        return Err(CheckError::TrailingSeparator.into());
    }

    let totals = check_tree(&args.root)?;
    println!("{}", totals.summary());
    Ok(())
}
