// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use cli::{Args, run};
pub use error::CheckError;
pub use models::ScanTotals;
