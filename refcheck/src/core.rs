// src/core.rs
pub mod classify;
pub mod resolver;
pub mod scanner;
pub mod walker;
