//! # Speller
//!
//! A batch spell-checker for Rust.
//!
//! ## Features
//!
//! - Levenshtein edit distance in two rolling rows
//! - Deterministic nearest-word selection with a fixed tie-break cascade
//! - Optional parallel dictionary scans on the rayon pool
//! - In-place text rewriting that preserves punctuation and layout

pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
