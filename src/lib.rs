//! Patlint core library.
//!
//! This crate exposes programmatic APIs for the advisory line-level scanner:
//! rule compilation, source-tree traversal, per-line evaluation, and report
//! rendering.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `rules`: Rule specs, compilation, and line evaluation.
//! - `walk`: Source-root traversal with pruning and extension filtering.
//! - `scan`: Per-file scanning and the full scan pipeline.
//! - `models`: Issue, summary, and report value types.
//! - `output`: Human/JSON printers for scan reports.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod rules;
pub mod scan;
pub mod utils;
pub mod walk;
