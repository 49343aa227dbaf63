//! `GuildLedger` - a small web ledger for a game guild.
//!
//! Tracks player balances, credit/debit transactions, and aggregated split
//! events (revenue distributions minus fees and repair costs), serving three
//! read-only HTML views and a health check from an embedded `SQLite` store.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions // Common pattern in Rust
)]

/// Configuration loaded from the environment at startup
pub mod config;
/// Pure domain logic - balance sheet assembly and display formatting
pub mod core;
/// Storage layer - connection handling, schema bootstrap, and queries
pub mod db;
/// Unified error types and result handling
pub mod errors;
/// Row models and split normalization
pub mod models;
/// HTTP router, handlers, and HTML views
pub mod web;

/// Version string reported by the health check and the page footer.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
