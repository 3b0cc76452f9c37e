//! fundtrack - A CLI tool to track alumni donors and fundraising projects
//!
//! Views are computed fresh per invocation over a seeded in-memory
//! registry; nothing is persisted between runs.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Main entry point for the fundtrack CLI
fn main() {
    if let Err(err) = fundtrack::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
