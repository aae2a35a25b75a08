//! Core functionality for the university repository

pub mod config;
pub mod db;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod reader;
pub mod report;

/// Returns the current version of the `uni-registry` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
