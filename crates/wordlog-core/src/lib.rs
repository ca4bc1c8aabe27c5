//! Core types and query engine for the wordlog study tracker.
//!
//! This crate is deliberately free of I/O and file-format dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod event;
pub mod index;
pub mod outcome;
pub mod session;
pub mod store;

pub use error::{Error, Result};
