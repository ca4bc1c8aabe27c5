//! JSON-file backend for the wordlog record store.
//!
//! One document per storage path: a top-level object mapping each term to an
//! ordered array of `[timestamp, outcome_code]` pairs. Saves replace the
//! whole file, pretty-printed for human inspection.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;
