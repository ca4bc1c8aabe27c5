//! Error type for `wordlog-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("reading {path}: {source}")]
  Read {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("writing {path}: {source}")]
  Write {
    path:   PathBuf,
    source: std::io::Error,
  },

  /// The file exists but is not a valid record-store document.
  #[error("malformed store file {path}: {source}")]
  Malformed {
    path:   PathBuf,
    source: serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
