//! Error types for `wordlog-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("term not found: {0}")]
  TermNotFound(String),

  #[error("unknown outcome code: {0}")]
  UnknownOutcome(u8),

  /// An index timestamp failed to parse under the canonical format.
  ///
  /// The engine only ever writes the canonical format, so this indicates
  /// external corruption of the store file, not a runtime condition.
  #[error("invalid timestamp in store: {0:?}")]
  InvalidTimestamp(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
  /// Wrap a backend error at the session boundary.
  pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Storage(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
