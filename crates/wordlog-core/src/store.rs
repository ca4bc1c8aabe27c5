//! The `Storage` trait — the seam between the engine and its backends.
//!
//! Implemented by storage backends (e.g. `wordlog-store-json`). The session
//! layer depends on this abstraction, not on any concrete backend.

use crate::event::Records;

/// Durable storage for one record store.
///
/// The contract is deliberately small: a backend loads the whole mapping at
/// session open and replaces it wholesale at session close. No incremental
/// writes, no locking — exactly one session may hold a storage path at a
/// time.
pub trait Storage {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the full record store. An absent backing file yields an empty
  /// store; a present-but-malformed one is an error.
  fn load(&self) -> Result<Records, Self::Error>;

  /// Replace the durable contents with `records`.
  fn save(&self, records: &Records) -> Result<(), Self::Error>;
}
