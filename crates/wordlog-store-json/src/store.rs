//! [`JsonStore`] — the JSON-file implementation of [`Storage`].

use std::{
  fs,
  path::{Path, PathBuf},
};

use wordlog_core::{event::Records, store::Storage};

use crate::Error;

/// A record store backed by a single JSON file.
///
/// The file may be absent — that is an empty store, created on first
/// write-back. No locking is performed; exactly one session should hold a
/// path at a time.
#[derive(Debug, Clone)]
pub struct JsonStore {
  path: PathBuf,
}

impl JsonStore {
  pub fn new(path: impl AsRef<Path>) -> Self {
    Self { path: path.as_ref().to_owned() }
  }

  pub fn path(&self) -> &Path { &self.path }
}

impl Storage for JsonStore {
  type Error = Error;

  fn load(&self) -> Result<Records, Error> {
    if !self.path.exists() {
      return Ok(Records::new());
    }
    let raw = fs::read_to_string(&self.path).map_err(|source| Error::Read {
      path: self.path.clone(),
      source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::Malformed {
      path: self.path.clone(),
      source,
    })
  }

  fn save(&self, records: &Records) -> Result<(), Error> {
    // Whole-file replace; a crash mid-write may corrupt the file (accepted).
    let raw = serde_json::to_string_pretty(records).map_err(|source| {
      Error::Malformed { path: self.path.clone(), source }
    })?;
    fs::write(&self.path, raw).map_err(|source| Error::Write {
      path: self.path.clone(),
      source,
    })
  }
}
