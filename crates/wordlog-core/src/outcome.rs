//! Review outcomes and their stable integer codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The recorded result of one review.
///
/// The codes are the durable-file representation and must never change:
/// every existing store contains them. `Forgot` and `Read` are the codes the
/// engine has always written; `Remembered` takes the next free code. The
/// query engine filters only on `Forgot` — the other two are equivalent for
/// listing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Outcome {
  Forgot     = 1,
  Read       = 2,
  Remembered = 3,
}

impl Outcome {
  /// The integer code stored in the durable file.
  pub fn code(self) -> u8 { self as u8 }

  /// Lowercase human-readable label, as shown in tables.
  pub fn label(self) -> &'static str {
    match self {
      Self::Forgot => "forgot",
      Self::Read => "read",
      Self::Remembered => "remembered",
    }
  }
}

impl TryFrom<u8> for Outcome {
  type Error = Error;

  fn try_from(code: u8) -> Result<Self, Error> {
    match code {
      1 => Ok(Self::Forgot),
      2 => Ok(Self::Read),
      3 => Ok(Self::Remembered),
      other => Err(Error::UnknownOutcome(other)),
    }
  }
}

impl From<Outcome> for u8 {
  fn from(outcome: Outcome) -> u8 { outcome.code() }
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
