//! Review events, term records, and timestamp handling.
//!
//! A review event is one timestamped outcome for one term. Its wire form is
//! the 2-tuple `[timestamp_string, outcome_code]`; the in-memory form keeps
//! the timestamp as the canonical string and parses on demand.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, outcome::Outcome};

// ─── Timestamps ──────────────────────────────────────────────────────────────

/// Canonical format: local-naive ISO 8601 with fractional seconds. The
/// engine writes nothing else, and index sorting parses nothing else.
pub const FORMAT_CANONICAL: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Canonical format with an explicit microsecond width, used when writing.
const FORMAT_WRITE: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Additional formats accepted on lenient reads (timezone offset, with and
/// without fractional seconds).
const FORMAT_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const FORMAT_OFFSET_NO_FRAC: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a timestamp the engine itself wrote.
///
/// Failure is an invariant violation (the store was edited or corrupted
/// externally) and surfaces as [`Error::InvalidTimestamp`].
pub fn parse_canonical(timestamp: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(timestamp, FORMAT_CANONICAL)
    .map_err(|_| Error::InvalidTimestamp(timestamp.to_owned()))
}

/// Try every accepted format; `None` if all fail.
///
/// Offset-carrying timestamps are reduced to their local wall-clock reading,
/// matching how the canonical format is interpreted.
pub fn parse_lenient(timestamp: &str) -> Option<NaiveDateTime> {
  if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, FORMAT_CANONICAL) {
    return Some(dt);
  }
  [FORMAT_OFFSET, FORMAT_OFFSET_NO_FRAC]
    .iter()
    .find_map(|format| DateTime::parse_from_str(timestamp, format).ok())
    .map(|dt| dt.naive_local())
}

// ─── ReviewEvent ─────────────────────────────────────────────────────────────

/// One outcome record for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(String, u8)", into = "(String, u8)")]
pub struct ReviewEvent {
  /// Canonical-format timestamp string.
  pub timestamp: String,
  pub outcome:   Outcome,
}

impl ReviewEvent {
  /// An event stamped with the current local time.
  pub fn now(outcome: Outcome) -> Self {
    Self {
      timestamp: Local::now().naive_local().format(FORMAT_WRITE).to_string(),
      outcome,
    }
  }
}

impl TryFrom<(String, u8)> for ReviewEvent {
  type Error = Error;

  fn try_from((timestamp, code): (String, u8)) -> Result<Self> {
    Ok(Self { timestamp, outcome: Outcome::try_from(code)? })
  }
}

impl From<ReviewEvent> for (String, u8) {
  fn from(event: ReviewEvent) -> Self {
    (event.timestamp, event.outcome.code())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// The ordered event history for one term. Append-only from the engine's
/// perspective: deletion removes the whole record, never individual events,
/// so timestamps are non-decreasing by construction.
pub type TermRecord = Vec<ReviewEvent>;

/// The full record store: term (case-sensitive) to its history. Owned by
/// exactly one open session at a time.
pub type Records = BTreeMap<String, TermRecord>;
