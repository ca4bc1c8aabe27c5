//! The review index — the derived read model every query runs against.
//!
//! Rebuilt from the record store on every session open; never persisted.
//! Two projections of one event per term (its first event, its last event)
//! plus the live event count, each sorted ascending by timestamp.

use chrono::{NaiveDate, NaiveDateTime};
use rand::{Rng, seq::SliceRandom};

use crate::{
  Result,
  event::{self, ReviewEvent, Records},
  outcome::Outcome,
};

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One projected row: a term, one of its events, and its total event count
/// at index-build time. This is the plain shape every listing query returns
/// and the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
  pub term:      String,
  pub timestamp: String,
  pub outcome:   Outcome,
  /// Record length when the index was built; not refreshed after a `read`
  /// in the same session.
  pub count:     usize,
}

impl ReviewRow {
  fn project(term: &str, event: &ReviewEvent, count: usize) -> Self {
    Self {
      term:      term.to_owned(),
      timestamp: event.timestamp.clone(),
      outcome:   event.outcome,
      count,
    }
  }
}

// ─── Index ───────────────────────────────────────────────────────────────────

/// The two sorted projections.
#[derive(Debug, Clone, Default)]
pub struct ReviewIndex {
  /// One row per term from its most recent event, ascending by timestamp.
  pub last_viewed:  Vec<ReviewRow>,
  /// One row per term from its first event, ascending by timestamp.
  pub first_viewed: Vec<ReviewRow>,
}

impl ReviewIndex {
  /// Project and sort both views from the record store.
  ///
  /// Fails with [`crate::Error::InvalidTimestamp`] if any projected row's
  /// timestamp does not parse under the canonical format.
  pub fn build(records: &Records) -> Result<Self> {
    let mut last_viewed = Vec::with_capacity(records.len());
    let mut first_viewed = Vec::with_capacity(records.len());

    for (term, record) in records {
      // A term with no events has nothing to project.
      let (Some(first), Some(last)) = (record.first(), record.last()) else {
        continue;
      };
      first_viewed.push(ReviewRow::project(term, first, record.len()));
      last_viewed.push(ReviewRow::project(term, last, record.len()));
    }

    sort_by_timestamp(&mut last_viewed)?;
    sort_by_timestamp(&mut first_viewed)?;

    Ok(Self { last_viewed, first_viewed })
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// Scan `last_viewed` in stored order (oldest-of-the-recent first) and
  /// accumulate up to `limit` matching rows.
  pub fn list(
    &self,
    limit: usize,
    forgot_only: bool,
    count_at_most: Option<usize>,
  ) -> Vec<ReviewRow> {
    filter_rows(&self.last_viewed, limit, forgot_only, count_at_most)
  }

  /// The last `limit` rows of `first_viewed` — the terms whose first review
  /// is most recent — preserving ascending order within the window.
  pub fn newest(&self, limit: usize) -> Vec<ReviewRow> {
    let start = self.first_viewed.len().saturating_sub(limit);
    self.first_viewed[start..].to_vec()
  }

  /// Uniformly permute `last_viewed` in place.
  ///
  /// The shuffled order is kept for the rest of the session: a second call
  /// permutes the already-shuffled order rather than resetting it.
  pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    self.last_viewed.shuffle(rng);
  }

  /// Rows of `first_viewed` first seen on or after `today` (local calendar
  /// date). Rows whose timestamp fails the lenient parse are skipped.
  pub fn today(&self, today: NaiveDate) -> Vec<ReviewRow> {
    self
      .first_viewed
      .iter()
      .filter(|row| {
        event::parse_lenient(&row.timestamp)
          .is_some_and(|dt| dt.date() >= today)
      })
      .cloned()
      .collect()
  }

  /// Distinct terms in the index.
  pub fn total_terms(&self) -> usize { self.last_viewed.len() }
}

// ─── Scan/filter algorithm ───────────────────────────────────────────────────

/// The shared matching and windowing pass behind every listing query.
///
/// Rows are taken in the given order until `limit` matches accumulate or the
/// scan is exhausted; matches are never re-sorted. A row matches iff it
/// passes the outcome filter (`forgot_only` admits only [`Outcome::Forgot`])
/// and the repetition-count ceiling.
pub fn filter_rows(
  rows: &[ReviewRow],
  limit: usize,
  forgot_only: bool,
  count_at_most: Option<usize>,
) -> Vec<ReviewRow> {
  let mut matched = Vec::new();
  for row in rows {
    if matched.len() >= limit {
      break;
    }
    let outcome_ok = !forgot_only || row.outcome == Outcome::Forgot;
    let count_ok = count_at_most.map_or(true, |le| row.count <= le);
    if outcome_ok && count_ok {
      matched.push(row.clone());
    }
  }
  matched
}

/// Sort rows ascending by canonically-parsed timestamp.
fn sort_by_timestamp(rows: &mut Vec<ReviewRow>) -> Result<()> {
  let mut keyed: Vec<(NaiveDateTime, ReviewRow)> = rows
    .drain(..)
    .map(|row| Ok((event::parse_canonical(&row.timestamp)?, row)))
    .collect::<Result<_>>()?;
  keyed.sort_by_key(|(timestamp, _)| *timestamp);
  rows.extend(keyed.into_iter().map(|(_, row)| row));
  Ok(())
}
