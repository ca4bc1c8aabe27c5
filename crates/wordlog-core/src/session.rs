//! `Session` — one open/close cycle over a record store.
//!
//! Open loads the records and builds the review index; close writes the
//! records back iff a mutation occurred. All queries read the session's
//! snapshot; the index is not refreshed after mutations (a known, accepted
//! staleness window — counts and listings reflect index-build time).

use chrono::Local;

use crate::{
  Error, Result,
  event::{Records, ReviewEvent},
  index::{ReviewIndex, ReviewRow},
  outcome::Outcome,
  store::Storage,
};

/// A single-threaded session over one record store.
pub struct Session<S: Storage> {
  storage: S,
  records: Records,
  index:   ReviewIndex,
  dirty:   bool,
}

impl<S: Storage> Session<S> {
  /// Load the record store and build the review index.
  pub fn open(storage: S) -> Result<Self> {
    let records = storage.load().map_err(Error::storage)?;
    let index = ReviewIndex::build(&records)?;
    Ok(Self { storage, records, index, dirty: false })
  }

  /// Write the record store back iff a mutation occurred this session.
  pub fn close(self) -> Result<()> {
    if !self.dirty {
      return Ok(());
    }
    self.storage.save(&self.records).map_err(Error::storage)
  }

  /// Whether a mutation occurred this session (write-back pending).
  pub fn is_dirty(&self) -> bool { self.dirty }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// Most-recently-seen terms: scan `last_viewed` in ascending order,
  /// keeping up to `limit` rows that pass the outcome and count filters.
  pub fn list(
    &self,
    limit: usize,
    forgot_only: bool,
    count_at_most: Option<usize>,
  ) -> Vec<ReviewRow> {
    self.index.list(limit, forgot_only, count_at_most)
  }

  /// The `limit` terms whose first review is most recent.
  pub fn newest(&self, limit: usize) -> Vec<ReviewRow> {
    self.index.newest(limit)
  }

  /// A random sample: shuffle `last_viewed` in place, then apply the `list`
  /// filters over the shuffled order. Not reproducible across calls.
  pub fn random(&mut self, limit: usize, forgot_only: bool) -> Vec<ReviewRow> {
    self.index.shuffle(&mut rand::thread_rng());
    self.index.list(limit, forgot_only, None)
  }

  /// Terms first seen on or after today's local calendar date.
  pub fn today(&self) -> Vec<ReviewRow> {
    self.index.today(Local::now().date_naive())
  }

  /// The full ordered event history for one term; `None` if absent.
  pub fn info(&self, term: &str) -> Option<&[ReviewEvent]> {
    self.records.get(term).map(Vec::as_slice)
  }

  /// Total distinct terms at index-build time.
  pub fn total_terms(&self) -> usize { self.index.total_terms() }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Record a review now: append an event to the term's record, creating
  /// the record for a new term. Marks the session dirty.
  pub fn read(&mut self, term: &str, outcome: Outcome) {
    self
      .records
      .entry(term.to_owned())
      .or_default()
      .push(ReviewEvent::now(outcome));
    self.dirty = true;
  }

  /// Remove a term's entire record. Fails with [`Error::TermNotFound`] if
  /// the term is absent, leaving the session clean — deletion is not
  /// idempotent, and a failed delete mutates nothing.
  pub fn delete(&mut self, term: &str) -> Result<()> {
    if self.records.remove(term).is_none() {
      return Err(Error::TermNotFound(term.to_owned()));
    }
    self.dirty = true;
    Ok(())
  }
}
