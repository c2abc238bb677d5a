//! Subject model.
//!
//! A subject is a unit of study with a required number of hours. The
//! scheduler draws sessions from it until its remaining hours run out
//! or the plan horizon ends.

use serde::{Deserialize, Serialize};

/// A subject to be studied.
///
/// `total_hours` is fixed at creation. `remaining_hours` and
/// `sessions_completed` track allocation progress and are only advanced
/// by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Display name (non-empty after validation).
    pub name: String,
    /// Required study hours (> 0).
    pub total_hours: f64,
    /// Hours not yet allocated. Always within `0.0..=total_hours`.
    pub remaining_hours: f64,
    /// Number of sessions committed so far.
    pub sessions_completed: u32,
}

impl Subject {
    /// Creates a fresh subject with nothing allocated yet.
    pub fn new(name: impl Into<String>, total_hours: f64) -> Self {
        Self {
            name: name.into(),
            total_hours,
            remaining_hours: total_hours,
            sessions_completed: 0,
        }
    }

    /// Hours already allocated to sessions (unrounded).
    #[inline]
    pub fn allocated_hours(&self) -> f64 {
        self.total_hours - self.remaining_hours
    }

    /// Whether any hours are left to allocate.
    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.remaining_hours > 0.0
    }

    /// Per-day session cap: `total_hours / days`, floored at `min_session`.
    pub fn fair_share(&self, days: u32, min_session: f64) -> f64 {
        (self.total_hours / f64::from(days)).max(min_session)
    }

    /// Records a committed session of `hours` (unrounded).
    pub(crate) fn consume(&mut self, hours: f64) {
        self.remaining_hours = (self.remaining_hours - hours).max(0.0);
        self.sessions_completed += 1;
    }

    /// Restores the subject to its unallocated state.
    pub fn reset(&mut self) {
        self.remaining_hours = self.total_hours;
        self.sessions_completed = 0;
    }
}
