//! Study scheduler and schedule summaries.
//!
//! # Algorithm
//!
//! `BalancedScheduler` is a single forward pass over the days. Each day
//! hands out sessions to the subjects with the most hours left, capped by
//! the day's remaining capacity and by each subject's fair daily share.
//! It is a heuristic, not an optimal allocator.
//!
//! # Summary
//!
//! `ScheduleSummary` computes the totals shown with a plan: scheduled
//! hours, rest days, per-subject breakdown, and unscheduled residue.

mod balanced;
mod summary;

pub use balanced::{BalancedScheduler, PlanOutcome, PlanRequest};
pub use summary::{ScheduleSummary, SubjectBreakdown, SubjectResidue};
