//! Balanced day-by-day study scheduler.
//!
//! # Algorithm
//!
//! For each day, in increasing order:
//! 1. Start with the full daily cap.
//! 2. Take subjects with hours left, ordered by remaining hours
//!    (descending). Subjects whose remaining hours are within
//!    `tie_epsilon` of each other are ordered by sessions completed
//!    (ascending) instead, so near-equal loads alternate.
//! 3. Give each subject `min(remaining, day capacity, fair share)` where
//!    the fair share is `max(slot, total_hours / days)`. Lengths below one
//!    slot are skipped for the day.
//! 4. Session lengths are reported rounded to the nearest slot; subject
//!    and day budgets are charged the unrounded length.
//!
//! State carries over between days. There is no backtracking.
//!
//! # Complexity
//! O(d * n^2) where d=days, n=subjects (insertion sort per day).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::models::{DayPlan, Session, StudySchedule, Subject};

/// Validated scheduler input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Subjects in input order.
    pub subjects: Vec<Subject>,
    /// Plan horizon in days (>= 1).
    pub days: u32,
    /// Daily study cap in hours (> 0).
    pub max_hours_per_day: f64,
}

impl PlanRequest {
    /// Creates a new plan request.
    pub fn new(subjects: Vec<Subject>, days: u32, max_hours_per_day: f64) -> Self {
        Self {
            subjects,
            days,
            max_hours_per_day,
        }
    }

    /// Sum of required hours across subjects.
    pub fn required_hours(&self) -> f64 {
        self.subjects.iter().map(|s| s.total_hours).sum()
    }

    /// `days * max_hours_per_day`.
    pub fn available_hours(&self) -> f64 {
        f64::from(self.days) * self.max_hours_per_day
    }
}

/// Result of a scheduler run: the schedule and the subjects' final state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Generated schedule.
    pub schedule: StudySchedule,
    /// Subjects after allocation (remaining hours = unscheduled residue).
    pub subjects: Vec<Subject>,
}

/// Greedy fair-share scheduler.
///
/// # Example
///
/// ```
/// use study_plan::models::Subject;
/// use study_plan::scheduler::{BalancedScheduler, PlanRequest};
///
/// let request = PlanRequest::new(
///     vec![Subject::new("Math", 4.0), Subject::new("Physics", 2.0)],
///     2,
///     3.0,
/// );
/// let schedule = BalancedScheduler::new().plan(&request);
///
/// assert_eq!(schedule.day_count(), 2);
/// assert!((schedule.total_hours() - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BalancedScheduler {
    slot_hours: f64,
    tie_epsilon: f64,
}

impl BalancedScheduler {
    /// Default session granularity and minimum session length (hours).
    pub const DEFAULT_SLOT_HOURS: f64 = 0.5;
    /// Default band within which remaining hours count as tied.
    pub const DEFAULT_TIE_EPSILON: f64 = 0.1;

    /// Creates a scheduler with half-hour slots.
    pub fn new() -> Self {
        Self {
            slot_hours: Self::DEFAULT_SLOT_HOURS,
            tie_epsilon: Self::DEFAULT_TIE_EPSILON,
        }
    }

    /// Sets the slot size: minimum session length and rounding step.
    pub fn with_slot_hours(mut self, slot_hours: f64) -> Self {
        self.slot_hours = slot_hours;
        self
    }

    /// Sets the remaining-hours tie band.
    pub fn with_tie_epsilon(mut self, tie_epsilon: f64) -> Self {
        self.tie_epsilon = tie_epsilon;
        self
    }

    /// Slot size in hours.
    pub fn slot_hours(&self) -> f64 {
        self.slot_hours
    }

    /// Allocates sessions for `days` days, advancing `subjects` in place.
    ///
    /// Callers must ensure `days >= 1`, `max_hours_per_day > 0`, positive
    /// subject hours and enough total capacity; see
    /// [`validate_form`](crate::validation::validate_form).
    pub fn schedule(
        &self,
        subjects: &mut [Subject],
        days: u32,
        max_hours_per_day: f64,
    ) -> StudySchedule {
        let mut schedule = StudySchedule::default();

        for day in 1..=days {
            let mut day_remaining = max_hours_per_day;
            let mut plan = DayPlan::new(day);

            for idx in self.candidate_order(subjects) {
                if day_remaining <= 0.0 {
                    break;
                }
                let subject = &mut subjects[idx];
                if !subject.has_remaining() {
                    continue;
                }

                let length = subject
                    .remaining_hours
                    .min(day_remaining)
                    .min(subject.fair_share(days, self.slot_hours));

                if length < self.slot_hours {
                    trace!(day, subject = %subject.name, length, "below one slot, skipped");
                    continue;
                }

                let hours = self.round_to_slot(length);
                trace!(day, subject = %subject.name, length, hours, "session committed");
                plan.push(Session::new(subject.name.clone(), hours));

                subject.consume(length);
                day_remaining -= length;
            }

            debug!(
                day,
                sessions = plan.sessions.len(),
                hours = plan.total_hours(),
                "day planned"
            );
            schedule.days.push(plan);
        }

        info!(
            days,
            sessions = schedule.session_count(),
            hours = schedule.total_hours(),
            "study plan generated"
        );
        schedule
    }

    /// Runs the scheduler on a fresh copy of the request's subjects.
    pub fn run(&self, request: &PlanRequest) -> PlanOutcome {
        let mut subjects = request.subjects.clone();
        subjects.iter_mut().for_each(Subject::reset);
        let schedule = self.schedule(&mut subjects, request.days, request.max_hours_per_day);
        PlanOutcome { schedule, subjects }
    }

    /// Schedules a request. Repeated calls yield identical schedules.
    pub fn plan(&self, request: &PlanRequest) -> StudySchedule {
        self.run(request).schedule
    }

    /// Indices of subjects with hours left, in allocation order.
    ///
    /// The tie band makes the comparison non-transitive, so a stable
    /// insertion sort is used rather than `sort_by`.
    fn candidate_order(&self, subjects: &[Subject]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..subjects.len())
            .filter(|&i| subjects[i].has_remaining())
            .collect();

        for i in 1..order.len() {
            let mut j = i;
            while j > 0
                && self.compare(&subjects[order[j - 1]], &subjects[order[j]]) == Ordering::Greater
            {
                order.swap(j - 1, j);
                j -= 1;
            }
        }

        order
    }

    fn compare(&self, a: &Subject, b: &Subject) -> Ordering {
        if (b.remaining_hours - a.remaining_hours).abs() < self.tie_epsilon {
            return a.sessions_completed.cmp(&b.sessions_completed);
        }
        b.remaining_hours
            .partial_cmp(&a.remaining_hours)
            .unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn round_to_slot(&self, hours: f64) -> f64 {
        (hours / self.slot_hours).round() * self.slot_hours
    }
}

impl Default for BalancedScheduler {
    fn default() -> Self {
        Self::new()
    }
}
