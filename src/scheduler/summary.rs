//! Schedule summary metrics.
//!
//! Aggregates a completed study schedule into the figures shown to the
//! user.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total hours | Sum of all session hours |
//! | Study / rest days | Days with / without sessions |
//! | Breakdown | Hours and session count per subject |
//! | Residue | Hours a subject still had left after the last day |
//! | Utilization | Total hours / (days * daily cap) |

use serde::{Deserialize, Serialize};

use crate::models::{StudySchedule, Subject};

/// Remaining hours at or below this are subtraction noise, not residue.
const RESIDUE_EPSILON: f64 = 1e-9;

/// Hours and sessions scheduled for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectBreakdown {
    /// Subject name.
    pub subject: String,
    /// Sum of session hours.
    pub hours: f64,
    /// Number of sessions.
    pub sessions: usize,
}

/// Hours of a subject left unscheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResidue {
    /// Subject name.
    pub subject: String,
    /// Unscheduled hours.
    pub hours: f64,
}

/// Aggregate figures of a study schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Sum of all session hours.
    pub total_hours: f64,
    /// Plan horizon in days.
    pub days: usize,
    /// Days with at least one session.
    pub study_days: usize,
    /// Days without sessions.
    pub rest_days: usize,
    /// Per-subject totals, in order of first appearance in the schedule.
    pub breakdown: Vec<SubjectBreakdown>,
    /// Subjects with hours left after allocation.
    pub residue: Vec<SubjectResidue>,
}

impl ScheduleSummary {
    /// Summarizes a schedule without residue information.
    pub fn from_schedule(schedule: &StudySchedule) -> Self {
        let mut breakdown: Vec<SubjectBreakdown> = Vec::new();

        for (_, session) in schedule.sessions() {
            match breakdown.iter_mut().find(|b| b.subject == session.subject) {
                Some(entry) => {
                    entry.hours += session.hours;
                    entry.sessions += 1;
                }
                None => breakdown.push(SubjectBreakdown {
                    subject: session.subject.clone(),
                    hours: session.hours,
                    sessions: 1,
                }),
            }
        }

        let rest_days = schedule.rest_day_count();
        Self {
            total_hours: schedule.total_hours(),
            days: schedule.day_count(),
            study_days: schedule.day_count() - rest_days,
            rest_days,
            breakdown,
            residue: Vec::new(),
        }
    }

    /// Summarizes a schedule and the subjects' state after scheduling.
    ///
    /// # Arguments
    /// * `schedule` - The generated schedule.
    /// * `subjects` - Subjects as left by the scheduler (see
    ///   [`PlanOutcome`](super::PlanOutcome)).
    pub fn calculate(schedule: &StudySchedule, subjects: &[Subject]) -> Self {
        let mut summary = Self::from_schedule(schedule);
        summary.residue = subjects
            .iter()
            .filter(|s| s.remaining_hours > RESIDUE_EPSILON)
            .map(|s| SubjectResidue {
                subject: s.name.clone(),
                hours: s.remaining_hours,
            })
            .collect();
        summary
    }

    /// Fraction of available hours used (0.0..1.0).
    ///
    /// Returns `None` if there is no capacity.
    pub fn utilization(&self, max_hours_per_day: f64) -> Option<f64> {
        let available = self.days as f64 * max_hours_per_day;
        if available <= 0.0 {
            return None;
        }
        Some(self.total_hours / available)
    }

    /// Breakdown entry for a subject.
    pub fn subject(&self, name: &str) -> Option<&SubjectBreakdown> {
        self.breakdown.iter().find(|b| b.subject == name)
    }

    /// Sum of unscheduled hours across subjects.
    pub fn residue_hours(&self) -> f64 {
        self.residue.iter().map(|r| r.hours).sum()
    }
}
