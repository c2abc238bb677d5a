//! Schedule (solution) model.
//!
//! A study schedule is a fixed sequence of days, numbered from 1. Each
//! day holds the sessions assigned to it in assignment order. A day
//! without sessions is a rest day.

use serde::{Deserialize, Serialize};

/// A complete study schedule.
///
/// Always contains exactly one [`DayPlan`] per day of the horizon,
/// in increasing day order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudySchedule {
    /// Days of the plan, `days[i].day == i + 1`.
    pub days: Vec<DayPlan>,
}

/// The sessions of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    /// Sessions in assignment order.
    pub sessions: Vec<Session>,
}

/// A block of study time for one subject on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Subject name.
    pub subject: String,
    /// Session length in hours, a multiple of the slot size.
    pub hours: f64,
}

impl Session {
    /// Creates a new session.
    pub fn new(subject: impl Into<String>, hours: f64) -> Self {
        Self {
            subject: subject.into(),
            hours,
        }
    }
}

impl DayPlan {
    /// Creates an empty day.
    pub fn new(day: u32) -> Self {
        Self {
            day,
            sessions: Vec::new(),
        }
    }

    /// Appends a session.
    pub fn push(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Sum of session hours on this day.
    pub fn total_hours(&self) -> f64 {
        self.sessions.iter().map(|s| s.hours).sum()
    }

    /// Whether no sessions are assigned.
    #[inline]
    pub fn is_rest_day(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl StudySchedule {
    /// Creates a schedule with `days` empty days.
    pub fn with_days(days: u32) -> Self {
        Self {
            days: (1..=days).map(DayPlan::new).collect(),
        }
    }

    /// Number of days in the plan.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Returns the plan for a 1-based day number.
    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        let idx = usize::try_from(day).ok()?.checked_sub(1)?;
        self.days.get(idx)
    }

    /// Mutable access to a 1-based day.
    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayPlan> {
        let idx = usize::try_from(day).ok()?.checked_sub(1)?;
        self.days.get_mut(idx)
    }

    /// Iterates every session with its day number.
    pub fn sessions(&self) -> impl Iterator<Item = (u32, &Session)> {
        self.days
            .iter()
            .flat_map(|d| d.sessions.iter().map(move |s| (d.day, s)))
    }

    /// Total scheduled hours across all days.
    pub fn total_hours(&self) -> f64 {
        self.sessions().map(|(_, s)| s.hours).sum()
    }

    /// Total scheduled hours for one subject.
    pub fn hours_for_subject(&self, subject: &str) -> f64 {
        self.sessions()
            .filter(|(_, s)| s.subject == subject)
            .map(|(_, s)| s.hours)
            .sum()
    }

    /// Number of sessions for one subject.
    pub fn sessions_for_subject(&self, subject: &str) -> usize {
        self.sessions().filter(|(_, s)| s.subject == subject).count()
    }

    /// Number of sessions across all days.
    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }

    /// Number of days without sessions.
    pub fn rest_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_rest_day()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> StudySchedule {
        let mut s = StudySchedule::with_days(3);
        let d1 = s.day_mut(1).unwrap();
        d1.push(Session::new("Math", 2.0));
        d1.push(Session::new("Physics", 1.0));
        s.day_mut(3).unwrap().push(Session::new("Math", 1.5));
        s
    }

    #[test]
    fn test_with_days() {
        let s = StudySchedule::with_days(4);
        assert_eq!(s.day_count(), 4);
        for (i, d) in s.days.iter().enumerate() {
            assert_eq!(d.day as usize, i + 1);
            assert!(d.is_rest_day());
        }
    }

    #[test]
    fn test_day_lookup() {
        let s = sample_schedule();
        assert_eq!(s.day(1).unwrap().sessions.len(), 2);
        assert!(s.day(0).is_none());
        assert!(s.day(4).is_none());
    }

    #[test]
    fn test_totals() {
        let s = sample_schedule();
        assert!((s.total_hours() - 4.5).abs() < 1e-10);
        assert!((s.day(1).unwrap().total_hours() - 3.0).abs() < 1e-10);
        assert!((s.hours_for_subject("Math") - 3.5).abs() < 1e-10);
        assert_eq!(s.sessions_for_subject("Math"), 2);
        assert_eq!(s.sessions_for_subject("Biology"), 0);
        assert_eq!(s.session_count(), 3);
        assert_eq!(s.rest_day_count(), 1);
    }

    #[test]
    fn test_sessions_iter_order() {
        let s = sample_schedule();
        let order: Vec<(u32, &str)> = s.sessions().map(|(d, x)| (d, x.subject.as_str())).collect();
        assert_eq!(order, vec![(1, "Math"), (1, "Physics"), (3, "Math")]);
    }

    #[test]
    fn test_empty_schedule() {
        let s = StudySchedule::default();
        assert_eq!(s.day_count(), 0);
        assert_eq!(s.session_count(), 0);
        assert!((s.total_hours() - 0.0).abs() < 1e-10);
    }
}
