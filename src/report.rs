//! Plan rendering.
//!
//! Produces the three views of a plan: the summary, the day-by-day table
//! and the per-subject breakdown. Text output is meant for a terminal;
//! JSON output carries the same data for other tools.

use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::StudySchedule;
use crate::scheduler::ScheduleSummary;

const REST_DAY: &str = "Rest Day";

/// JSON document emitted by [`render_json`].
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub summary: &'a ScheduleSummary,
    pub schedule: &'a StudySchedule,
}

/// Formats an hour count without trailing zeros (`2`, `1.5`, `0.25`).
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Summary block: total hours and study period.
pub fn render_summary(summary: &ScheduleSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Study Plan Summary");
    let _ = writeln!(
        out,
        "  Total Study Hours: {} hours",
        format_hours(summary.total_hours)
    );
    let _ = writeln!(out, "  Study Period: {} days", summary.days);
    if summary.rest_days > 0 {
        let _ = writeln!(out, "  Rest Days: {}", summary.rest_days);
    }
    out
}

/// Day table: one row per day with its sessions and daily total.
pub fn render_table(schedule: &StudySchedule) -> String {
    let rows: Vec<(String, String, String)> = schedule
        .days
        .iter()
        .map(|day| {
            let subjects = if day.is_rest_day() {
                REST_DAY.to_string()
            } else {
                day.sessions
                    .iter()
                    .map(|s| format!("{} {}h", s.subject, format_hours(s.hours)))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let total = day.total_hours();
            let total = if total > 0.0 {
                format!("{}h", format_hours(total))
            } else {
                "-".to_string()
            };
            (format!("Day {}", day.day), subjects, total)
        })
        .collect();

    let header = ("Day", "Subjects & Hours", "Daily Total");
    let day_w = column_width(header.0, rows.iter().map(|r| r.0.as_str()));
    let subj_w = column_width(header.1, rows.iter().map(|r| r.1.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<day_w$}  {:<subj_w$}  {}",
        header.0, header.1, header.2
    );
    for (day, subjects, total) in &rows {
        let _ = writeln!(out, "{day:<day_w$}  {subjects:<subj_w$}  {total}");
    }
    out
}

/// Breakdown table: hours and session count per subject.
pub fn render_breakdown(summary: &ScheduleSummary) -> String {
    let rows: Vec<(String, String, String)> = summary
        .breakdown
        .iter()
        .map(|b| {
            (
                b.subject.clone(),
                format!("{}h", format_hours(b.hours)),
                b.sessions.to_string(),
            )
        })
        .collect();

    let header = ("Subject", "Total Hours", "Sessions");
    let name_w = column_width(header.0, rows.iter().map(|r| r.0.as_str()));
    let hours_w = column_width(header.1, rows.iter().map(|r| r.1.as_str()));

    let mut out = String::new();
    let _ = writeln!(out, "Subject-wise Progress");
    let _ = writeln!(
        out,
        "{:<name_w$}  {:<hours_w$}  {}",
        header.0, header.1, header.2
    );
    for (name, hours, sessions) in &rows {
        let _ = writeln!(out, "{name:<name_w$}  {hours:<hours_w$}  {sessions}");
    }

    if !summary.residue.is_empty() {
        let residue = summary
            .residue
            .iter()
            .map(|r| format!("{} {}h", r.subject, format_hours(r.hours)))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Unscheduled: {residue}");
    }
    out
}

/// Full text report: summary, day table and breakdown.
pub fn render_text(schedule: &StudySchedule, summary: &ScheduleSummary) -> String {
    [
        render_summary(summary),
        render_table(schedule),
        render_breakdown(summary),
    ]
    .join("\n")
}

/// Pretty-printed JSON with the summary and the full schedule.
pub fn render_json(schedule: &StudySchedule, summary: &ScheduleSummary) -> Result<String> {
    let report = PlanReport { summary, schedule };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;
    use crate::scheduler::{BalancedScheduler, PlanRequest};

    fn sample() -> (StudySchedule, ScheduleSummary) {
        let request = PlanRequest::new(
            vec![Subject::new("Math", 4.0), Subject::new("Physics", 2.0)],
            2,
            3.0,
        );
        let outcome = BalancedScheduler::new().run(&request);
        let summary = ScheduleSummary::calculate(&outcome.schedule, &outcome.subjects);
        (outcome.schedule, summary)
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2");
        assert_eq!(format_hours(1.5), "1.5");
        assert_eq!(format_hours(0.19999999999999996), "0.2");
    }

    #[test]
    fn test_render_summary() {
        let (_, summary) = sample();
        let text = render_summary(&summary);
        assert!(text.contains("Total Study Hours: 6 hours"));
        assert!(text.contains("Study Period: 2 days"));
    }

    #[test]
    fn test_render_table_rows() {
        let mut schedule = StudySchedule::with_days(2);
        schedule
            .day_mut(1)
            .unwrap()
            .push(crate::models::Session::new("Math", 2.0));

        let text = render_table(&schedule);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Day"));
        assert!(lines[1].starts_with("Day 1"));
        assert!(lines[1].contains("Math 2h"));
        assert!(lines[1].trim_end().ends_with("2h"));
        assert!(lines[2].contains(REST_DAY));
        assert!(lines[2].trim_end().ends_with('-'));
    }

    #[test]
    fn test_render_breakdown() {
        let (_, summary) = sample();
        let text = render_breakdown(&summary);
        let math = text.lines().find(|l| l.starts_with("Math")).unwrap();
        assert!(math.contains("4h"));
        assert!(math.trim_end().ends_with('2'));
        assert!(!text.contains("Unscheduled"));
    }

    #[test]
    fn test_render_breakdown_residue() {
        let mut schedule = StudySchedule::with_days(1);
        schedule
            .day_mut(1)
            .unwrap()
            .push(crate::models::Session::new("Music", 0.5));
        let mut music = Subject::new("Music", 0.7);
        music.consume(0.5);

        let summary = ScheduleSummary::calculate(&schedule, &[music]);
        let text = render_breakdown(&summary);
        assert!(text.contains("Unscheduled: Music 0.2h"));
    }

    #[test]
    fn test_render_text_sections() {
        let (schedule, summary) = sample();
        let text = render_text(&schedule, &summary);
        let summary_at = text.find("Study Plan Summary").unwrap();
        let table_at = text.find("Subjects & Hours").unwrap();
        let breakdown_at = text.find("Subject-wise Progress").unwrap();
        assert!(summary_at < table_at && table_at < breakdown_at);
    }

    #[test]
    fn test_render_json() {
        let (schedule, summary) = sample();
        let json = render_json(&schedule, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["days"], 2);
        assert_eq!(value["schedule"]["days"].as_array().unwrap().len(), 2);
        assert_eq!(value["schedule"]["days"][0]["sessions"][0]["subject"], "Math");
    }
}
