//! Plan file loading.
//!
//! A plan file is a TOML document describing the same input as the
//! command-line flags:
//!
//! ```toml
//! days = 7
//! max_hours_per_day = 4.0
//!
//! [[subjects]]
//! name = "Math"
//! hours = 10
//! ```
//!
//! All keys are optional so that flags can fill in the rest.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::validation::PlanForm;

/// One subject line of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: String,
    pub hours: f64,
}

/// Plan description as read from a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanFile {
    /// Number of days in the plan.
    pub days: Option<i64>,
    /// Daily study cap in hours.
    pub max_hours_per_day: Option<f64>,
    /// Subjects in study order.
    pub subjects: Vec<SubjectEntry>,
}

impl SubjectEntry {
    pub fn new(name: impl Into<String>, hours: f64) -> Self {
        Self {
            name: name.into(),
            hours,
        }
    }
}

/// Parses `NAME=HOURS`. The name may contain spaces; the last `=` splits.
impl FromStr for SubjectEntry {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, hours) = s
            .rsplit_once('=')
            .ok_or_else(|| PlanError::InvalidSubject(s.to_string()))?;
        let hours: f64 = hours
            .trim()
            .parse()
            .map_err(|_| PlanError::InvalidSubject(s.to_string()))?;
        Ok(Self::new(name.trim(), hours))
    }
}

impl PlanFile {
    /// Reads and parses a plan file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let plan = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            subjects = plan.subjects.len(),
            "plan file loaded"
        );
        Ok(plan)
    }

    /// Parses a plan from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overrides the horizon and appends extra subjects.
    pub fn merge(
        mut self,
        days: Option<i64>,
        max_hours_per_day: Option<f64>,
        subjects: impl IntoIterator<Item = SubjectEntry>,
    ) -> Self {
        if days.is_some() {
            self.days = days;
        }
        if max_hours_per_day.is_some() {
            self.max_hours_per_day = max_hours_per_day;
        }
        self.subjects.extend(subjects);
        self
    }

    /// Converts into an unvalidated form.
    ///
    /// Missing horizon values become zero and fail validation as
    /// invalid quantities.
    pub fn into_form(self) -> PlanForm {
        let mut form = PlanForm::new(
            self.days.unwrap_or(0),
            self.max_hours_per_day.unwrap_or(0.0),
        );
        for entry in self.subjects {
            form = form.with_subject(entry.name, entry.hours);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
days = 2
max_hours_per_day = 3.0

[[subjects]]
name = "Math"
hours = 4.0

[[subjects]]
name = "Physics"
hours = 2.0
"#;

    #[test]
    fn test_parse_plan_file() {
        let plan = PlanFile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(plan.days, Some(2));
        assert_eq!(plan.max_hours_per_day, Some(3.0));
        assert_eq!(
            plan.subjects,
            vec![SubjectEntry::new("Math", 4.0), SubjectEntry::new("Physics", 2.0)]
        );
    }

    #[test]
    fn test_empty_plan_file() {
        let plan = PlanFile::from_toml_str("").unwrap();
        assert_eq!(plan, PlanFile::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = PlanFile::from_toml_str("weeks = 3").unwrap_err();
        assert!(matches!(err, PlanError::Config(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let plan = PlanFile::load(file.path()).unwrap();
        assert_eq!(plan.subjects.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlanFile::load(Path::new("/nonexistent/plan.toml")).unwrap_err();
        assert!(matches!(err, PlanError::Io { .. }));
    }

    #[test]
    fn test_merge_overrides() {
        let plan = PlanFile::from_toml_str(SAMPLE)
            .unwrap()
            .merge(Some(5), None, vec![SubjectEntry::new("Chem", 1.0)]);
        assert_eq!(plan.days, Some(5));
        assert_eq!(plan.max_hours_per_day, Some(3.0));
        assert_eq!(plan.subjects.len(), 3);
        assert_eq!(plan.subjects[2].name, "Chem");
    }

    #[test]
    fn test_into_form() {
        let form = PlanFile::from_toml_str(SAMPLE).unwrap().into_form();
        assert_eq!(form.days, 2);
        assert_eq!(form.subject_names, vec!["Math", "Physics"]);
        assert_eq!(form.subject_hours, vec![4.0, 2.0]);

        let empty = PlanFile::default().into_form();
        assert_eq!(empty.days, 0);
    }

    #[test]
    fn test_subject_entry_from_str() {
        let entry: SubjectEntry = "Linear Algebra=3.5".parse().unwrap();
        assert_eq!(entry, SubjectEntry::new("Linear Algebra", 3.5));

        let entry: SubjectEntry = " Math = 4 ".parse().unwrap();
        assert_eq!(entry, SubjectEntry::new("Math", 4.0));

        assert!(matches!(
            "Math".parse::<SubjectEntry>(),
            Err(PlanError::InvalidSubject(_))
        ));
        assert!(matches!(
            "Math=lots".parse::<SubjectEntry>(),
            Err(PlanError::InvalidSubject(_))
        ));
    }
}
