//! Input validation for study plans.
//!
//! Turns raw form input into a [`PlanRequest`] the scheduler can run on
//! without further checks. Detects, in this order:
//! - Missing or mismatched subject fields
//! - Non-positive day count or daily cap
//! - Total required hours above total available hours
//!
//! The first failing check is reported.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Subject;
use crate::scheduler::PlanRequest;

/// Unvalidated plan input, as collected from a form or the command line.
///
/// Subject names and hours are parallel lists. Blank names and
/// non-positive hours are treated as unfilled fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanForm {
    /// Subject names in input order.
    pub subject_names: Vec<String>,
    /// Required hours per subject, parallel to `subject_names`.
    pub subject_hours: Vec<f64>,
    /// Number of days in the plan.
    pub days: i64,
    /// Maximum study hours per day.
    pub max_hours_per_day: f64,
}

/// A validation failure, surfaced to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Subject names and hours are empty or do not pair up.
    #[error("Please fill in all subject fields")]
    IncompleteInput,
    /// Day count or daily cap is not a positive number.
    #[error("Please enter valid numbers for days and hours")]
    InvalidQuantity,
    /// The subjects need more hours than the plan provides.
    #[error(
        "Not enough time! You need {required} hours but only have {available} hours available."
    )]
    CapacityExceeded {
        /// Sum of all subject hours.
        required: f64,
        /// `days * max_hours_per_day`.
        available: f64,
    },
}

impl PlanForm {
    /// Creates an empty form for the given horizon.
    pub fn new(days: i64, max_hours_per_day: f64) -> Self {
        Self {
            days,
            max_hours_per_day,
            ..Default::default()
        }
    }

    /// Adds a name/hours pair.
    pub fn with_subject(mut self, name: impl Into<String>, hours: f64) -> Self {
        self.subject_names.push(name.into());
        self.subject_hours.push(hours);
        self
    }
}

/// Validates a plan form and builds the scheduler input.
///
/// # Checks
/// 1. Names are trimmed and blank ones dropped; hours that are not
///    strictly positive are dropped. The survivors must be non-empty and
///    of equal length (`IncompleteInput`).
/// 2. `days >= 1` and `max_hours_per_day > 0`, both finite
///    (`InvalidQuantity`).
/// 3. `sum(hours) <= days * max_hours_per_day` (`CapacityExceeded`).
///
/// # Example
/// ```
/// use study_plan::validation::{validate_form, PlanForm, ValidationError};
///
/// let form = PlanForm::new(2, 3.0).with_subject("Math", 4.0).with_subject("Physics", 2.0);
/// let request = validate_form(&form).unwrap();
/// assert_eq!(request.subjects.len(), 2);
///
/// let too_much = PlanForm::new(1, 2.0).with_subject("Math", 5.0);
/// assert!(matches!(
///     validate_form(&too_much),
///     Err(ValidationError::CapacityExceeded { .. })
/// ));
/// ```
pub fn validate_form(form: &PlanForm) -> Result<PlanRequest, ValidationError> {
    let names: Vec<&str> = form
        .subject_names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();

    let hours: Vec<f64> = form
        .subject_hours
        .iter()
        .copied()
        .filter(|h| h.is_finite() && *h > 0.0)
        .collect();

    if names.len() != hours.len() || names.is_empty() {
        debug!(
            names = names.len(),
            hours = hours.len(),
            "rejecting plan: incomplete subject fields"
        );
        return Err(ValidationError::IncompleteInput);
    }

    let days = u32::try_from(form.days)
        .ok()
        .filter(|d| *d > 0)
        .ok_or(ValidationError::InvalidQuantity)?;

    if !form.max_hours_per_day.is_finite() || form.max_hours_per_day <= 0.0 {
        return Err(ValidationError::InvalidQuantity);
    }

    let required: f64 = hours.iter().sum();
    let available = f64::from(days) * form.max_hours_per_day;
    if required > available {
        debug!(required, available, "rejecting plan: not enough time");
        return Err(ValidationError::CapacityExceeded {
            required,
            available,
        });
    }

    let subjects = names
        .into_iter()
        .zip(hours)
        .map(|(name, h)| Subject::new(name, h))
        .collect();

    Ok(PlanRequest::new(subjects, days, form.max_hours_per_day))
}
