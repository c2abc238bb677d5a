//! Study-plan generator.
//!
//! Spreads the study hours of a set of subjects over a number of days
//! without exceeding a daily cap, and renders the result as a summary,
//! a day table and a per-subject breakdown.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `Session`, `DayPlan`, `StudySchedule`
//! - **`validation`**: Raw input checks (missing fields, bad quantities, capacity)
//! - **`scheduler`**: `BalancedScheduler` and `ScheduleSummary`
//! - **`report`**: Text and JSON rendering
//! - **`config`**: TOML plan files
//!
//! # Pipeline
//!
//! ```
//! use study_plan::report;
//! use study_plan::scheduler::{BalancedScheduler, ScheduleSummary};
//! use study_plan::validation::{validate_form, PlanForm};
//!
//! let form = PlanForm::new(2, 3.0)
//!     .with_subject("Math", 4.0)
//!     .with_subject("Physics", 2.0);
//! let request = validate_form(&form)?;
//!
//! let outcome = BalancedScheduler::new().run(&request);
//! let summary = ScheduleSummary::calculate(&outcome.schedule, &outcome.subjects);
//! let text = report::render_text(&outcome.schedule, &summary);
//! assert!(text.contains("Total Study Hours: 6 hours"));
//! # Ok::<(), study_plan::validation::ValidationError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{PlanError, Result};
