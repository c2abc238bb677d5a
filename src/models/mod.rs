//! Study-plan domain models.
//!
//! # Domain Mappings
//!
//! | study-plan | Job-shop analogue |
//! |------------|-------------------|
//! | Subject | Task with remaining work |
//! | Day | Resource with a capacity per period |
//! | Session | Assignment |
//! | StudySchedule | Schedule |

mod schedule;
mod subject;

pub use schedule::{DayPlan, Session, StudySchedule};
pub use subject::Subject;
