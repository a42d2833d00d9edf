#![forbid(unsafe_code)]

pub mod coach_service;
pub mod error;

pub use coach_service::{
    CoachApi, CoachConfig, CoachService, WeeklyTasksReport, WeeklyTasksSummary,
};
pub use error::CoachApiError;

// `CoachApiError::Status` carries this type; re-exported so callers and
// test doubles can build one without depending on reqwest directly.
pub use reqwest::StatusCode;
