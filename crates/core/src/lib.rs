#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Assignment, AssignmentKind, AssignmentStatus, ParsePersonaError, Persona, OUTREACH_TEMPLATE,
    assignment_or_fallback, catalog, find_assignment,
};
