mod assignment;
mod persona;

pub use assignment::{
    Assignment, AssignmentKind, AssignmentStatus, OUTREACH_TEMPLATE, assignment_or_fallback,
    catalog, find_assignment,
};
pub use persona::{ParsePersonaError, Persona};
