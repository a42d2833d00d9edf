mod activity;
mod dashboard;
mod feedback;
mod mentor_notes;
mod state;

pub use activity::ActivityView;
pub use dashboard::DashboardView;
pub use feedback::FeedbackView;
pub use mentor_notes::MentorNotesView;
pub use state::ActionState;

#[cfg(test)]
mod view_smoke;
