use hub_core::model::{Assignment, AssignmentStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentCardVm {
    pub title: String,
    pub meta_line: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub desc: String,
    pub due: String,
    pub action_label: &'static str,
}

impl From<&Assignment> for AssignmentCardVm {
    fn from(assignment: &Assignment) -> Self {
        let (status_class, action_label) = match assignment.status() {
            AssignmentStatus::InProgress => ("badge badge--active", "Resume"),
            AssignmentStatus::NotStarted => ("badge", "Start"),
        };
        Self {
            title: assignment.title().to_string(),
            meta_line: format!("{} • {}", assignment.stage(), assignment.eta()),
            status_label: assignment.status().label().to_string(),
            status_class,
            desc: assignment.desc().to_string(),
            due: assignment.due().to_string(),
            action_label,
        }
    }
}

#[must_use]
pub fn map_assignment_cards(items: &[Assignment]) -> Vec<AssignmentCardVm> {
    items.iter().map(AssignmentCardVm::from).collect()
}
