use services::WeeklyTasksReport;

/// Read-only model for the generated weekly summary, with every wire-level
/// absence already resolved to a named fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentorSummaryVm {
    pub summary_text: String,
    pub next_steps: Vec<String>,
    pub emotional_progress: Option<String>,
    pub raw_body: String,
}

impl From<&WeeklyTasksReport> for MentorSummaryVm {
    fn from(report: &WeeklyTasksReport) -> Self {
        let summary = &report.summary;
        let summary_text = summary
            .session_summary
            .clone()
            .or_else(|| summary.raw_output.clone())
            .unwrap_or_else(|| "No summary returned.".to_string());
        Self {
            summary_text,
            next_steps: summary.next_steps.clone(),
            emotional_progress: summary.emotional_progress.clone(),
            raw_body: report.raw_body.clone(),
        }
    }
}

#[must_use]
pub fn map_mentor_summary(report: &WeeklyTasksReport) -> MentorSummaryVm {
    MentorSummaryVm::from(report)
}
