/// Completion status shown on a dashboard card. The catalog is fixed for the
/// session, so status never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    NotStarted,
    InProgress,
}

impl AssignmentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
        }
    }
}

/// How the activity player treats an assignment.
///
/// `Outreach` assignments show a ready-made message template and never call
/// the hint service; `Reflection` assignments get a draft area and hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentKind {
    Reflection,
    Outreach,
}

/// One entry in the static homework catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    title: &'static str,
    stage: &'static str,
    eta: &'static str,
    due: &'static str,
    desc: &'static str,
    prompt: &'static str,
    example: &'static str,
    status: AssignmentStatus,
    kind: AssignmentKind,
}

impl Assignment {
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn stage(&self) -> &'static str {
        self.stage
    }

    #[must_use]
    pub fn eta(&self) -> &'static str {
        self.eta
    }

    #[must_use]
    pub fn due(&self) -> &'static str {
        self.due
    }

    #[must_use]
    pub fn desc(&self) -> &'static str {
        self.desc
    }

    /// Full activity prompt shown in the player and sent as the hint
    /// request's `question`.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Canned line appended to the draft by "Insert Example". Empty for
    /// outreach assignments, which have no draft area.
    #[must_use]
    pub fn example(&self) -> &'static str {
        self.example
    }

    #[must_use]
    pub fn status(&self) -> AssignmentStatus {
        self.status
    }

    #[must_use]
    pub fn kind(&self) -> AssignmentKind {
        self.kind
    }
}

/// Message template shown in place of the draft area for the outreach task.
pub const OUTREACH_TEMPLATE: &str = "Hi {name}, I came across your profile while exploring \
{field} roles. I'd love 15 minutes to hear how you got started and what you'd do differently. \
Happy to work around your schedule this week or next.";

static CATALOG: [Assignment; 4] = [
    Assignment {
        title: "Strengths Journal",
        stage: "Confidence",
        eta: "8–10 min",
        due: "Due in 3 days",
        desc: "Write 3 moments this week that energized you. Tag skills you used.",
        prompt: "Write three moments in the past week that made you feel energized or proud. \
                 For each moment, add a short note on what skill you used (e.g., organizing, \
                 problem-solving, empathy).",
        example: "Example: Tuesday's team stand-up. I untangled a double-booked schedule in \
                  five minutes (skill: organizing).",
        status: AssignmentStatus::NotStarted,
        kind: AssignmentKind::Reflection,
    },
    Assignment {
        title: "STAR Story: Relocation Win",
        stage: "Identity → Career",
        eta: "12–15 min",
        due: "Due in 5 days",
        desc: "Draft a STAR story that turns a challenge into a strength.",
        prompt: "Pick one challenge from your relocation and draft it as a STAR story: the \
                 Situation you faced, the Task in front of you, the Action you took, and the \
                 Result. Close with the strength the story proves.",
        example: "Example: Situation: our lease fell through two weeks before the move. Task: \
                  find housing fast. Action: shortlisted and called 14 listings in one \
                  afternoon. Result: signed within 48 hours.",
        status: AssignmentStatus::InProgress,
        kind: AssignmentKind::Reflection,
    },
    Assignment {
        title: "Micro-Network Task",
        stage: "Career Exploration",
        eta: "5–7 min",
        due: "Due tomorrow",
        desc: "Send 1 informational-interview request using our template.",
        prompt: "Send one informational-interview request this week. Use the message template \
                 below and personalize the first line for your contact.",
        example: "",
        status: AssignmentStatus::NotStarted,
        kind: AssignmentKind::Outreach,
    },
    Assignment {
        title: "Resume Transferables",
        stage: "Job-Search Readiness",
        eta: "10–12 min",
        due: "Due next week",
        desc: "Reframe 3 experiences into resume bullets with impact.",
        prompt: "Take three past experiences, paid or not, and rewrite each as a resume \
                 bullet: action verb, what you did, and a concrete impact someone outside the \
                 situation would understand.",
        example: "Example: Coordinated a three-family carpool schedule for a full school year \
                  (planning, reliability, zero missed pickups).",
        status: AssignmentStatus::NotStarted,
        kind: AssignmentKind::Reflection,
    },
];

/// The fixed assignment list, in dashboard order.
#[must_use]
pub fn catalog() -> &'static [Assignment] {
    &CATALOG
}

#[must_use]
pub fn find_assignment(title: &str) -> Option<&'static Assignment> {
    CATALOG.iter().find(|assignment| assignment.title == title)
}

/// Look up an assignment by title, falling back to the first catalog entry
/// (Strengths Journal) for unrecognized titles.
#[must_use]
pub fn assignment_or_fallback(title: &str) -> &'static Assignment {
    find_assignment(title).unwrap_or(&CATALOG[0])
}
