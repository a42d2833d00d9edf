use dioxus::prelude::*;

use hub_core::model::{Persona, catalog};
use services::{CoachApiError, StatusCode, WeeklyTasksReport, WeeklyTasksSummary};

use super::ActionState;
use super::test_harness::{ViewKind, setup_view_harness};

/// Count `<li>` entries inside the first list following `class_marker`.
fn list_item_count(html: &str, class_marker: &str) -> usize {
    let Some(start) = html.find(class_marker) else {
        return 0;
    };
    let section = &html[start..];
    let end = section.find("</ul>").unwrap_or(section.len());
    section[..end].matches("<li>").count()
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_assignment_cards() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    let html = harness.render();

    for assignment in catalog() {
        assert!(
            html.contains(assignment.title()),
            "missing {} in {html}",
            assignment.title()
        );
        assert!(html.contains(assignment.due()), "missing due in {html}");
    }
    // The one in-progress assignment resumes, the rest start.
    assert!(html.contains("Resume"), "missing Resume in {html}");
    assert!(html.contains("Start"), "missing Start in {html}");
    assert!(html.contains("Coach"), "missing coach panel in {html}");
    assert!(
        html.contains("Quick Resources"),
        "missing resources in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn activity_prompt_matches_catalog_lookup() {
    for assignment in catalog() {
        let mut harness =
            setup_view_harness(ViewKind::Activity(assignment.title().to_string()));
        harness.rebuild();
        let html = harness.render();
        assert!(
            html.contains(assignment.prompt()),
            "missing prompt for {} in {html}",
            assignment.title()
        );
    }
}

#[tokio::test(flavor = "current_thread")]
async fn activity_unknown_title_falls_back_to_strengths_journal() {
    let mut harness = setup_view_harness(ViewKind::Activity("No Such Assignment".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Strengths Journal"), "missing fallback in {html}");
    assert!(
        html.contains(catalog()[0].prompt()),
        "missing fallback prompt in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn outreach_task_never_requests_hints() {
    let mut harness = setup_view_harness(ViewKind::Activity("Micro-Network Task".to_string()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Message template"), "missing template in {html}");
    assert!(!html.contains("Get AI Hint"), "unexpected hint button in {html}");
    assert!(!html.contains("hint-panel"), "unexpected hint panel in {html}");

    // Even a direct dispatch is a no-op for the outreach task.
    harness.activity.request_hint().call(());
    harness.settle().await;
    assert_eq!(harness.coach.hint_calls(), 0);
    let html = harness.render();
    assert!(!html.contains("error-text"), "unexpected error panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hint_success_renders_each_hint_and_clears_prior_error() {
    let mut harness = setup_view_harness(ViewKind::Activity("Strengths Journal".to_string()));
    harness.rebuild();

    harness
        .coach
        .push_hint_response(Err(CoachApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
    harness.activity.request_hint().call(());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Error: HTTP 500"), "missing error in {html}");
    assert!(!html.contains("hint-list"), "unexpected hints in {html}");

    harness.activity.draft().set("my first reflection".to_string());
    harness.activity.persona().set(Persona::CareerSwitcher);
    harness.settle().await;
    harness
        .coach
        .push_hint_response(Ok(vec!["a".to_string(), "b".to_string()]));
    harness.activity.request_hint().call(());
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Error: HTTP 500"), "stale error in {html}");
    assert!(html.contains("<li>a</li>"), "missing hint a in {html}");
    assert!(html.contains("<li>b</li>"), "missing hint b in {html}");
    assert_eq!(list_item_count(&html, "hint-list"), 2);

    // The request carries the activity prompt, the selected persona, and
    // the current draft.
    let requests = harness.coach.hint_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].question, catalog()[0].prompt());
    assert_eq!(requests[1].persona, Persona::CareerSwitcher);
    assert_eq!(requests[1].meeting_notes, "my first reflection");
}

#[tokio::test(flavor = "current_thread")]
async fn hint_http_500_renders_error_and_no_list() {
    let mut harness = setup_view_harness(ViewKind::Activity("Resume Transferables".to_string()));
    harness.rebuild();

    harness
        .coach
        .push_hint_response(Err(CoachApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
    harness.activity.request_hint().call(());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error: HTTP 500"), "missing error in {html}");
    assert_eq!(list_item_count(&html, "hint-list"), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn switching_assignment_clears_hints_and_draft() {
    let mut harness = setup_view_harness(ViewKind::Activity("Strengths Journal".to_string()));
    harness.rebuild();

    harness
        .coach
        .push_hint_response(Ok(vec!["keep going".to_string()]));
    harness.activity.request_hint().call(());
    harness.settle().await;
    harness.activity.draft().set("my reflections".to_string());
    harness.settle().await;
    assert!(harness.render().contains("AI Hints"));

    harness.set_view(ViewKind::Activity("Resume Transferables".to_string()));
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("AI Hints"), "stale hints in {html}");
    assert!(!html.contains("keep going"), "stale hint text in {html}");
    assert!(
        html.contains(catalog()[3].prompt()),
        "missing new prompt in {html}"
    );
    assert_eq!(*harness.activity.hint_state().read(), ActionState::Idle);
    assert!(harness.activity.draft().read().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_smoke_renders_rating_controls() {
    let mut harness = setup_view_harness(ViewKind::Feedback);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Quick Feedback"), "missing title in {html}");
    for label in ["1", "5", "Too low", "Just right", "Too high", "No", "Maybe", "Yes"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Submit Feedback"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn mentor_summary_renders_empty_next_steps_section() {
    let mut harness = setup_view_harness(ViewKind::MentorNotes);
    harness.rebuild();

    harness.mentor.notes().set("We discussed interview prep.".to_string());
    harness.coach.push_weekly_response(Ok(WeeklyTasksReport {
        summary: WeeklyTasksSummary {
            session_summary: Some("Focused session.".to_string()),
            ..WeeklyTasksSummary::default()
        },
        raw_body: "{\"session_summary\": \"Focused session.\"}".to_string(),
    }));
    harness.mentor.generate().call(());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Focused session."), "missing summary in {html}");
    assert!(
        html.contains("Recommended Next Steps"),
        "missing next-steps section in {html}"
    );
    assert_eq!(list_item_count(&html, "next-steps"), 0);
    assert!(html.contains("Raw response"), "missing raw view in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn mentor_clear_keeps_generated_summary() {
    let mut harness = setup_view_harness(ViewKind::MentorNotes);
    harness.rebuild();

    harness.mentor.notes().set("Session notes.".to_string());
    harness.coach.push_weekly_response(Ok(WeeklyTasksReport {
        summary: WeeklyTasksSummary {
            session_summary: Some("Steady progress.".to_string()),
            next_steps: vec!["Send two applications".to_string()],
            emotional_progress: Some("More confident than last week.".to_string()),
            raw_output: None,
        },
        raw_body: "{}".to_string(),
    }));
    harness.mentor.generate().call(());
    harness.settle().await;
    assert!(harness.render().contains("Steady progress."));

    // The Clear control resets the notes text only.
    harness.mentor.notes().set(String::new());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Steady progress."), "summary lost in {html}");
    assert!(html.contains("Send two applications"), "steps lost in {html}");
    assert!(
        html.contains("More confident than last week."),
        "progress lost in {html}"
    );
    assert!(harness.mentor.notes().read().is_empty());
    assert!(matches!(
        &*harness.mentor.summary_state().read(),
        ActionState::Ready(_)
    ));
    // Clear is purely local; no second request went out.
    assert_eq!(harness.coach.weekly_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn mentor_http_500_renders_error_text() {
    let mut harness = setup_view_harness(ViewKind::MentorNotes);
    harness.rebuild();

    harness
        .coach
        .push_weekly_response(Err(CoachApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
    harness.mentor.generate().call(());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error: HTTP 500"), "missing error in {html}");
    assert!(!html.contains("Recommended Next Steps"), "unexpected result in {html}");
}
