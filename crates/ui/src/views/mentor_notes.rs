use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ActionState;
use crate::vm::{MentorSummaryVm, map_mentor_summary};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn MentorNotesView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut notes = use_signal(String::new);
    let summary_state = use_signal(|| ActionState::<MentorSummaryVm>::Idle);

    let coach = ctx.coach();
    let generate = use_callback(move |()| {
        if summary_state.read().is_loading() {
            return;
        }
        let coach = coach.clone();
        let text = notes();
        let mut summary_state = summary_state;
        spawn(async move {
            summary_state.set(ActionState::Loading);
            match coach.generate_weekly_tasks(&text).await {
                Ok(report) => summary_state.set(ActionState::Ready(map_mentor_summary(&report))),
                Err(err) => summary_state.set(ActionState::Failed(err.to_string())),
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<MentorTestHandles>() {
                handles.register(generate, summary_state, notes);
            }
        }
    }

    rsx! {
        div { class: "page mentor",
            div { class: "panel mentor-main",
                h3 { "Mentor Notes" }
                p { class: "muted",
                    "Paste or type session notes. The coach turns them into a weekly summary."
                }
                textarea {
                    class: "notes-input",
                    placeholder: "Session notes…",
                    value: "{notes()}",
                    oninput: move |evt| notes.set(evt.value()),
                }
                div { class: "mentor-controls",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: summary_state.read().is_loading(),
                        onclick: move |_| generate.call(()),
                        "Generate AI Summary"
                    }
                    // Clear resets the notes only. A generated summary stays up.
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| notes.set(String::new()),
                        "Clear"
                    }
                }

                match summary_state() {
                    ActionState::Idle => rsx! {},
                    ActionState::Loading => rsx! {
                        p { class: "muted", "Summarizing…" }
                    },
                    ActionState::Failed(message) => rsx! {
                        p { class: "error-text", "Error: {message}" }
                    },
                    ActionState::Ready(report) => rsx! {
                        SummaryReport { report }
                    },
                }
            }
        }
    }
}

#[component]
fn SummaryReport(report: MentorSummaryVm) -> Element {
    rsx! {
        div { class: "summary-report",
            h4 { "Session Summary" }
            p { class: "summary-text", "{report.summary_text}" }

            h4 { "Recommended Next Steps" }
            ul { class: "next-steps",
                for step in report.next_steps.iter() {
                    li { "{step}" }
                }
            }

            if let Some(progress) = report.emotional_progress.as_ref() {
                div { class: "callout callout--info",
                    h4 { "Emotional Progress" }
                    p { "{progress}" }
                }
            }

            details { class: "raw-response",
                summary { "Raw response" }
                pre { "{report.raw_body}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct MentorTestHandles {
    generate: Rc<RefCell<Option<Callback<()>>>>,
    summary_state: Rc<RefCell<Option<Signal<ActionState<MentorSummaryVm>>>>>,
    notes: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl MentorTestHandles {
    pub(crate) fn register(
        &self,
        generate: Callback<()>,
        summary_state: Signal<ActionState<MentorSummaryVm>>,
        notes: Signal<String>,
    ) {
        *self.generate.borrow_mut() = Some(generate);
        *self.summary_state.borrow_mut() = Some(summary_state);
        *self.notes.borrow_mut() = Some(notes);
    }

    pub(crate) fn generate(&self) -> Callback<()> {
        (*self.generate.borrow()).expect("mentor dispatch registered")
    }

    pub(crate) fn summary_state(&self) -> Signal<ActionState<MentorSummaryVm>> {
        (*self.summary_state.borrow()).expect("mentor summary state registered")
    }

    pub(crate) fn notes(&self) -> Signal<String> {
        (*self.notes.borrow()).expect("mentor notes registered")
    }
}
