use dioxus::prelude::*;
use dioxus_router::use_navigator;

use hub_core::model::{AssignmentKind, OUTREACH_TEMPLATE, Persona, assignment_or_fallback};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ActionState;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ActivityView(title: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let assignment = assignment_or_fallback(&title);

    let mut draft = use_signal(String::new);
    let mut persona = use_signal(Persona::default);
    let mut hint_state = use_signal(|| ActionState::<Vec<String>>::Idle);

    // Hooks survive a same-route navigation with a different title, so state
    // carried over from the previous assignment is reset by hand.
    let mut shown_title = use_signal(|| assignment.title().to_string());
    if shown_title() != assignment.title() {
        shown_title.set(assignment.title().to_string());
        draft.set(String::new());
        hint_state.set(ActionState::Idle);
    }

    let coach = ctx.coach();
    let request_hint = use_callback(move |()| {
        // The outreach task has no draft and never calls the hint service.
        if assignment.kind() == AssignmentKind::Outreach {
            return;
        }
        if hint_state.read().is_loading() {
            return;
        }
        let coach = coach.clone();
        let question = assignment.prompt().to_string();
        let persona_value = persona();
        let notes = draft();
        let mut hint_state = hint_state;
        spawn(async move {
            hint_state.set(ActionState::Loading);
            match coach.request_hints(&question, persona_value, &notes).await {
                Ok(hints) => hint_state.set(ActionState::Ready(hints)),
                Err(err) => hint_state.set(ActionState::Failed(err.to_string())),
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ActivityTestHandles>() {
                handles.register(request_hint, hint_state, draft, persona);
            }
        }
    }

    let insert_example = use_callback(move |()| {
        let example = assignment.example();
        if example.is_empty() {
            return;
        }
        draft.with_mut(|text| {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(example);
        });
    });

    rsx! {
        div { class: "page activity",
            div { class: "activity-grid",
                div { class: "panel activity-main",
                    div { class: "activity-header",
                        div {
                            h3 { "{assignment.title()}" }
                            p { class: "activity-meta", "Step 1 of 3 • {assignment.eta()}" }
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Dashboard {});
                            },
                            "Save & Exit"
                        }
                    }

                    div { class: "prompt-box",
                        p {
                            span { class: "prompt-label", "Prompt: " }
                            "{assignment.prompt()}"
                        }
                    }

                    match assignment.kind() {
                        AssignmentKind::Outreach => rsx! {
                            div { class: "callout callout--template",
                                h4 { "Message template" }
                                p { class: "template-text", "{OUTREACH_TEMPLATE}" }
                                p { class: "muted",
                                    "Copy the template, personalize the first line, and send it to one contact today."
                                }
                            }
                            div { class: "activity-controls",
                                button {
                                    class: "btn btn-primary activity-submit",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let _ = navigator.push(Route::Feedback {});
                                    },
                                    "Submit for Review"
                                }
                            }
                        },
                        AssignmentKind::Reflection => rsx! {
                            textarea {
                                class: "draft-input",
                                placeholder: "Type your reflections here…",
                                value: "{draft()}",
                                oninput: move |evt| draft.set(evt.value()),
                            }
                            div { class: "activity-controls",
                                label { class: "persona-label", r#for: "persona-select", "Persona" }
                                select {
                                    id: "persona-select",
                                    class: "persona-select",
                                    onchange: move |evt| {
                                        if let Ok(parsed) = evt.value().parse::<Persona>() {
                                            persona.set(parsed);
                                        }
                                    },
                                    for option_value in Persona::ALL {
                                        option {
                                            value: "{option_value.as_str()}",
                                            selected: option_value == persona(),
                                            "{option_value.as_str()}"
                                        }
                                    }
                                }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: hint_state.read().is_loading(),
                                    onclick: move |_| request_hint.call(()),
                                    "Get AI Hint"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| insert_example.call(()),
                                    "Insert Example"
                                }
                                button {
                                    class: "btn btn-primary activity-submit",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let _ = navigator.push(Route::Feedback {});
                                    },
                                    "Submit for Review"
                                }
                            }
                            match hint_state() {
                                ActionState::Idle => rsx! {},
                                ActionState::Loading => rsx! {
                                    p { class: "muted", "Asking the coach…" }
                                },
                                ActionState::Ready(hints) => rsx! {
                                    div { class: "hint-panel",
                                        h4 { "AI Hints" }
                                        ul { class: "hint-list",
                                            for hint in hints {
                                                li { "{hint}" }
                                            }
                                        }
                                    }
                                },
                                ActionState::Failed(message) => rsx! {
                                    p { class: "error-text", "Error: {message}" }
                                },
                            }
                            div { class: "artifact-box",
                                h4 { "Attach Artifact (optional)" }
                                div { class: "artifact-drop",
                                    "Drop files here or click to upload (resume, notes, screenshots)"
                                }
                            }
                        },
                    }
                }

                aside { class: "panel activity-side",
                    h4 { "Progress" }
                    div { class: "progress-track",
                        div { class: "progress-fill" }
                    }
                    p { class: "muted", "1/3 steps completed" }
                    div {
                        h4 { "Next up" }
                        ul { class: "bullet-list",
                            li { "Auto-tag skills" }
                            li { "Create 1 STAR bullet" }
                        }
                    }
                    div { class: "callout callout--success",
                        "Your mentor will review this before your next session. You'll get suggestions in the app."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ActivityTestHandles {
    request_hint: Rc<RefCell<Option<Callback<()>>>>,
    hint_state: Rc<RefCell<Option<Signal<ActionState<Vec<String>>>>>>,
    draft: Rc<RefCell<Option<Signal<String>>>>,
    persona: Rc<RefCell<Option<Signal<Persona>>>>,
}

#[cfg(test)]
impl ActivityTestHandles {
    pub(crate) fn register(
        &self,
        request_hint: Callback<()>,
        hint_state: Signal<ActionState<Vec<String>>>,
        draft: Signal<String>,
        persona: Signal<Persona>,
    ) {
        *self.request_hint.borrow_mut() = Some(request_hint);
        *self.hint_state.borrow_mut() = Some(hint_state);
        *self.draft.borrow_mut() = Some(draft);
        *self.persona.borrow_mut() = Some(persona);
    }

    pub(crate) fn request_hint(&self) -> Callback<()> {
        (*self.request_hint.borrow()).expect("activity dispatch registered")
    }

    pub(crate) fn hint_state(&self) -> Signal<ActionState<Vec<String>>> {
        (*self.hint_state.borrow()).expect("activity hint state registered")
    }

    pub(crate) fn draft(&self) -> Signal<String> {
        (*self.draft.borrow()).expect("activity draft registered")
    }

    pub(crate) fn persona(&self) -> Signal<Persona> {
        (*self.persona.borrow()).expect("activity persona registered")
    }
}
