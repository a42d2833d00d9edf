use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EffortLevel {
    TooLow,
    JustRight,
    TooHigh,
}

impl EffortLevel {
    const ALL: [EffortLevel; 3] = [Self::TooLow, Self::JustRight, Self::TooHigh];

    fn label(self) -> &'static str {
        match self {
            Self::TooLow => "Too low",
            Self::JustRight => "Just right",
            Self::TooHigh => "Too high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RecommendLevel {
    No,
    Maybe,
    Yes,
}

impl RecommendLevel {
    const ALL: [RecommendLevel; 3] = [Self::No, Self::Maybe, Self::Yes];

    fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Maybe => "Maybe",
            Self::Yes => "Yes",
        }
    }
}

fn choice_class(selected: bool) -> &'static str {
    if selected {
        "btn btn-choice btn-choice--selected"
    } else {
        "btn btn-choice"
    }
}

// Selections highlight locally only. There is no feedback backend yet, so
// submit navigates home and the selections are discarded.
#[component]
pub fn FeedbackView() -> Element {
    let navigator = use_navigator();
    let mut helpfulness = use_signal(|| None::<u8>);
    let mut effort = use_signal(|| None::<EffortLevel>);
    let mut recommend = use_signal(|| None::<RecommendLevel>);
    let mut comments = use_signal(String::new);

    rsx! {
        div { class: "page feedback",
            div { class: "feedback-grid",
                div { class: "panel feedback-main",
                    h3 { "Quick Feedback" }
                    p { class: "muted",
                        "Help us improve these activities. This takes "
                        strong { "30–45 seconds" }
                        "."
                    }

                    div { class: "feedback-questions",
                        div { class: "card feedback-question",
                            p { "How helpful was this activity?" }
                            div { class: "choice-row",
                                for rating in 1u8..=5 {
                                    button {
                                        class: choice_class(helpfulness() == Some(rating)),
                                        r#type: "button",
                                        onclick: move |_| helpfulness.set(Some(rating)),
                                        "{rating}"
                                    }
                                }
                            }
                        }
                        div { class: "card feedback-question",
                            p { "Effort required felt…" }
                            div { class: "choice-row",
                                for level in EffortLevel::ALL {
                                    button {
                                        class: choice_class(effort() == Some(level)),
                                        r#type: "button",
                                        onclick: move |_| effort.set(Some(level)),
                                        "{level.label()}"
                                    }
                                }
                            }
                        }
                        div { class: "card feedback-question",
                            p { "Would you recommend this to a peer?" }
                            div { class: "choice-row",
                                for level in RecommendLevel::ALL {
                                    button {
                                        class: choice_class(recommend() == Some(level)),
                                        r#type: "button",
                                        onclick: move |_| recommend.set(Some(level)),
                                        "{level.label()}"
                                    }
                                }
                            }
                        }
                        div { class: "card feedback-question",
                            p { "Anything we should change?" }
                            textarea {
                                class: "comments-input",
                                placeholder: "Optional: 1-2 lines",
                                value: "{comments()}",
                                oninput: move |evt| comments.set(evt.value()),
                            }
                        }
                    }

                    div { class: "feedback-footer",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Dashboard {});
                            },
                            "Submit Feedback"
                        }
                    }
                }

                aside { class: "panel feedback-side",
                    h4 { "After you submit" }
                    ul { class: "bullet-list",
                        li { "AI draft of resume bullet (edit anytime)" }
                        li { "Mentor notes appear within 48h" }
                        li { "Next activity unlocked" }
                    }
                    div { class: "callout callout--thanks",
                        "Thanks! Your input helps us test engagement (activation, completion, retention)."
                    }
                }
            }
        }
    }
}
