use dioxus::prelude::*;
use dioxus_router::use_navigator;

use hub_core::model::catalog;

use crate::routes::Route;
use crate::vm::map_assignment_cards;

#[component]
pub fn DashboardView() -> Element {
    let navigator = use_navigator();
    let cards = map_assignment_cards(catalog());
    let nudge_title = catalog()
        .first()
        .map_or("", |assignment| assignment.title());

    let card_nodes = cards.into_iter().map(|card| {
        let nav = navigator;
        let title = card.title.clone();
        let meta_line = card.meta_line.clone();
        let status_label = card.status_label.clone();
        let status_class = card.status_class;
        let desc = card.desc.clone();
        let due = card.due.clone();
        let action_label = card.action_label;
        let route_title = card.title.clone();
        rsx! {
            div { class: "card assignment-card",
                div { class: "assignment-card-top",
                    div {
                        h3 { class: "assignment-title", "{title}" }
                        p { class: "assignment-meta", "{meta_line}" }
                    }
                    span { class: "{status_class}", "{status_label}" }
                }
                p { class: "assignment-desc", "{desc}" }
                div { class: "assignment-card-bottom",
                    span { class: "assignment-due", "{due}" }
                    div { class: "assignment-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = nav.push(Route::Activity {
                                    title: route_title.clone(),
                                });
                            },
                            "{action_label}"
                        }
                        button { class: "btn btn-secondary", r#type: "button", "Preview" }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page dashboard",
            div { class: "dashboard-grid",
                div { class: "assignment-grid", {card_nodes} }

                aside { class: "panel coach-panel",
                    h3 { "Coach" }
                    div { class: "callout callout--info",
                        "Today's nudge: Try "
                        span { class: "callout-strong", "{nudge_title}" }
                        ". Reflect on 3 energizing moments — I'll auto-tag strengths for you."
                    }
                    div {
                        h4 { "Quick Resources" }
                        ul { class: "bullet-list",
                            li { "STAR method one-pager" }
                            li { "Networking message template" }
                            li { "Resume impact verb list" }
                        }
                    }
                }
            }
        }
    }
}
