use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use hub_core::model::catalog;

use crate::views::{ActivityView, DashboardView, FeedbackView, MentorNotesView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/activity/:title", ActivityView)] Activity { title: String },
        #[route("/feedback", FeedbackView)] Feedback {},
        #[route("/mentor", MentorNotesView)] MentorNotes {},
}

impl Route {
    /// Activity route for the default assignment, used by the switcher tab
    /// when nothing was picked from the dashboard yet.
    #[must_use]
    pub fn default_activity() -> Self {
        let title = catalog()
            .first()
            .map_or_else(String::new, |assignment| assignment.title().to_string());
        Route::Activity { title }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            Switcher {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "Homework Hub" }
            div { class: "header-chips",
                span { class: "chip",
                    "Stage: "
                    span { class: "chip-strong", "Confidence → Career" }
                }
                span { class: "chip",
                    "Streak: "
                    span { class: "chip-strong", "3 days" }
                }
            }
        }
    }
}

#[component]
fn Switcher() -> Element {
    rsx! {
        nav { class: "switcher",
            Link { class: "tab", to: Route::Dashboard {}, "Assignments" }
            Link { class: "tab", to: Route::default_activity(), "Activity Player" }
            Link { class: "tab", to: Route::Feedback {}, "Feedback" }
            Link { class: "tab", to: Route::MentorNotes {}, "Mentor Notes" }
        }
    }
}
