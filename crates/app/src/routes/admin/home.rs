use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::api;

/// Admin dashboard: platform headcounts.
#[component]
pub fn AdminHomePage() -> Element {
    let data = use_resource(|| async move {
        let students = api::users::list_students().await;
        let mentors = api::users::list_chat_mentors().await;
        match (students, mentors) {
            (Ok(students), Ok(mentors)) => Some((students.len(), mentors.len())),
            (students, mentors) => {
                if let Err(err) = students {
                    tracing::error!(%err, "failed to load students");
                }
                if let Err(err) = mentors {
                    tracing::error!(%err, "failed to load mentors");
                }
                None
            }
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "Platform Overview" }
        }

        match &*data.read() {
            Some(Some((students, mentors))) => rsx! {
                div { class: "stats-grid",
                    Card {
                        CardHeader { "Students" }
                        CardContent {
                            span { class: "stat-value", "{students}" }
                            span { class: "stat-label", "Registered" }
                        }
                    }
                    Card {
                        CardHeader { "Mentors" }
                        CardContent {
                            span { class: "stat-value", "{mentors}" }
                            span { class: "stat-label", "Available for chat" }
                        }
                    }
                }
            },
            Some(None) => rsx! {
                Card {
                    CardContent {
                        p { class: "chat-error", "Could not load platform stats. Please try again." }
                    }
                }
            },
            None => rsx! {
                div { class: "stats-grid",
                    for _ in 0..2 {
                        Card {
                            CardContent { Skeleton { height: "3.5rem" } }
                        }
                    }
                }
            },
        }
    }
}
