use dioxus::prelude::*;
use shared_types::MentoringSession;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton,
};

use crate::api;
use crate::routes::Route;
use crate::schedule::actions;
use crate::schedule::calendar::SessionCalendar;
use crate::session::use_session;

/// Mentor dashboard: session counts and quick links.
#[component]
pub fn MentorHomePage() -> Element {
    let session = use_session();
    let me = use_memo(move || session.user_id.read().clone().unwrap_or_default());

    let data = use_resource(move || {
        let mentor = me();
        async move {
            match api::mentoring::list_sessions().await {
                Ok(all) => Some(actions::owned_by(all, &mentor)),
                Err(err) => {
                    tracing::error!(%err, "failed to load sessions");
                    None
                }
            }
        }
    });

    let body = match &*data.read() {
        Some(Some(sessions)) => stats_body(sessions),
        Some(None) => rsx! {
            Card {
                CardContent {
                    p { class: "chat-error", "Could not load your sessions. Please try again." }
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
    };

    rsx! {
        PageHeader {
            PageTitle { "Mentor Dashboard" }
        }
        {body}
    }
}

fn stats_body(sessions: &[MentoringSession]) -> Element {
    let today = chrono::Local::now().date_naive();
    let today_count = SessionCalendar::from_sessions(sessions).session_count(today);
    let total = sessions.len();

    rsx! {
        div { class: "stats-grid",
            Card {
                CardHeader { "Scheduled Sessions" }
                CardContent {
                    span { class: "stat-value", "{total}" }
                    span { class: "stat-label", "In your agenda" }
                }
            }
            Card {
                CardHeader { "Today" }
                CardContent {
                    span { class: "stat-value", "{today_count}" }
                    span { class: "stat-label", "Sessions today" }
                }
            }
        }

        div { class: "home-actions",
            Link { to: Route::MentorSchedule {},
                Button { variant: ButtonVariant::Primary, "Open schedule" }
            }
            Link { to: Route::MentorStudents {},
                Button { variant: ButtonVariant::Secondary, "Message students" }
            }
        }
    }
}
