use dioxus::prelude::*;
use shared_types::Course;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Skeleton};

use crate::api;
use crate::routes::Route;

/// Full-screen lesson viewer. Rendered without the dashboard chrome so
/// the content gets the whole viewport.
#[component]
pub fn LessonViewerPage(course_id: String, lesson_id: String) -> Element {
    let course_for_fetch = course_id.clone();
    let data = use_resource(move || {
        let id = course_for_fetch.clone();
        async move {
            match api::courses::get_course(&id).await {
                Ok(course) => Some(course),
                Err(err) => {
                    tracing::error!(%err, course = %id, "failed to load course");
                    None
                }
            }
        }
    });

    let body = match &*data.read() {
        Some(Some(course)) => lesson_body(course, &lesson_id),
        Some(None) => rsx! {
            Card {
                CardContent {
                    p { class: "chat-error", "Could not load this lesson. Please try again." }
                }
            }
        },
        None => rsx! {
            Skeleton { height: "8rem" }
        },
    };

    rsx! {
        div { class: "page-content",
            Link { to: Route::StudentHome {},
                Button { variant: ButtonVariant::Ghost, "\u{2190} Back to dashboard" }
            }
            {body}
        }
    }
}

fn lesson_body(course: &Course, lesson_id: &str) -> Element {
    let Some(lesson) = course.lessons.iter().find(|l| l.id == lesson_id).cloned() else {
        return rsx! {
            Card {
                CardContent {
                    p { "This lesson does not exist in the course." }
                }
            }
        };
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{course.title} \u{2014} {lesson.title}" }
            }
            CardContent {
                if let Some(video) = lesson.video_url.clone() {
                    p {
                        a { href: "{video}", target: "_blank", "Watch the lesson video" }
                    }
                }
                if !lesson.content.is_empty() {
                    p { "{lesson.content}" }
                }
            }
        }
    }
}
