use dioxus::prelude::*;
use shared_types::Course;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, PageTitle, Skeleton,
};

use crate::api;
use crate::routes::Route;

/// Student dashboard: enrolled courses, linking into the lesson viewer.
#[component]
pub fn StudentHomePage() -> Element {
    let data = use_resource(|| async move {
        match api::courses::list_courses().await {
            Ok(courses) => Some(courses),
            Err(err) => {
                tracing::error!(%err, "failed to load courses");
                None
            }
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "My Courses" }
        }

        match &*data.read() {
            Some(Some(courses)) => rsx! {
                if courses.is_empty() {
                    Card {
                        CardContent {
                            p { "You are not enrolled in any course yet." }
                        }
                    }
                }
                div { class: "stats-grid",
                    for course in courses.clone() {
                        CourseCard { key: "{course.id}", course: course }
                    }
                }
            },
            Some(None) => rsx! {
                Card {
                    CardContent {
                        p { class: "chat-error", "Could not load your courses. Please try again." }
                    }
                }
            },
            None => rsx! {
                div { class: "stats-grid",
                    for _ in 0..3 {
                        Card {
                            CardContent { Skeleton { height: "4rem" } }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn CourseCard(course: Course) -> Element {
    let lesson_count = course.lessons.len();
    let first_lesson = course.lessons.first().cloned();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{course.title}" }
                if !course.description.is_empty() {
                    CardDescription { "{course.description}" }
                }
            }
            CardContent {
                Badge { variant: BadgeVariant::Secondary,
                    if lesson_count == 1 { "1 lesson" } else { "{lesson_count} lessons" }
                }
                if let Some(lesson) = first_lesson {
                    Link {
                        to: Route::LessonViewer {
                            course_id: course.id.clone(),
                            lesson_id: lesson.id.clone(),
                        },
                        Button { variant: ButtonVariant::Primary, "Start" }
                    }
                }
            }
        }
    }
}
