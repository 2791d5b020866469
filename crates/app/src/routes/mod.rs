pub mod admin;
pub mod guard;
pub mod home;
pub mod login;
pub mod logout;
pub mod mentor;
pub mod register;
pub mod shell;
pub mod student;

use dioxus::prelude::*;
use shared_types::UserRole;

use crate::chat::{ChatScreen, RosterKind};
use crate::session::use_session;

/// Application routes. Each role owns a guarded subtree; the catch-all
/// sends strays to their own dashboard or to login.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/registro")]
    Register {},
    #[route("/logout")]
    Logout {},
    // ── Student ──
    #[layout(StudentSection)]
    #[route("/dashboard")]
    StudentHome {},
    #[route("/dashboard/mentors")]
    StudentMentors {},
    #[route("/dashboard/courses/:course_id/lessons/:lesson_id")]
    LessonViewer { course_id: String, lesson_id: String },
    #[end_layout]
    // ── Mentor ──
    #[layout(MentorSection)]
    #[route("/mentor")]
    MentorHome {},
    #[route("/mentor/students")]
    MentorStudents {},
    #[route("/mentor/schedule")]
    MentorSchedule {},
    #[end_layout]
    // ── Admin ──
    #[layout(AdminSection)]
    #[route("/admin")]
    AdminHome {},
    #[route("/admin/users")]
    AdminUsers {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Student subtree: role gate plus dashboard chrome. The lesson viewer
/// renders without the sidebar.
#[component]
fn StudentSection() -> Element {
    let route: Route = use_route();

    if matches!(route, Route::LessonViewer { .. }) {
        return rsx! {
            guard::RequireRole { required: UserRole::Student,
                Outlet::<Route> {}
            }
        };
    }

    rsx! {
        guard::RequireRole { required: UserRole::Student,
            shell::AppShell {
                role: UserRole::Student,
                nav: rsx! { student::StudentNav {} },
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn MentorSection() -> Element {
    rsx! {
        guard::RequireRole { required: UserRole::Mentor,
            shell::AppShell {
                role: UserRole::Mentor,
                nav: rsx! { mentor::MentorNav {} },
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn AdminSection() -> Element {
    rsx! {
        guard::RequireRole { required: UserRole::Admin,
            shell::AppShell {
                role: UserRole::Admin,
                nav: rsx! { admin::AdminNav {} },
                Outlet::<Route> {}
            }
        }
    }
}

// Route components

#[component]
fn Home() -> Element {
    home::HomePage()
}

#[component]
fn Login() -> Element {
    login::LoginPage()
}

#[component]
fn Register() -> Element {
    register::RegisterPage()
}

#[component]
fn Logout() -> Element {
    logout::LogoutPage()
}

#[component]
fn StudentHome() -> Element {
    student::home::StudentHomePage()
}

#[component]
fn StudentMentors() -> Element {
    rsx! { ChatScreen { roster: RosterKind::Mentors } }
}

#[component]
fn LessonViewer(course_id: String, lesson_id: String) -> Element {
    rsx! { student::lesson::LessonViewerPage { course_id: course_id, lesson_id: lesson_id } }
}

#[component]
fn MentorHome() -> Element {
    mentor::home::MentorHomePage()
}

#[component]
fn MentorStudents() -> Element {
    rsx! { ChatScreen { roster: RosterKind::Students } }
}

#[component]
fn MentorSchedule() -> Element {
    mentor::schedule::SchedulePage()
}

#[component]
fn AdminHome() -> Element {
    admin::home::AdminHomePage()
}

#[component]
fn AdminUsers() -> Element {
    admin::users::AdminUsersPage()
}

/// Catch-all: authenticated visitors go to their dashboard root,
/// everyone else to login.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let session = use_session();

    if !(session.ready)() {
        return rsx! {};
    }

    tracing::debug!(path = ?segments, "unknown route");
    let target = if session.is_authenticated() {
        guard::dashboard_route(*session.role.read())
    } else {
        Route::Login {}
    };
    navigator().replace(target);

    rsx! {
        div { class: "auth-loading",
            p { "Redirecting..." }
        }
    }
}
