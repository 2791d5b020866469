use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::guard::dashboard_route;
use super::Route;
use crate::session::use_session;

/// Landing page. Authenticated visitors are sent straight to their
/// dashboard.
#[component]
pub fn HomePage() -> Element {
    let session = use_session();

    if !(session.ready)() {
        return rsx! {};
    }

    if session.is_authenticated() {
        navigator().replace(dashboard_route(*session.role.read()));
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Mentora" }
                    CardDescription { "Courses and one-to-one mentoring, in one place." }
                }
                CardContent {
                    div { class: "home-actions",
                        Link { to: Route::Login {},
                            Button { variant: ButtonVariant::Primary, "Sign in" }
                        }
                        Link { to: Route::Register {},
                            Button { variant: ButtonVariant::Secondary, "Create account" }
                        }
                    }
                }
            }
        }
    }
}
