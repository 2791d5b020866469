use dioxus::prelude::*;
use shared_types::{LoginRequest, UserRole};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form, Input,
};

use super::guard::dashboard_route;
use super::Route;
use crate::api;
use crate::session::use_session;

/// Login page. On success the session is persisted and the visitor lands
/// on their role's dashboard.
#[component]
pub fn LoginPage() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    // Already signed in: no reason to show the form.
    if (session.ready)() && session.is_authenticated() {
        navigator().replace(dashboard_route(*session.role.read()));
    }

    let handle_login = move |_: FormEvent| {
        if *loading.peek() {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        spawn(async move {
            let request = LoginRequest {
                email: email.peek().clone(),
                password: password.peek().clone(),
            };
            match api::auth::login(&request).await {
                Ok(response) => match UserRole::from_tag(&response.role) {
                    Some(role) => {
                        session.sign_in(response.token, role, response.user_id);
                        navigator().replace(dashboard_route(Some(role)));
                    }
                    None => {
                        tracing::error!(role = %response.role, "login returned an unknown role");
                        error_msg.set(Some("Your account role is not recognized.".to_string()));
                    }
                },
                Err(err) => {
                    error_msg.set(Some(format!("{err}")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(error) = error_msg() {
                        div { class: "auth-error", "{error}" }
                    }

                    Form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                input_type: "email",
                                placeholder: "user@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                input_type: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
