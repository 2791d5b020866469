use dioxus::prelude::*;
use shared_types::{RegisterRequest, UserRole};
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form,
    FormSelect, Input, ToastOptions,
};

use super::Route;
use crate::api;

/// Account signup (`/registro`). New accounts sign in afterwards.
#[component]
pub fn RegisterPage() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role_tag = use_signal(|| UserRole::Student.storage_tag().to_string());
    let mut error_msg = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_register = move |_: FormEvent| {
        if *loading.peek() {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        spawn(async move {
            let request = RegisterRequest {
                name: name.peek().trim().to_string(),
                email: email.peek().trim().to_string(),
                password: password.peek().clone(),
                role: role_tag.peek().clone(),
            };
            match api::auth::register(&request).await {
                Ok(()) => {
                    toast.success(
                        "Account created. Sign in to continue.".to_string(),
                        ToastOptions::new(),
                    );
                    navigator().push(Route::Login {});
                }
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
                    CardTitle { "Create Account" }
                    CardDescription { "Join as a student or a mentor" }
                }

                CardContent {
                    if let Some(error) = error_msg() {
                        div { class: "auth-error", "{error}" }
                    }

                    Form { onsubmit: handle_register,
                        div { class: "auth-field",
                            Input {
                                label: "Name",
                                placeholder: "Your full name",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
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
                                placeholder: "At least 8 characters",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            FormSelect {
                                label: "I am joining as",
                                value: role_tag(),
                                onchange: move |evt: Event<FormData>| role_tag.set(evt.value()),
                                option { value: UserRole::Student.storage_tag(), "Student" }
                                option { value: UserRole::Mentor.storage_tag(), "Mentor" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
