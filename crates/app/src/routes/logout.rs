use dioxus::prelude::*;

use super::Route;
use crate::session::use_session;

/// Clears the session and browser storage, then returns to login.
#[component]
pub fn LogoutPage() -> Element {
    let mut session = use_session();

    use_effect(move || {
        session.sign_out();
        navigator().replace(Route::Login {});
    });

    rsx! {
        div { class: "auth-loading",
            p { "Signing out..." }
        }
    }
}
