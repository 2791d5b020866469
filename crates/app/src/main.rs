use dioxus::prelude::*;

mod api;
mod chat;
mod config;
mod format_helpers;
mod routes;
mod schedule;
mod session;
mod storage;

use routes::Route;
use session::SessionState;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut session = use_context_provider(SessionState::new);

    // Hydrate the session from browser storage once. Route guards render
    // nothing until this has run.
    use_effect(move || {
        session.restore();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
