use dioxus::prelude::*;
use shared_types::{Message, UserSummary};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Card, CardContent, Input, PageHeader, PageTitle,
    SearchBar, Skeleton,
};

use super::panel::ChatPanel;
use super::reconcile::{self, Counterpart};
use crate::api::{self, ApiError};
use crate::format_helpers::initials;
use crate::session::use_session;

/// Which roster the "no chat yet" list is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterKind {
    /// Student side: mentors available for chat.
    Mentors,
    /// Mentor side: all students.
    Students,
}

impl RosterKind {
    fn heading(&self) -> &'static str {
        match self {
            RosterKind::Mentors => "Mentors",
            RosterKind::Students => "Students",
        }
    }

    fn available_label(&self) -> &'static str {
        match self {
            RosterKind::Mentors => "Available mentors",
            RosterKind::Students => "Students without a conversation",
        }
    }
}

async fn fetch_roster(kind: RosterKind) -> Result<Vec<UserSummary>, ApiError> {
    match kind {
        RosterKind::Mentors => api::users::list_chat_mentors().await,
        RosterKind::Students => api::users::list_students().await,
    }
}

async fn load_conversations(
    kind: RosterKind,
    me: &str,
) -> Result<(Vec<Counterpart>, Vec<Counterpart>), ApiError> {
    let sent = api::messages::sent_messages(me).await?;
    let received = api::messages::received_messages(me).await?;
    let roster = fetch_roster(kind).await?;

    let with_chats = reconcile::build_counterparts(&sent, &received, me);
    let available = reconcile::available_counterparts(&roster, &with_chats);
    Ok((with_chats, available))
}

/// One-to-one chat feature, shared by both roles. The list and the panel
/// are exclusive on narrow viewports; a back action returns to the list
/// without refetching.
#[component]
pub fn ChatScreen(roster: RosterKind) -> Element {
    let session = use_session();
    let me = use_memo(move || session.user_id.read().clone().unwrap_or_default());

    let mut with_chats = use_signal(Vec::<Counterpart>::new);
    let mut available = use_signal(Vec::<Counterpart>::new);
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<Counterpart>);
    let mut load_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut show_panel = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            let user = me.peek().clone();
            match load_conversations(roster, &user).await {
                Ok((with, avail)) => {
                    with_chats.set(with);
                    available.set(avail);
                }
                Err(err) => {
                    tracing::error!(%err, "failed to load conversations");
                    load_error.set(Some(
                        "Could not load conversations. Please try again.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    });

    let filtered_with =
        use_memo(move || reconcile::filter_by_query(&with_chats.read(), &query.read()));
    let filtered_available =
        use_memo(move || reconcile::filter_by_query(&available.read(), &query.read()));

    let mut select = move |counterpart: Counterpart| {
        selected.set(Some(counterpart));
        show_panel.set(true);
    };

    // A confirmed send promotes the counterpart to the head of the
    // conversation list (and out of "available" on first contact).
    let on_sent = move |message: Message| {
        if let Some(counterpart) = selected.peek().clone() {
            reconcile::record_send(
                &mut with_chats.write(),
                &mut available.write(),
                &counterpart,
                &message.content,
                message.sent_at.as_deref(),
            );
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./chat.css") }

        div {
            class: "chat-layout",
            "data-view": if show_panel() { "panel" } else { "list" },

            div { class: "chat-list",
                PageHeader {
                    PageTitle { "{roster.heading()}" }
                }

                SearchBar {
                    Input {
                        value: query(),
                        placeholder: "Search by name",
                        on_input: move |e: FormEvent| query.set(e.value()),
                    }
                }

                if let Some(error) = load_error() {
                    Card {
                        CardContent {
                            p { class: "chat-error", "{error}" }
                        }
                    }
                } else if loading() {
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                } else {
                    div { class: "chat-section-label", "Conversations" }
                    if filtered_with.read().is_empty() {
                        p { class: "chat-empty", "No conversations yet." }
                    }
                    for counterpart in filtered_with() {
                        CounterpartRow {
                            key: "{counterpart.id}",
                            counterpart: counterpart.clone(),
                            active: selected.read().as_ref().map(|c| c.id.clone()) == Some(counterpart.id.clone()),
                            onselect: move |c| select(c),
                        }
                    }

                    div { class: "chat-section-label", "{roster.available_label()}" }
                    if filtered_available.read().is_empty() {
                        p { class: "chat-empty", "Nobody else to show." }
                    }
                    for counterpart in filtered_available() {
                        CounterpartRow {
                            key: "{counterpart.id}",
                            counterpart: counterpart.clone(),
                            active: false,
                            onselect: move |c| select(c),
                        }
                    }
                }
            }

            div { class: "chat-panel-area",
                if let Some(counterpart) = selected() {
                    ChatPanel {
                        me: me(),
                        counterpart: counterpart,
                        on_sent: on_sent,
                        on_back: move |_| show_panel.set(false),
                    }
                } else {
                    div { class: "chat-placeholder",
                        p { "Pick a conversation to start chatting." }
                    }
                }
            }
        }
    }
}

#[component]
fn CounterpartRow(
    counterpart: Counterpart,
    active: bool,
    onselect: EventHandler<Counterpart>,
) -> Element {
    let fallback = initials(&counterpart.name);
    let row = counterpart.clone();

    rsx! {
        button {
            class: "chat-row",
            "data-active": if active { "true" } else { "false" },
            onclick: move |_| onselect.call(row.clone()),
            Avatar {
                if let Some(url) = counterpart.avatar_url.clone() {
                    AvatarImage { src: url }
                }
                AvatarFallback { "{fallback}" }
            }
            div { class: "chat-row-text",
                span { class: "chat-row-name", "{counterpart.name}" }
                if let Some(preview) = counterpart.last_message.clone() {
                    span { class: "chat-row-preview", "{preview}" }
                }
            }
            if counterpart.unread {
                span { class: "chat-unread-dot" }
            }
        }
    }
}
