use dioxus::prelude::*;
use shared_types::{Message, SendMessageRequest};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonVariant, Form, Input, Skeleton,
};

use super::reconcile::Counterpart;
use super::thread::{self, ThreadMessage};
use crate::api::{self, ApiError};
use crate::format_helpers::initials;

async fn load_thread(me: &str, counterpart: &str) -> Result<Vec<ThreadMessage>, ApiError> {
    let sent = api::messages::sent_messages(me).await?;
    let received = api::messages::received_messages(me).await?;
    Ok(thread::build_thread(&sent, &received, me, counterpart))
}

/// Conversation panel for one counterpart. Reloads the full history
/// whenever the counterpart changes; a response that arrives after the
/// selection moved on is discarded.
#[component]
pub fn ChatPanel(
    me: ReadOnlySignal<String>,
    counterpart: ReadOnlySignal<Counterpart>,
    on_sent: EventHandler<Message>,
    on_back: EventHandler<()>,
) -> Element {
    let mut messages = use_signal(Vec::<ThreadMessage>::new);
    let mut draft = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut sending = use_signal(|| false);
    let mut load_error = use_signal(|| None::<String>);

    use_effect(move || {
        let target = counterpart();
        let user = me();
        loading.set(true);
        load_error.set(None);
        messages.set(Vec::new());

        spawn(async move {
            let result = load_thread(&user, &target.id).await;
            // The request is keyed to the counterpart it was issued for;
            // a stale response must not overwrite newer selection state.
            if counterpart.peek().id != target.id {
                return;
            }
            match result {
                Ok(history) => {
                    let merged = thread::merge_refetch(history, &messages.peek());
                    messages.set(merged);
                }
                Err(err) => {
                    tracing::error!(%err, "failed to load chat history");
                    load_error.set(Some("Could not load this conversation.".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let handle_send = move |_: FormEvent| {
        let content = draft.peek().trim().to_string();
        if content.is_empty() || *sending.peek() {
            return;
        }
        let target = counterpart.peek().clone();
        let user = me.peek().clone();
        let temp_id = uuid::Uuid::new_v4().to_string();

        // Optimistic render; rolled back if the send fails.
        messages.write().push(thread::optimistic(&temp_id, &content));
        draft.set(String::new());
        sending.set(true);

        spawn(async move {
            let request = SendMessageRequest {
                sender_id: user.clone(),
                recipient_id: target.id.clone(),
                content,
            };
            match api::messages::send_message(&request).await {
                Ok(created) => {
                    thread::confirm(&mut messages.write(), &temp_id, &created, &user);
                    on_sent.call(created);
                }
                Err(err) => {
                    thread::rollback(&mut messages.write(), &temp_id);
                    tracing::warn!(%err, "message send failed; optimistic entry removed");
                }
            }
            sending.set(false);
        });
    };

    let header = counterpart();
    let fallback = initials(&header.name);

    rsx! {
        div { class: "chat-panel",
            div { class: "chat-panel-header",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_back.call(()),
                    "\u{2190}"
                }
                Avatar {
                    if let Some(url) = header.avatar_url.clone() {
                        AvatarImage { src: url }
                    }
                    AvatarFallback { "{fallback}" }
                }
                span { class: "chat-panel-name", "{header.name}" }
            }

            div { class: "chat-messages",
                if let Some(error) = load_error() {
                    p { class: "chat-error", "{error}" }
                } else if loading() {
                    Skeleton {}
                    Skeleton {}
                } else if messages.read().is_empty() {
                    p { class: "chat-empty", "No messages yet. Say hello!" }
                }
                for message in messages() {
                    div {
                        key: "{message.id}",
                        class: "chat-bubble",
                        "data-own": if message.own { "true" } else { "false" },
                        "data-pending": if message.pending { "true" } else { "false" },
                        span { class: "chat-bubble-author", "{message.author}" }
                        p { class: "chat-bubble-content", "{message.content}" }
                    }
                }
            }

            Form {
                class: "chat-composer",
                onsubmit: handle_send,
                Input {
                    value: draft(),
                    placeholder: "Write a message",
                    on_input: move |e: FormEvent| draft.set(e.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Send" }
                }
            }
        }
    }
}
