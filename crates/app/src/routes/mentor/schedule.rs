use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{MentoringSession, SessionType, SessionUpdate};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DialogContent,
    DialogDescription, DialogRoot, DialogTitle, Input, PageHeader, PageTitle, Skeleton,
    ToastOptions,
};

use crate::api;
use crate::format_helpers::{format_day, format_session_date, format_session_hour};
use crate::schedule::actions::{self, StartOutcome};
use crate::schedule::calendar::{self, SessionCalendar};
use crate::schedule::MonthHeatmap;
use crate::session::use_session;

/// Mentor schedule: session list, day heat-map filter, and the
/// delete/refuse/edit-link/start flows.
#[component]
pub fn SchedulePage() -> Element {
    let session_ctx = use_session();
    let toast = use_toast();
    let me = use_memo(move || session_ctx.user_id.read().clone().unwrap_or_default());

    let mut sessions = use_signal(Vec::<MentoringSession>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let selected_day = use_signal(|| None::<NaiveDate>);
    // Advisory, client-held: at most one active chat session at a time.
    let mut active_chat = use_signal(|| None::<String>);

    let mut confirm_refuse = use_signal(|| None::<MentoringSession>);
    let mut deleting = use_signal(|| false);
    let mut edit_target = use_signal(|| None::<MentoringSession>);
    let mut link_draft = use_signal(String::new);
    let mut saving_link = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            let mentor = me.peek().clone();
            match api::mentoring::list_sessions().await {
                Ok(all) => sessions.set(actions::owned_by(all, &mentor)),
                Err(err) => {
                    tracing::error!(%err, "failed to load sessions");
                    load_error.set(Some(
                        "Could not load your sessions. Please try again.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    });

    // Derived strictly from the committed session list.
    let digest = use_memo(move || SessionCalendar::from_sessions(&sessions.read()));
    let visible = use_memo(move || calendar::filter_by_day(&sessions.read(), *selected_day.read()));

    let perform_delete = move |target: MentoringSession, success: &'static str| {
        spawn(async move {
            deleting.set(true);
            match api::mentoring::delete_session(&target.id).await {
                Ok(()) => {
                    actions::remove_session(&mut sessions.write(), &target.id);
                    if active_chat.peek().as_deref() == Some(target.id.as_str()) {
                        active_chat.set(None);
                    }
                    toast.success(success.to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(format!("{err}"), ToastOptions::new());
                }
            }
            deleting.set(false);
            confirm_refuse.set(None);
        });
    };

    let mut open_edit = move |target: MentoringSession| {
        link_draft.set(target.link.clone().unwrap_or_default());
        edit_target.set(Some(target));
    };

    let handle_save_link = move |_: MouseEvent| {
        let Some(target) = edit_target.peek().clone() else {
            return;
        };
        // An empty link never reaches the network.
        let Some(link) = actions::validate_link(&link_draft.peek()) else {
            toast.error("Meeting link cannot be empty".to_string(), ToastOptions::new());
            return;
        };
        spawn(async move {
            saving_link.set(true);
            let update = SessionUpdate::with_link(&target, link);
            match api::mentoring::update_session(&target.id, &update).await {
                Ok(updated) => {
                    actions::replace_session(&mut sessions.write(), updated);
                    toast.success("Meeting link updated".to_string(), ToastOptions::new());
                    edit_target.set(None);
                }
                Err(err) => {
                    toast.error(format!("{err}"), ToastOptions::new());
                }
            }
            saving_link.set(false);
        });
    };

    let mut handle_start = move |target: MentoringSession| {
        match actions::start_outcome(&target, active_chat.peek().as_deref()) {
            StartOutcome::OpenLink(url) => open_in_new_tab(&url),
            StartOutcome::BeginChat => active_chat.set(Some(target.id)),
            StartOutcome::SecondChatRejected => toast.error(
                "Another chat session is already active. End it before starting a new one."
                    .to_string(),
                ToastOptions::new(),
            ),
            StartOutcome::MissingLink => toast.error(
                "This session has no meeting link yet.".to_string(),
                ToastOptions::new(),
            ),
        }
    };

    let active_session = use_memo(move || {
        let active = active_chat.read().clone()?;
        sessions.read().iter().find(|s| s.id == active).cloned()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./schedule.css") }

        PageHeader {
            PageTitle { "Schedule" }
        }

        if let Some(active) = active_session() {
            div { class: "active-session-banner",
                span { "Chat session in progress: {active.title} with {active.student.name}" }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: deleting(),
                    onclick: move |_| {
                        if let Some(active) = active_session.peek().clone() {
                            perform_delete(active, "Session ended");
                        }
                    },
                    "End session"
                }
            }
        }

        div { class: "schedule-layout",
            Card { class: "schedule-calendar",
                CardHeader { CardTitle { "Sessions per day" } }
                CardContent {
                    MonthHeatmap { calendar: digest, selected: selected_day }
                    if let Some(day) = selected_day() {
                        DayFilterSummary { day: day, count: digest.read().session_count(day) }
                    }
                }
            }

            div { class: "schedule-list",
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
                    SessionTable {
                        sessions: visible(),
                        on_start: move |s| handle_start(s),
                        on_edit: move |s| open_edit(s),
                        on_refuse: move |s| confirm_refuse.set(Some(s)),
                    }
                }
            }
        }

        // Refuse confirmation
        AlertDialogRoot {
            open: confirm_refuse().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    confirm_refuse.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Refuse Session" }
                AlertDialogDescription {
                    "Are you sure you want to refuse this session? The student will have to book a new one."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_: MouseEvent| {
                            if let Some(target) = confirm_refuse.peek().clone() {
                                perform_delete(target, "Session refused");
                            }
                        },
                        if deleting() { "Refusing..." } else { "Refuse" }
                    }
                }
            }
        }

        // Edit meeting link
        DialogRoot {
            open: edit_target().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    edit_target.set(None);
                }
            },
            DialogContent {
                DialogTitle { "Edit Meeting Link" }
                DialogDescription { "Paste the meeting link students will use to join." }
                Input {
                    value: link_draft(),
                    placeholder: "https://meet.example.com/abc",
                    on_input: move |e: FormEvent| link_draft.set(e.value()),
                }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| edit_target.set(None),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving_link(),
                        onclick: handle_save_link,
                        if saving_link() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

#[component]
fn DayFilterSummary(day: NaiveDate, count: usize) -> Element {
    let label = if count == 1 {
        "1 session".to_string()
    } else {
        format!("{count} sessions")
    };

    rsx! {
        div { class: "schedule-day-filter",
            Badge { variant: BadgeVariant::Primary, "{format_day(day)}" }
            span { class: "schedule-day-count", "{label}" }
        }
    }
}

#[component]
fn SessionTable(
    sessions: Vec<MentoringSession>,
    on_start: EventHandler<MentoringSession>,
    on_edit: EventHandler<MentoringSession>,
    on_refuse: EventHandler<MentoringSession>,
) -> Element {
    if sessions.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    p { "No sessions to show." }
                }
            }
        };
    }

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Title" }
                DataTableColumn { "Student" }
                DataTableColumn { "Date" }
                DataTableColumn { "Time" }
                DataTableColumn { "Type" }
                DataTableColumn { "" }
            }
            DataTableBody {
                for session in sessions {
                    SessionRow {
                        key: "{session.id}",
                        session: session.clone(),
                        on_start: move |s| on_start.call(s),
                        on_edit: move |s| on_edit.call(s),
                        on_refuse: move |s| on_refuse.call(s),
                    }
                }
            }
        }
    }
}

#[component]
fn SessionRow(
    session: MentoringSession,
    on_start: EventHandler<MentoringSession>,
    on_edit: EventHandler<MentoringSession>,
    on_refuse: EventHandler<MentoringSession>,
) -> Element {
    let display_date = format_session_date(&session.date);
    let display_hour = format_session_hour(&session.date_hour);
    let type_variant = match session.session_type {
        SessionType::VideoCall => BadgeVariant::Primary,
        SessionType::Chat => BadgeVariant::Outline,
    };
    let for_start = session.clone();
    let for_edit = session.clone();
    let for_refuse = session.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "{session.title}" }
            DataTableCell { "{session.student.name}" }
            DataTableCell { "{display_date}" }
            DataTableCell { "{display_hour}" }
            DataTableCell {
                Badge { variant: type_variant, "{session.session_type.label()}" }
            }
            DataTableCell {
                div { class: "session-row-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_start.call(for_start.clone()),
                        "Start"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_edit.call(for_edit.clone()),
                        "Edit link"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_refuse.call(for_refuse.clone()),
                        "Refuse"
                    }
                }
            }
        }
    }
}

/// Open a meeting link in a new browsing context.
fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}
