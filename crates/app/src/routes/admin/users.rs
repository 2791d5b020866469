use dioxus::prelude::*;
use shared_types::{UserRole, UserSummary};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle, Skeleton,
};

use crate::api;

/// Admin users page: the roster union with role labels.
#[component]
pub fn AdminUsersPage() -> Element {
    let data = use_resource(|| async move {
        let students = api::users::list_students().await;
        let mentors = api::users::list_chat_mentors().await;
        match (students, mentors) {
            (Ok(students), Ok(mentors)) => Some((students, mentors)),
            (students, mentors) => {
                if let Err(err) = students {
                    tracing::error!(%err, "failed to load students");
                }
                if let Err(err) = mentors {
                    tracing::error!(%err, "failed to load mentors");
                }
                None
            }
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "Users" }
        }

        match &*data.read() {
            Some(Some((students, mentors))) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Role" }
                    }
                    DataTableBody {
                        for user in students.clone() {
                            UserRow { key: "s-{user.id}", user: user, role: UserRole::Student }
                        }
                        for user in mentors.clone() {
                            UserRow { key: "m-{user.id}", user: user, role: UserRole::Mentor }
                        }
                    }
                }
            },
            Some(None) => rsx! {
                Card {
                    CardContent {
                        p { class: "chat-error", "Could not load users. Please try again." }
                    }
                }
            },
            None => rsx! {
                Skeleton {}
                Skeleton {}
                Skeleton {}
            },
        }
    }
}

#[component]
fn UserRow(user: UserSummary, role: UserRole) -> Element {
    let variant = match role {
        UserRole::Mentor => BadgeVariant::Primary,
        _ => BadgeVariant::Secondary,
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{user.name}" }
            DataTableCell { "{user.email}" }
            DataTableCell {
                Badge { variant: variant, "{role.label()}" }
            }
        }
    }
}
