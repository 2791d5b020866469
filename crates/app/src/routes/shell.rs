use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{
    Badge, BadgeVariant, Navbar, Separator, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarProvider, SidebarTrigger,
};

use super::Route;

/// Dashboard chrome shared by the three role subtrees: brand sidebar
/// with the role's navigation, top navbar, and the routed page content.
#[component]
pub fn AppShell(role: UserRole, nav: Element, children: Element) -> Element {
    let route: Route = use_route();
    let title = page_title(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    span { class: "sidebar-brand", "Mentora" }
                }
                SidebarContent {
                    {nav}
                }
                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        Badge { variant: BadgeVariant::Secondary, "{role.label()}" }
                        Link { class: "sidebar-signout", to: Route::Logout {}, "Sign out" }
                    }
                }
            }

            SidebarInset {
                Navbar {
                    div { class: "navbar-bar",
                        SidebarTrigger {
                            span { "\u{2630}" }
                        }
                        Separator { horizontal: false }
                        span { class: "navbar-title", "{title}" }
                    }
                }
                div { class: "page-content",
                    {children}
                }
            }
        }
    }
}

fn page_title(route: &Route) -> &'static str {
    match route {
        Route::StudentHome {} => "Dashboard",
        Route::StudentMentors {} => "Mentors",
        Route::LessonViewer { .. } => "Lesson",
        Route::MentorHome {} => "Dashboard",
        Route::MentorStudents {} => "Students",
        Route::MentorSchedule {} => "Schedule",
        Route::AdminHome {} => "Dashboard",
        Route::AdminUsers {} => "Users",
        _ => "",
    }
}
