pub mod home;
pub mod schedule;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdLayoutDashboard, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{SidebarGroup, SidebarGroupLabel, SidebarMenu, SidebarMenuButton, SidebarMenuItem};

use super::Route;

/// Mentor side-navigation.
#[component]
pub fn MentorNav() -> Element {
    let route: Route = use_route();

    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "Mentoring" }
            SidebarMenu {
                SidebarMenuItem {
                    Link { to: Route::MentorHome {},
                        SidebarMenuButton { active: matches!(route, Route::MentorHome {}),
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Dashboard"
                        }
                    }
                }
                SidebarMenuItem {
                    Link { to: Route::MentorStudents {},
                        SidebarMenuButton { active: matches!(route, Route::MentorStudents {}),
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            "Students"
                        }
                    }
                }
                SidebarMenuItem {
                    Link { to: Route::MentorSchedule {},
                        SidebarMenuButton { active: matches!(route, Route::MentorSchedule {}),
                            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                            "Schedule"
                        }
                    }
                }
            }
        }
    }
}
