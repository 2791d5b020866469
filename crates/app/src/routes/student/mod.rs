pub mod home;
pub mod lesson;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{SidebarGroup, SidebarGroupLabel, SidebarMenu, SidebarMenuButton, SidebarMenuItem};

use super::Route;

/// Student side-navigation.
#[component]
pub fn StudentNav() -> Element {
    let route: Route = use_route();

    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "Learning" }
            SidebarMenu {
                SidebarMenuItem {
                    Link { to: Route::StudentHome {},
                        SidebarMenuButton { active: matches!(route, Route::StudentHome {}),
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Dashboard"
                        }
                    }
                }
                SidebarMenuItem {
                    Link { to: Route::StudentMentors {},
                        SidebarMenuButton { active: matches!(route, Route::StudentMentors {}),
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            "Mentors"
                        }
                    }
                }
            }
        }
    }
}
