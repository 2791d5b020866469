pub mod home;
pub mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{SidebarGroup, SidebarGroupLabel, SidebarMenu, SidebarMenuButton, SidebarMenuItem};

use super::Route;

/// Admin side-navigation.
#[component]
pub fn AdminNav() -> Element {
    let route: Route = use_route();

    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "Administration" }
            SidebarMenu {
                SidebarMenuItem {
                    Link { to: Route::AdminHome {},
                        SidebarMenuButton { active: matches!(route, Route::AdminHome {}),
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Dashboard"
                        }
                    }
                }
                SidebarMenuItem {
                    Link { to: Route::AdminUsers {},
                        SidebarMenuButton { active: matches!(route, Route::AdminUsers {}),
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            "Users"
                        }
                    }
                }
            }
        }
    }
}
