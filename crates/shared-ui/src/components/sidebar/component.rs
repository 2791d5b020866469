use dioxus::prelude::*;

/// Open/closed state shared by the sidebar family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// The navigation column. Collapses based on the shared state.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let state = use_sidebar();

    rsx! {
        aside {
            class: "sidebar",
            "data-state": if (state)().open { "open" } else { "closed" },
            {children}
        }
    }
}

/// Brand/header area at the top of the sidebar.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

/// Scrollable middle section of the sidebar.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-content", {children} }
    }
}

/// Bottom section of the sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// A labeled group of navigation entries.
#[component]
pub fn SidebarGroup(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group", {children} }
    }
}

/// Label for a SidebarGroup.
#[component]
pub fn SidebarGroupLabel(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group-label", {children} }
    }
}

/// Navigation list inside a group.
#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// One entry of a SidebarMenu.
#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Interactive button within a SidebarMenuItem. On narrow viewports
/// (overlay mode) clicking also closes the sidebar.
#[component]
pub fn SidebarMenuButton(#[props(default = false)] active: bool, children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-menu-button",
            "data-active": if active { "true" } else { "false" },
            onclick: move |_| {
                state.set(SidebarState { open: false });
            },
            {children}
        }
    }
}

/// Toggle button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let current = (state)().open;
                state.set(SidebarState { open: !current });
            },
            {children}
        }
    }
}

/// Divider line inside the sidebar.
#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// Main content area alongside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
