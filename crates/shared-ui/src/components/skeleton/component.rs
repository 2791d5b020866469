use dioxus::prelude::*;

/// Animated loading placeholder.
#[component]
pub fn Skeleton(
    #[props(default = "100%".to_string())] width: String,
    #[props(default = "1.1rem".to_string())] height: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "skeleton",
            style: "width: {width}; height: {height};",
        }
    }
}
