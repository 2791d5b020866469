use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use super::calendar::{self, SessionCalendar};
use crate::format_helpers::format_month;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month grid showing the session count per day. Clicking a day selects
/// it (filtering the session list); clicking it again clears the
/// selection.
#[component]
pub fn MonthHeatmap(
    calendar: ReadOnlySignal<SessionCalendar>,
    mut selected: Signal<Option<NaiveDate>>,
) -> Element {
    let mut view = use_signal(|| {
        let today = chrono::Local::now().date_naive();
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
    });

    let cells = use_memo(move || {
        let anchor = view();
        calendar::month_grid(anchor.year(), anchor.month())
    });

    let title = format_month(view());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./heatmap.css") }

        div { class: "heatmap",
            div { class: "heatmap-nav",
                button {
                    class: "heatmap-nav-btn",
                    onclick: move |_| {
                        let current = *view.peek();
                        view.set(calendar::prev_month(current));
                    },
                    "\u{2039}"
                }
                span { class: "heatmap-title", "{title}" }
                button {
                    class: "heatmap-nav-btn",
                    onclick: move |_| {
                        let current = *view.peek();
                        view.set(calendar::next_month(current));
                    },
                    "\u{203a}"
                }
            }

            div { class: "heatmap-grid",
                for label in WEEKDAY_LABELS {
                    span { class: "heatmap-weekday", "{label}" }
                }
                for (index, cell) in cells().into_iter().enumerate() {
                    if let Some(day) = cell {
                        HeatmapDay {
                            key: "{day}",
                            day: day,
                            count: calendar.read().session_count(day),
                            selected: selected.read().as_ref() == Some(&day),
                            ontoggle: move |day: NaiveDate| {
                                if *selected.peek() == Some(day) {
                                    selected.set(None);
                                } else {
                                    selected.set(Some(day));
                                }
                            },
                        }
                    } else {
                        span { key: "blank-{index}", class: "heatmap-blank" }
                    }
                }
            }
        }
    }
}

#[component]
fn HeatmapDay(
    day: NaiveDate,
    count: usize,
    selected: bool,
    ontoggle: EventHandler<NaiveDate>,
) -> Element {
    rsx! {
        button {
            class: "heatmap-day",
            "data-selected": if selected { "true" } else { "false" },
            "data-busy": if count > 0 { "true" } else { "false" },
            onclick: move |_| ontoggle.call(day),
            span { class: "heatmap-day-number", "{day.day()}" }
            if count > 0 {
                span { class: "heatmap-day-count", "{count}" }
            }
        }
    }
}
