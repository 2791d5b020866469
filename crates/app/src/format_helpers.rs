//! Shared formatting utilities for the UI layer.

use chrono::NaiveDate;

use crate::schedule::calendar::parse_session_date;

/// Format a session's ISO date as "Mar 14, 2026". Unparseable values get
/// a literal placeholder; the entity itself stays visible in lists.
pub fn format_session_date(value: &str) -> String {
    match parse_session_date(value) {
        Some(day) => format_day(day),
        None => "Invalid date".to_string(),
    }
}

/// Human form of a calendar day.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}

/// Month heading, e.g. "March 2026".
pub fn format_month(day: NaiveDate) -> String {
    day.format("%B %Y").to_string()
}

/// Validate and echo an "HH:MM" wall-clock value.
pub fn format_session_hour(value: &str) -> String {
    let trimmed = value.trim();
    let mut parts = trimmed.splitn(2, ':');
    let hour = parts.next().and_then(|h| h.parse::<u32>().ok());
    let minute = parts.next().and_then(|m| m.parse::<u32>().ok());

    match (hour, minute) {
        (Some(h), Some(m)) if h < 24 && m < 60 => format!("{h:02}:{m:02}"),
        _ => "Invalid time".to_string(),
    }
}

/// Up to two initials for avatar fallbacks.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_valid_session_dates() {
        assert_eq!(format_session_date("2026-03-14"), "Mar 14, 2026");
        assert_eq!(format_session_date("2026-03-14T18:30:00Z"), "Mar 14, 2026");
    }

    #[test]
    fn invalid_dates_get_a_placeholder() {
        assert_eq!(format_session_date("soon"), "Invalid date");
        assert_eq!(format_session_date(""), "Invalid date");
    }

    #[test]
    fn formats_and_validates_hours() {
        assert_eq!(format_session_hour("9:5"), "09:05");
        assert_eq!(format_session_hour("14:30"), "14:30");
        assert_eq!(format_session_hour("25:00"), "Invalid time");
        assert_eq!(format_session_hour("lunch"), "Invalid time");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("ana beatriz souza"), "AB");
        assert_eq!(initials("Rui"), "R");
        assert_eq!(initials(""), "");
    }
}
