//! Day-bucketed calendar aggregation for the mentor's session list. The
//! digest is always rebuilt from the committed list, never from a stale
//! snapshot.

use chrono::{Datelike, NaiveDate};
use shared_types::MentoringSession;
use std::collections::BTreeMap;

/// A day with at least one scheduled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub session_count: usize,
}

/// Session counts per calendar day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCalendar {
    counts: BTreeMap<NaiveDate, usize>,
}

impl SessionCalendar {
    /// Build the digest from the current session list. Sessions whose
    /// date cannot be parsed are excluded from the calendar (they remain
    /// in the plain list) and logged as a warning.
    pub fn from_sessions(sessions: &[MentoringSession]) -> Self {
        let mut counts = BTreeMap::new();
        for session in sessions {
            match parse_session_date(&session.date) {
                Some(day) => *counts.entry(day).or_insert(0) += 1,
                None => tracing::warn!(
                    session = %session.id,
                    date = %session.date,
                    "unparseable session date excluded from calendar"
                ),
            }
        }
        Self { counts }
    }

    pub fn is_day_with_session(&self, day: NaiveDate) -> bool {
        self.counts.contains_key(&day)
    }

    pub fn session_count(&self, day: NaiveDate) -> usize {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        self.counts
            .iter()
            .map(|(&date, &session_count)| CalendarEvent {
                date,
                session_count,
            })
            .collect()
    }
}

/// Parse the date portion of a session's ISO string (`YYYY-MM-DD`,
/// with or without a trailing time component).
pub fn parse_session_date(value: &str) -> Option<NaiveDate> {
    let day = value.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Sessions on the selected day (year+month+day equality, time ignored);
/// no selection shows everything.
pub fn filter_by_day(
    sessions: &[MentoringSession],
    day: Option<NaiveDate>,
) -> Vec<MentoringSession> {
    match day {
        None => sessions.to_vec(),
        Some(day) => sessions
            .iter()
            .filter(|s| parse_session_date(&s.date) == Some(day))
            .cloned()
            .collect(),
    }
}

/// Cells of a month view, weeks starting on Sunday. Leading and trailing
/// blanks pad to whole weeks.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];

    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// First day of the previous month.
pub fn prev_month(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 1 {
        (day.year() - 1, 12)
    } else {
        (day.year(), day.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(day)
}

/// First day of the next month.
pub fn next_month(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Participant, SessionType};

    fn session(id: &str, date: &str) -> MentoringSession {
        MentoringSession {
            id: id.into(),
            mentor: Participant {
                id: "m-1".into(),
                name: "Marta".into(),
                avatar_url: None,
            },
            student: Participant {
                id: "u-1".into(),
                name: "Ana".into(),
                avatar_url: None,
            },
            title: "Session".into(),
            date: date.into(),
            date_hour: "10:00".into(),
            session_type: SessionType::VideoCall,
            link: None,
        }
    }

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn counts_sessions_per_day() {
        let sessions = vec![
            session("s1", "2026-03-14"),
            session("s2", "2026-03-14T09:00:00Z"),
            session("s3", "2026-03-14"),
            session("s4", "2026-03-20"),
        ];

        let calendar = SessionCalendar::from_sessions(&sessions);

        assert!(calendar.is_day_with_session(day("2026-03-14")));
        assert!(calendar.is_day_with_session(day("2026-03-20")));
        assert_eq!(calendar.session_count(day("2026-03-14")), 3);
        assert_eq!(calendar.session_count(day("2026-03-20")), 1);
        assert_eq!(calendar.session_count(day("2026-03-15")), 0);
    }

    #[test]
    fn unparseable_dates_count_toward_no_day() {
        let sessions = vec![session("s1", "2026-03-14"), session("s2", "someday soon")];

        let calendar = SessionCalendar::from_sessions(&sessions);

        assert_eq!(calendar.events().len(), 1);
        assert_eq!(calendar.session_count(day("2026-03-14")), 1);
    }

    #[test]
    fn removing_the_last_session_clears_the_day() {
        let mut sessions = vec![session("s1", "2026-03-14"), session("s2", "2026-03-20")];

        sessions.retain(|s| s.id != "s2");
        let calendar = SessionCalendar::from_sessions(&sessions);

        assert!(!calendar.is_day_with_session(day("2026-03-20")));
        assert!(calendar.is_day_with_session(day("2026-03-14")));
    }

    #[test]
    fn day_filter_ignores_time_of_day() {
        let sessions = vec![
            session("s1", "2026-03-14T09:00:00Z"),
            session("s2", "2026-03-14T18:30:00Z"),
            session("s3", "2026-03-15"),
            session("s4", "not a date"),
        ];

        let filtered = filter_by_day(&sessions, Some(day("2026-03-14")));
        let ids: Vec<&str> = filtered.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);

        // No selection shows everything, including the unparseable entry.
        assert_eq!(filter_by_day(&sessions, None).len(), 4);
    }

    #[test]
    fn month_grid_pads_to_whole_weeks() {
        // 2000-01-01 was a Saturday: six leading blanks, Sunday start.
        let cells = month_grid(2000, 1);

        assert_eq!(cells.len(), 42);
        assert_eq!(cells[6], Some(day("2000-01-01")));
        assert!(cells[..6].iter().all(Option::is_none));
        assert_eq!(cells[36], Some(day("2000-01-31")));
    }

    #[test]
    fn month_navigation_wraps_year_boundaries() {
        assert_eq!(prev_month(day("2026-01-15")), day("2025-12-01"));
        assert_eq!(next_month(day("2025-12-31")), day("2026-01-01"));
        assert_eq!(next_month(day("2026-03-14")), day("2026-04-01"));
    }
}
