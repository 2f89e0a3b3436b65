//! Cross-module deadline timeline.
//!
//! # Responsibility
//! - Project date-bearing records from reviews, conferences and grants
//!   into one normalized, sorted item shape.
//!
//! # Invariants
//! - Discovery order is deterministic: reviews, then conferences
//!   (submission before registration per record), then grants; the date
//!   sort is stable, so equal dates keep that order.
//! - Records with an empty or unparseable date contribute nothing; many
//!   records legitimately have no deadline yet.
//! - `is_overdue` is advisory for display only; overdue items stay in
//!   the timeline until the underlying record is resolved or deleted.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::model::{DashboardData, RecordId};
use crate::service::dashboard::{pending_reviews, upcoming_conferences};

/// Source module of one timeline item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineModule {
    Review,
    Conference,
    Grant,
}

impl DeadlineModule {
    pub fn label(self) -> &'static str {
        match self {
            Self::Review => "Peer Review",
            Self::Conference => "Conference",
            Self::Grant => "Grant",
        }
    }
}

/// One ephemeral timeline entry; rebuilt on every aggregation pass and
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineItem {
    /// Synthetic key combining module, deadline sub-kind and source id,
    /// so two deadlines of one conference stay distinguishable.
    pub key: String,
    pub reference_id: RecordId,
    pub module: DeadlineModule,
    pub date: NaiveDate,
    /// The raw stored date string, kept for display formatting.
    pub date_str: String,
    pub label: String,
    pub detail: String,
    pub is_overdue: bool,
}

/// Parses a stored date string: plain calendar dates first, full
/// ISO-8601 stamps as a fallback. Empty and malformed input is `None`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|stamp| stamp.date_naive())
}

/// A calendar date reads as overdue once its day has begun relative to
/// `now`; the stored strings carry no time of day.
fn overdue(date: NaiveDate, now: DateTime<Utc>) -> bool {
    date.and_time(NaiveTime::MIN) < now.naive_utc()
}

/// Builds the merged timeline, sorted ascending by calendar date.
pub fn upcoming_deadlines(data: &DashboardData, now: DateTime<Utc>) -> Vec<DeadlineItem> {
    let mut items = Vec::new();

    for review in pending_reviews(&data.peer_reviews) {
        if let Some(date) = parse_iso_date(&review.due_date) {
            let label = if review.manuscript_title.is_empty() {
                "Untitled manuscript".to_string()
            } else {
                review.manuscript_title.clone()
            };
            items.push(DeadlineItem {
                key: format!("review-{}", review.id),
                reference_id: review.id,
                module: DeadlineModule::Review,
                date,
                date_str: review.due_date.clone(),
                label,
                detail: review.journal.clone(),
                is_overdue: overdue(date, now),
            });
        }
    }

    for conf in upcoming_conferences(&data.conferences) {
        if let Some(date) = parse_iso_date(&conf.submission_deadline) {
            items.push(DeadlineItem {
                key: format!("conf-sub-{}", conf.id),
                reference_id: conf.id,
                module: DeadlineModule::Conference,
                date,
                date_str: conf.submission_deadline.clone(),
                label: format!("{} - Submission", conf.name),
                detail: conf.presentation_title.clone(),
                is_overdue: overdue(date, now),
            });
        }
        if let Some(date) = parse_iso_date(&conf.registration_deadline) {
            items.push(DeadlineItem {
                key: format!("conf-reg-{}", conf.id),
                reference_id: conf.id,
                module: DeadlineModule::Conference,
                date,
                date_str: conf.registration_deadline.clone(),
                label: format!("{} - Registration", conf.name),
                detail: String::new(),
                is_overdue: overdue(date, now),
            });
        }
    }

    for grant in &data.grants {
        if !grant.status.is_open() {
            continue;
        }
        if let Some(date) = parse_iso_date(&grant.submission_deadline) {
            items.push(DeadlineItem {
                key: format!("grant-{}", grant.id),
                reference_id: grant.id,
                module: DeadlineModule::Grant,
                date,
                date_str: grant.submission_deadline.clone(),
                label: grant.title.clone(),
                detail: grant.agency.clone(),
                is_overdue: overdue(date, now),
            });
        }
    }

    // Stable sort: ties keep discovery order.
    items.sort_by_key(|item| item.date);
    items
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::{overdue, parse_iso_date};

    #[test]
    fn parse_accepts_calendar_dates_and_full_stamps() {
        assert_eq!(
            parse_iso_date("2025-01-05"),
            NaiveDate::from_ymd_opt(2025, 1, 5)
        );
        assert_eq!(
            parse_iso_date("2025-01-05T09:30:00Z"),
            NaiveDate::from_ymd_opt(2025, 1, 5)
        );
    }

    #[test]
    fn parse_rejects_empty_and_garbage() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("   "), None);
        assert_eq!(parse_iso_date("next Tuesday"), None);
    }

    #[test]
    fn same_day_reads_as_overdue_once_the_day_began() {
        let noon = Utc.with_ymd_and_hms(2025, 1, 12, 12, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();

        assert!(overdue(today, noon));
        assert!(!overdue(tomorrow, noon));
    }
}
