use chrono::{TimeZone, Utc};

use scholardesk_core::service::dashboard::{
    active_courses, current_grants, funded_grants, pending_reviews, total_funded_amount,
};
use scholardesk_core::{
    summarize, upcoming_deadlines, Conference, ConferenceStatus, Course, DashboardData,
    DeadlineModule, Grant, GrantStatus, Paper, PaperStage, PeerReview, RecordId, ReviewStatus,
    Student, StudentStatus,
};

fn review(title: &str, status: ReviewStatus, due: &str) -> PeerReview {
    PeerReview {
        id: RecordId::new_v4(),
        journal: "Journal of Systems".to_string(),
        manuscript_title: title.to_string(),
        status,
        due_date: due.to_string(),
        ..PeerReview::default()
    }
}

fn grant(title: &str, status: GrantStatus, deadline: &str) -> Grant {
    Grant {
        id: RecordId::new_v4(),
        title: title.to_string(),
        agency: "NSF".to_string(),
        status,
        submission_deadline: deadline.to_string(),
        ..Grant::default()
    }
}

#[test]
fn timeline_merges_three_sources_in_date_order_with_overdue_flags() {
    let conference = Conference {
        id: RecordId::new_v4(),
        name: "SysConf".to_string(),
        status: ConferenceStatus::Considering,
        submission_deadline: "2025-01-05".to_string(),
        registration_deadline: "2025-01-20".to_string(),
        ..Conference::default()
    };

    let data = DashboardData {
        peer_reviews: vec![review("On Caching", ReviewStatus::InProgress, "2025-01-10")],
        conferences: vec![conference.clone()],
        grants: vec![grant("NSF Grant A", GrantStatus::Drafting, "2025-01-15")],
        ..DashboardData::default()
    };

    let now = Utc.with_ymd_and_hms(2025, 1, 12, 9, 0, 0).unwrap();
    let items = upcoming_deadlines(&data, now);

    assert_eq!(items.len(), 4);
    assert_eq!(items[0].key, format!("conf-sub-{}", conference.id));
    assert_eq!(items[0].label, "SysConf - Submission");
    assert_eq!(items[1].module, DeadlineModule::Review);
    assert_eq!(items[1].label, "On Caching");
    assert_eq!(items[2].label, "NSF Grant A");
    assert_eq!(items[2].detail, "NSF");
    assert_eq!(items[3].key, format!("conf-reg-{}", conference.id));
    assert_eq!(items[3].label, "SysConf - Registration");

    assert!(items[0].is_overdue);
    assert!(items[1].is_overdue);
    assert!(!items[2].is_overdue);
    assert!(!items[3].is_overdue);
}

#[test]
fn closed_grants_never_contribute_deadlines_even_future_ones() {
    let data = DashboardData {
        grants: vec![
            grant("closed out", GrantStatus::Completed, "2099-06-01"),
            grant("turned down", GrantStatus::Declined, "2099-06-01"),
            grant("still open", GrantStatus::Submitted, "2099-06-01"),
        ],
        ..DashboardData::default()
    };

    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let items = upcoming_deadlines(&data, now);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "still open");
}

#[test]
fn reviews_outside_the_pending_rule_contribute_nothing() {
    let data = DashboardData {
        peer_reviews: vec![
            review("invited only", ReviewStatus::Pending, "2025-02-01"),
            review("turned down", ReviewStatus::Declined, "2025-02-01"),
            review("wrapped up", ReviewStatus::Completed, "2025-02-01"),
            review("working on it", ReviewStatus::InProgress, "2025-02-01"),
            review("said yes", ReviewStatus::Accepted, "2025-02-03"),
        ],
        ..DashboardData::default()
    };

    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let items = upcoming_deadlines(&data, now);
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["working on it", "said yes"]);
}

#[test]
fn empty_and_unparseable_dates_are_silently_excluded() {
    let data = DashboardData {
        peer_reviews: vec![
            review("no deadline yet", ReviewStatus::InProgress, ""),
            review("scribbled", ReviewStatus::InProgress, "sometime soon"),
            review("dated", ReviewStatus::InProgress, "2025-03-01"),
        ],
        ..DashboardData::default()
    };

    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let items = upcoming_deadlines(&data, now);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "dated");
}

#[test]
fn equal_dates_keep_discovery_order() {
    // Reviews are discovered before grants; a date tie must not reorder.
    let data = DashboardData {
        peer_reviews: vec![review("tied review", ReviewStatus::Accepted, "2025-04-01")],
        grants: vec![grant("tied grant", GrantStatus::Planning, "2025-04-01")],
        ..DashboardData::default()
    };

    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let items = upcoming_deadlines(&data, now);
    assert_eq!(items[0].label, "tied review");
    assert_eq!(items[1].label, "tied grant");
}

#[test]
fn attended_conferences_contribute_no_deadlines() {
    let attended = Conference {
        id: RecordId::new_v4(),
        name: "LastYearConf".to_string(),
        status: ConferenceStatus::Attended,
        submission_deadline: "2099-01-05".to_string(),
        ..Conference::default()
    };

    let data = DashboardData {
        conferences: vec![attended],
        ..DashboardData::default()
    };

    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert!(upcoming_deadlines(&data, now).is_empty());
}

#[test]
fn funding_total_counts_funded_grants_only() {
    let grants = vec![
        Grant {
            amount: 150_000.0,
            status: GrantStatus::Funded,
            ..grant("a", GrantStatus::Funded, "")
        },
        Grant {
            amount: 50_000.0,
            status: GrantStatus::Funded,
            ..grant("b", GrantStatus::Funded, "")
        },
        Grant {
            amount: 1_000_000.0,
            status: GrantStatus::Submitted,
            ..grant("c", GrantStatus::Submitted, "")
        },
    ];

    assert_eq!(total_funded_amount(&grants), 200_000.0);
    assert_eq!(funded_grants(&grants).len(), 2);
    assert_eq!(total_funded_amount(&[]), 0.0);
}

#[test]
fn current_grants_exclude_terminal_states() {
    let grants = vec![
        grant("open", GrantStatus::UnderReview, ""),
        grant("won", GrantStatus::Funded, ""),
        grant("closed", GrantStatus::Completed, ""),
        grant("lost", GrantStatus::Declined, ""),
    ];

    let titles: Vec<String> = current_grants(&grants).into_iter().map(|g| g.title).collect();
    assert_eq!(titles, vec!["open", "won"]);
}

#[test]
fn summary_counts_reflect_all_active_predicates() {
    let data = DashboardData {
        papers: vec![
            Paper {
                stage: PaperStage::Drafting,
                ..Paper::default()
            },
            Paper {
                stage: PaperStage::Published,
                ..Paper::default()
            },
        ],
        courses: vec![
            Course {
                is_active: true,
                ..Course::default()
            },
            Course::default(),
        ],
        grants: vec![Grant {
            amount: 75_000.0,
            status: GrantStatus::Funded,
            ..Grant::default()
        }],
        peer_reviews: vec![review("r", ReviewStatus::InProgress, "")],
        students: vec![
            Student {
                status: StudentStatus::Active,
                ..Student::default()
            },
            Student {
                status: StudentStatus::Graduated,
                ..Student::default()
            },
        ],
        conferences: vec![Conference {
            status: ConferenceStatus::Registered,
            ..Conference::default()
        }],
        ..DashboardData::default()
    };

    let summary = summarize(&data);
    assert_eq!(summary.papers_in_pipeline, 1);
    assert_eq!(summary.pipeline_stages, "1 drafting");
    assert_eq!(summary.active_courses, 1);
    assert_eq!(summary.funded_grants, 1);
    assert_eq!(summary.total_funded_amount, 75_000.0);
    assert_eq!(summary.pending_reviews, 1);
    assert_eq!(summary.active_students, 1);
    assert_eq!(summary.upcoming_conferences, 1);

    assert_eq!(active_courses(&data.courses).len(), 1);
    assert_eq!(pending_reviews(&data.peer_reviews).len(), 1);
}
