//! Dashboard derivation: groupings, active subsets, summary counts.
//!
//! # Responsibility
//! - Partition papers into ordered pipeline stages.
//! - Apply the per-kind "active" predicates.
//! - Produce the stat-card summary in one pass.
//!
//! # Invariants
//! - Everything here is a pure function of the snapshot; no hidden
//!   state, recomputed on every call.
//! - Derivation never fails: partial or oddly filled records degrade to
//!   absent values instead of errors.

use crate::model::conference::Conference;
use crate::model::funding::{Grant, GrantStatus};
use crate::model::people::Student;
use crate::model::research::{Paper, PaperStage};
use crate::model::review::PeerReview;
use crate::model::teaching::Course;
use crate::model::DashboardData;

/// Pipeline stages in display order. `Published` is terminal and
/// intentionally absent.
pub const PIPELINE_STAGES: [PaperStage; 7] = [
    PaperStage::Idea,
    PaperStage::Drafting,
    PaperStage::InternalReview,
    PaperStage::Submitted,
    PaperStage::UnderReview,
    PaperStage::ReviseResubmit,
    PaperStage::Accepted,
];

/// Papers of one pipeline stage, insertion order preserved.
///
/// An empty member list is a valid group; `papers_by_stage` simply omits
/// empty groups from its output.
#[derive(Debug, Clone, PartialEq)]
pub struct StageGroup {
    pub stage: PaperStage,
    pub papers: Vec<Paper>,
}

/// Papers still moving through the pipeline.
pub fn pipeline_papers(papers: &[Paper]) -> Vec<Paper> {
    papers.iter().filter(|p| p.in_pipeline()).cloned().collect()
}

/// Pipeline papers grouped by stage, stages in fixed order, empty
/// stages omitted.
pub fn papers_by_stage(papers: &[Paper]) -> Vec<StageGroup> {
    PIPELINE_STAGES
        .iter()
        .filter_map(|stage| {
            let members: Vec<Paper> = papers
                .iter()
                .filter(|p| p.in_pipeline() && p.stage == *stage)
                .cloned()
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(StageGroup {
                    stage: *stage,
                    papers: members,
                })
            }
        })
        .collect()
}

/// One-line stage breakdown, e.g. "2 drafting, 1 under review".
///
/// Empty when no papers are in the pipeline.
pub fn pipeline_stage_summary(papers: &[Paper]) -> String {
    papers_by_stage(papers)
        .iter()
        .map(|group| {
            format!(
                "{} {}",
                group.papers.len(),
                group.stage.label().to_lowercase()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn active_courses(courses: &[Course]) -> Vec<Course> {
    courses.iter().filter(|c| c.is_active).cloned().collect()
}

pub fn funded_grants(grants: &[Grant]) -> Vec<Grant> {
    grants
        .iter()
        .filter(|g| g.status == GrantStatus::Funded)
        .cloned()
        .collect()
}

/// Grants worth showing in the summary pane: everything not yet closed
/// out as completed or declined.
pub fn current_grants(grants: &[Grant]) -> Vec<Grant> {
    grants
        .iter()
        .filter(|g| !matches!(g.status, GrantStatus::Completed | GrantStatus::Declined))
        .cloned()
        .collect()
}

/// Grants whose submission deadline still matters.
pub fn open_grants(grants: &[Grant]) -> Vec<Grant> {
    grants.iter().filter(|g| g.status.is_open()).cloned().collect()
}

pub fn pending_reviews(reviews: &[PeerReview]) -> Vec<PeerReview> {
    reviews.iter().filter(|r| r.is_pending()).cloned().collect()
}

pub fn active_students(students: &[Student]) -> Vec<Student> {
    students.iter().filter(|s| s.is_active()).cloned().collect()
}

pub fn upcoming_conferences(conferences: &[Conference]) -> Vec<Conference> {
    conferences
        .iter()
        .filter(|c| c.is_upcoming())
        .cloned()
        .collect()
}

/// Sum of awarded amounts across funded grants. Zero when none.
pub fn total_funded_amount(grants: &[Grant]) -> f64 {
    grants
        .iter()
        .filter(|g| g.status == GrantStatus::Funded)
        .map(|g| g.amount)
        .sum()
}

/// Stat-card counts across all modules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub papers_in_pipeline: usize,
    /// Stage breakdown line; empty when the pipeline is empty.
    pub pipeline_stages: String,
    pub active_courses: usize,
    pub funded_grants: usize,
    pub total_funded_amount: f64,
    pub pending_reviews: usize,
    pub active_students: usize,
    pub upcoming_conferences: usize,
}

/// Computes the full stat-card row from one snapshot.
pub fn summarize(data: &DashboardData) -> DashboardSummary {
    DashboardSummary {
        papers_in_pipeline: pipeline_papers(&data.papers).len(),
        pipeline_stages: pipeline_stage_summary(&data.papers),
        active_courses: active_courses(&data.courses).len(),
        funded_grants: funded_grants(&data.grants).len(),
        total_funded_amount: total_funded_amount(&data.grants),
        pending_reviews: pending_reviews(&data.peer_reviews).len(),
        active_students: active_students(&data.students).len(),
        upcoming_conferences: upcoming_conferences(&data.conferences).len(),
    }
}
