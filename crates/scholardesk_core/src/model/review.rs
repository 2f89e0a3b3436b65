//! Peer review and editorial service records.
//!
//! # Invariants
//! - A review counts as pending work only while its status is
//!   `InProgress` or `Accepted`; declined and completed reviews never
//!   surface in pending views or the deadline timeline.

use serde::{Deserialize, Serialize};

use crate::model::files::TrackedFile;
use crate::model::{Record, RecordId};

/// Review invitation lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
    InProgress,
    Completed,
}

/// One manuscript review assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeerReview {
    pub id: RecordId,
    pub journal: String,
    pub manuscript_title: String,
    pub status: ReviewStatus,
    pub due_date: String,
    pub received_date: String,
    pub completed_date: String,
    pub notes: String,
    pub linked_files: Vec<TrackedFile>,
    pub created_at: String,
}

impl PeerReview {
    /// Whether the review still demands work.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, ReviewStatus::InProgress | ReviewStatus::Accepted)
    }
}

impl Record for PeerReview {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
    }
}

/// Standing editorial appointment, e.g. an editorial board seat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorialRole {
    pub id: RecordId,
    pub journal: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl Record for EditorialRole {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, _now: &str) {
        // Editorial roles persist no creation stamp.
        self.id = id;
    }
}
