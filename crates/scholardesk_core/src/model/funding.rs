//! Grant and funding records.
//!
//! # Invariants
//! - `Funded` is the only status counted toward the funding total.
//! - Statuses in `GrantStatus::is_open` are the ones whose submission
//!   deadline still matters.

use serde::{Deserialize, Serialize};

use crate::model::files::TrackedFile;
use crate::model::{Record, RecordId};

/// Grant application lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrantStatus {
    #[default]
    Planning,
    Drafting,
    Submitted,
    UnderReview,
    Funded,
    Declined,
    Completed,
}

impl GrantStatus {
    /// Whether the application is still open and deadline-bearing.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            Self::Planning | Self::Drafting | Self::Submitted | Self::UnderReview
        )
    }
}

/// One tracked grant application or award.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grant {
    pub id: RecordId,
    pub title: String,
    pub agency: String,
    pub amount: f64,
    /// Investigator role, e.g. "PI" or "Co-PI".
    pub role: String,
    pub status: GrantStatus,
    pub submission_deadline: String,
    pub start_date: String,
    pub end_date: String,
    pub co_investigators: Vec<String>,
    pub notes: String,
    pub linked_files: Vec<TrackedFile>,
    pub created_at: String,
}

impl Record for Grant {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
    }
}
