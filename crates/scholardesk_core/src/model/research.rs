//! Manuscript pipeline records.
//!
//! # Responsibility
//! - Define the `Paper` record and its pipeline stage enumeration.
//!
//! # Invariants
//! - `Published` is the terminal stage and is excluded from active
//!   pipeline views.
//! - `updatedAt` is refreshed by the owning store on every mutation.

use serde::{Deserialize, Serialize};

use crate::model::files::TrackedFile;
use crate::model::{Priority, Record, RecordId};

/// Fixed ordered lifecycle of a manuscript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperStage {
    #[default]
    Idea,
    Drafting,
    InternalReview,
    Submitted,
    UnderReview,
    ReviseResubmit,
    Accepted,
    Published,
}

impl PaperStage {
    /// Human-readable stage label used by summary lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idea => "Idea",
            Self::Drafting => "Drafting",
            Self::InternalReview => "Internal Review",
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::ReviseResubmit => "Revise & Resubmit",
            Self::Accepted => "Accepted",
            Self::Published => "Published",
        }
    }
}

/// One tracked manuscript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paper {
    pub id: RecordId,
    pub title: String,
    /// Serialized as `abstract`; renamed because of the Rust keyword.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub co_authors: Vec<String>,
    pub stage: PaperStage,
    pub target_journal: String,
    /// ISO date string; may be empty until submission.
    pub submission_date: String,
    pub decision_date: String,
    pub notes: String,
    pub priority: Priority,
    pub linked_files: Vec<TrackedFile>,
    pub created_at: String,
    pub updated_at: String,
}

impl Paper {
    /// Whether this paper belongs to the active pipeline.
    pub fn in_pipeline(&self) -> bool {
        self.stage != PaperStage::Published
    }
}

impl Record for Paper {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
        self.updated_at = now.to_string();
    }

    fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }
}
