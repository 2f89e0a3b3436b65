//! Advisee records for the students module.

use serde::{Deserialize, Serialize};

use crate::model::{Record, RecordId};

/// Program level of an advisee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudentLevel {
    #[default]
    Phd,
    Masters,
    Undergraduate,
    Postdoc,
}

/// Advising relationship state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudentStatus {
    #[default]
    Active,
    Graduated,
    OnLeave,
    Withdrawn,
}

/// One advisee or committee relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub level: StudentLevel,
    pub status: StudentStatus,
    pub program: String,
    pub dissertation_title: String,
    pub start_date: String,
    pub expected_graduation: String,
    /// Advisor's role on the committee: "chair", "member" or "reader".
    pub committee_role: String,
    pub notes: String,
    pub created_at: String,
}

impl Student {
    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }
}

impl Record for Student {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
    }
}
