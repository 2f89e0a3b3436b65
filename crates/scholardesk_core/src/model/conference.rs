//! Conference participation records.
//!
//! # Invariants
//! - `Attended` is terminal; every other status counts as upcoming.
//! - Submission and registration deadlines are independent fields and
//!   contribute independent timeline items.

use serde::{Deserialize, Serialize};

use crate::model::{Record, RecordId};

/// Conference participation lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConferenceStatus {
    #[default]
    Considering,
    AbstractSubmitted,
    Accepted,
    Registered,
    Attended,
}

/// One conference the academic considers, submits to, or attends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Conference {
    pub id: RecordId,
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub status: ConferenceStatus,
    pub presentation_title: String,
    /// "paper", "poster", "panel" or "invited".
    pub presentation_type: String,
    pub submission_deadline: String,
    pub registration_deadline: String,
    pub travel_booked: bool,
    pub notes: String,
    pub created_at: String,
}

impl Conference {
    /// Whether the conference has not been attended yet.
    pub fn is_upcoming(&self) -> bool {
        self.status != ConferenceStatus::Attended
    }
}

impl Record for Conference {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
    }
}
