//! Course records for the teaching module.

use serde::{Deserialize, Serialize};

use crate::model::{Record, RecordId};

/// Academic term. Serialized capitalized, matching persisted data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    #[default]
    Fall,
    Spring,
    Summer,
}

/// One course offering, current or historical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    pub code: String,
    pub semester: Semester,
    pub year: u32,
    pub enrollment: u32,
    /// Meeting pattern, e.g. "MWF 10:00-10:50".
    pub schedule: String,
    pub location: String,
    pub office_hours: String,
    pub ta_name: String,
    pub notes: String,
    pub is_active: bool,
    pub created_at: String,
}

impl Record for Course {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
    }
}
