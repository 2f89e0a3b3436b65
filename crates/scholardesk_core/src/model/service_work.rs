//! Committee and service role records.

use serde::{Deserialize, Serialize};

use crate::model::{Record, RecordId};

/// Scope of a service commitment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    Department,
    University,
    Professional,
    Community,
}

/// One standing service commitment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceRole {
    pub id: RecordId,
    pub title: String,
    pub organization: String,
    #[serde(rename = "type")]
    pub kind: ServiceType,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub hours_per_month: u32,
    pub notes: String,
    pub created_at: String,
}

impl Record for ServiceRole {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
    }
}
