//! Domain records tracked by the dashboard.
//!
//! # Responsibility
//! - Define one canonical record shape per tracked entity kind.
//! - Keep persisted field naming stable (camelCase keys, kebab-case enum
//!   values, ISO-8601 date strings).
//!
//! # Invariants
//! - Every record carries a stable `id` assigned at creation and never
//!   reused.
//! - `createdAt` is immutable after creation; `updatedAt`, where a kind
//!   carries it, is refreshed on every mutation.
//! - Every field defaults shallowly, so data persisted by older builds
//!   hydrates cleanly when new fields are introduced.

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod conference;
pub mod files;
pub mod funding;
pub mod people;
pub mod research;
pub mod review;
pub mod service_work;
pub mod settings;
pub mod teaching;

/// Stable identifier shared by all record kinds.
pub type RecordId = Uuid;

/// Shared urgency scale for manually prioritized records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Contract implemented by every persisted record kind.
///
/// Collections own identity assignment: domain code builds a draft with
/// default id/timestamps and the owning store stamps them on insert.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Stable record identifier.
    fn id(&self) -> RecordId;

    /// Stamps identity and creation time on insert.
    fn assign_identity(&mut self, id: RecordId, now: &str);

    /// Refreshes the update stamp for kinds that carry one.
    ///
    /// Default is a no-op; only kinds with an `updatedAt` field override.
    fn touch(&mut self, _now: &str) {}
}

/// Current wall-clock time as an ISO-8601 UTC string.
///
/// Millisecond precision with a `Z` suffix, matching the stamps already
/// present in persisted data.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One consistent snapshot of every collection, taken for derivation.
///
/// Derived views read this shape instead of the live stores, so a single
/// aggregation pass never observes a half-applied mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub papers: Vec<research::Paper>,
    pub courses: Vec<teaching::Course>,
    pub grants: Vec<funding::Grant>,
    pub peer_reviews: Vec<review::PeerReview>,
    pub editorial_roles: Vec<review::EditorialRole>,
    pub students: Vec<people::Student>,
    pub conferences: Vec<conference::Conference>,
    pub service_roles: Vec<service_work::ServiceRole>,
    pub linked_folders: Vec<files::LinkedFolder>,
}

#[cfg(test)]
mod tests {
    use super::now_iso;

    #[test]
    fn now_iso_is_utc_with_millis() {
        let stamp = now_iso();
        assert!(stamp.ends_with('Z'));
        assert!(stamp.contains('.'));
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
