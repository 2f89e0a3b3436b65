//! Linked folder and file-reference records.
//!
//! # Invariants
//! - `TrackedFile` entries are metadata pointers only; the referenced
//!   bytes are owned entirely outside this system.

use serde::{Deserialize, Serialize};

use crate::model::{Record, RecordId};

/// Module a linked folder is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FolderModule {
    #[default]
    Papers,
    Reviews,
    Grants,
    Teaching,
    Conferences,
}

/// Lightweight descriptor of an externally owned file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackedFile {
    pub name: String,
    /// Size in bytes as reported at link time.
    pub size: u64,
    /// Unix epoch milliseconds.
    pub last_modified: i64,
    /// MIME type, e.g. "application/pdf".
    #[serde(rename = "type")]
    pub media_type: String,
}

/// One user-labeled folder reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedFolder {
    pub id: RecordId,
    /// User-friendly label, e.g. "Review PDFs".
    pub name: String,
    pub module: FolderModule,
    /// Display path from the directory picker.
    pub path: String,
    pub notes: String,
    pub created_at: String,
}

impl Record for LinkedFolder {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_identity(&mut self, id: RecordId, now: &str) {
        self.id = id;
        self.created_at = now.to_string();
    }
}
