//! Core domain logic for ScholarDesk.
//! This crate is the single source of truth for persistence and
//! derivation invariants; rendering layers only consume its contracts.

pub mod context;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use context::DashboardContext;
pub use logging::{default_log_level, init_logging};
pub use model::conference::{Conference, ConferenceStatus};
pub use model::files::{FolderModule, LinkedFolder, TrackedFile};
pub use model::funding::{Grant, GrantStatus};
pub use model::people::{Student, StudentLevel, StudentStatus};
pub use model::research::{Paper, PaperStage};
pub use model::review::{EditorialRole, PeerReview, ReviewStatus};
pub use model::service_work::{ServiceRole, ServiceType};
pub use model::settings::{
    AccentColor, AiProvider, DashboardPane, ScholarStats, Theme, UserSettings,
};
pub use model::teaching::{Course, Semester};
pub use model::{DashboardData, Priority, Record, RecordId};
pub use repo::collection::CollectionStore;
pub use repo::settings_repo::SettingsStore;
pub use service::dashboard::{summarize, DashboardSummary, StageGroup, PIPELINE_STAGES};
pub use service::deadline::{upcoming_deadlines, DeadlineItem, DeadlineModule};
pub use service::import::{extract, ImportOutcome};
pub use service::scholar::{HttpStatsFetcher, RefreshOutcome, ScholarRefresher, StatsFetcher};
pub use store::{
    open_store, open_store_in_memory, BackingError, BackingStore, MemoryBackingStore,
    PersistedCell, SqliteBackingStore, StoreError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
