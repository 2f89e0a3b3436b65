//! Application context: every store, constructed once, passed by
//! reference.
//!
//! # Responsibility
//! - Own the nine collection stores and the settings store over one
//!   shared backing medium.
//! - Provide the single hydration scheduling point and the consistent
//!   snapshot derived views read from.
//!
//! # Invariants
//! - One context per running application; there are no ambient
//!   singletons behind it.
//! - Each collection key is distinct; no two stores share a backing key.

use std::rc::Rc;

use crate::model::conference::Conference;
use crate::model::files::LinkedFolder;
use crate::model::funding::Grant;
use crate::model::people::Student;
use crate::model::research::Paper;
use crate::model::review::{EditorialRole, PeerReview};
use crate::model::service_work::ServiceRole;
use crate::model::teaching::Course;
use crate::model::DashboardData;
use crate::repo::collection::CollectionStore;
use crate::repo::settings_repo::SettingsStore;
use crate::store::BackingStore;

/// Backing key per persisted document, one namespace for the whole app.
mod keys {
    pub const PAPERS: &str = "academic-dashboard-papers";
    pub const COURSES: &str = "academic-dashboard-courses";
    pub const GRANTS: &str = "academic-dashboard-grants";
    pub const PEER_REVIEWS: &str = "academic-dashboard-peer-reviews";
    pub const EDITORIAL_ROLES: &str = "academic-dashboard-editorial-roles";
    pub const STUDENTS: &str = "academic-dashboard-students";
    pub const CONFERENCES: &str = "academic-dashboard-conferences";
    pub const SERVICE_ROLES: &str = "academic-dashboard-service-roles";
    pub const LINKED_FOLDERS: &str = "academic-dashboard-linked-folders";
    pub const SETTINGS: &str = "academic-dashboard-settings";
}

/// All stores of one running dashboard.
pub struct DashboardContext {
    pub papers: CollectionStore<Paper>,
    pub courses: CollectionStore<Course>,
    pub grants: CollectionStore<Grant>,
    pub peer_reviews: CollectionStore<PeerReview>,
    pub editorial_roles: CollectionStore<EditorialRole>,
    pub students: CollectionStore<Student>,
    pub conferences: CollectionStore<Conference>,
    pub service_roles: CollectionStore<ServiceRole>,
    pub linked_folders: CollectionStore<LinkedFolder>,
    pub settings: SettingsStore,
}

impl DashboardContext {
    /// Builds every store over one shared backing medium. Stores start
    /// unhydrated; call `hydrate` once at startup.
    pub fn new(backing: Rc<dyn BackingStore>) -> Self {
        Self {
            papers: CollectionStore::new(Rc::clone(&backing), keys::PAPERS),
            courses: CollectionStore::new(Rc::clone(&backing), keys::COURSES),
            grants: CollectionStore::new(Rc::clone(&backing), keys::GRANTS),
            peer_reviews: CollectionStore::new(Rc::clone(&backing), keys::PEER_REVIEWS),
            editorial_roles: CollectionStore::new(Rc::clone(&backing), keys::EDITORIAL_ROLES),
            students: CollectionStore::new(Rc::clone(&backing), keys::STUDENTS),
            conferences: CollectionStore::new(Rc::clone(&backing), keys::CONFERENCES),
            service_roles: CollectionStore::new(Rc::clone(&backing), keys::SERVICE_ROLES),
            linked_folders: CollectionStore::new(Rc::clone(&backing), keys::LINKED_FOLDERS),
            settings: SettingsStore::new(backing, keys::SETTINGS),
        }
    }

    /// Hydrates every cell. The one-time backing reads happen here, not
    /// lazily inside view computation.
    pub fn hydrate(&self) {
        self.papers.hydrate();
        self.courses.hydrate();
        self.grants.hydrate();
        self.peer_reviews.hydrate();
        self.editorial_roles.hydrate();
        self.students.hydrate();
        self.conferences.hydrate();
        self.service_roles.hydrate();
        self.linked_folders.hydrate();
        self.settings.hydrate();
    }

    /// Whether every store has completed its one-time backing read.
    pub fn is_hydrated(&self) -> bool {
        self.papers.is_hydrated()
            && self.courses.is_hydrated()
            && self.grants.is_hydrated()
            && self.peer_reviews.is_hydrated()
            && self.editorial_roles.is_hydrated()
            && self.students.is_hydrated()
            && self.conferences.is_hydrated()
            && self.service_roles.is_hydrated()
            && self.linked_folders.is_hydrated()
            && self.settings.is_hydrated()
    }

    /// One consistent snapshot of every collection for derivation.
    pub fn snapshot(&self) -> DashboardData {
        DashboardData {
            papers: self.papers.list(),
            courses: self.courses.list(),
            grants: self.grants.list(),
            peer_reviews: self.peer_reviews.list(),
            editorial_roles: self.editorial_roles.list(),
            students: self.students.list(),
            conferences: self.conferences.list(),
            service_roles: self.service_roles.list(),
            linked_folders: self.linked_folders.list(),
        }
    }
}
