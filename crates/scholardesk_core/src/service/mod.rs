//! Derivation and collaborator services.
//!
//! # Responsibility
//! - Derive dashboard views from collection snapshots (pure, recomputed
//!   on every read).
//! - Host the import and citation-refresh collaborators, which only ever
//!   touch the public store contracts.

pub mod dashboard;
pub mod deadline;
pub mod import;
pub mod scholar;
