//! Core domain logic for QuickNote.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId};
pub use repo::note_repo::{NoteRepository, NoteStore, RepoError, RepoResult};
pub use service::note_service::{NoteService, NoteServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
