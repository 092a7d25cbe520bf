//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection details out of service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) for unknown ids.
//! - Nothing is persisted; state lives only as long as the store value.

pub mod note_repo;
