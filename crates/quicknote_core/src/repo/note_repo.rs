//! Note repository contract and in-memory store.
//!
//! # Responsibility
//! - Own the ordered note collection for the lifetime of the process.
//! - Provide id-based CRUD plus the pinned-first list projection.
//!
//! # Invariants
//! - Note ids are unique within one store at all times.
//! - Storage order is insertion order; `update` never moves a note.
//! - `list_sorted` is a stable partition: pinned notes first, each group in
//!   insertion order.

use crate::model::note::{Note, NoteDraft, NoteId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for id-based note lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Appends a new note with a fresh unique id. Always succeeds.
    fn add(&mut self, draft: NoteDraft) -> Note;
    /// Overwrites mutable fields of an existing note in place.
    fn update(&mut self, id: NoteId, draft: NoteDraft) -> RepoResult<()>;
    /// Removes the note with the given id.
    fn delete(&mut self, id: NoteId) -> RepoResult<()>;
    /// Gets one note by id.
    fn find(&self, id: NoteId) -> Option<&Note>;
    /// Lists all notes, pinned first, insertion order within each group.
    fn list_sorted(&self) -> Vec<&Note>;
}

/// In-memory, order-preserving note collection.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Gets one note by id, signalling `NotFound` when absent.
    pub fn get(&self, id: NoteId) -> RepoResult<&Note> {
        self.find(id).ok_or(RepoError::NotFound(id))
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn contains(&self, id: NoteId) -> bool {
        self.position(id).is_some()
    }
}

impl NoteRepository for NoteStore {
    fn add(&mut self, draft: NoteDraft) -> Note {
        let mut note = Note::new(draft);
        while self.contains(note.id) {
            debug!("event=note_id_collision module=note_repo note_id={}", note.id);
            note = Note::new(note.to_draft());
        }
        self.notes.push(note.clone());
        note
    }

    fn update(&mut self, id: NoteId, draft: NoteDraft) -> RepoResult<()> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.notes[index].apply(draft);
        Ok(())
    }

    fn delete(&mut self, id: NoteId) -> RepoResult<()> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.notes.remove(index);
        Ok(())
    }

    fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn list_sorted(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        // `sort_by_key` is stable, so insertion order survives within groups.
        sorted.sort_by_key(|note| !note.is_important);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteRepository, NoteStore, RepoError};
    use crate::model::note::NoteDraft;
    use uuid::Uuid;

    #[test]
    fn update_keeps_storage_position() {
        let mut store = NoteStore::new();
        let first = store.add(NoteDraft::new("first"));
        let second = store.add(NoteDraft::new("second"));

        store
            .update(first.id, NoteDraft::new("first edited").important(true))
            .unwrap();

        let ids: Vec<_> = store.iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn get_reports_not_found_for_unknown_id() {
        let store = NoteStore::new();
        let missing = Uuid::new_v4();
        assert_eq!(store.get(missing).unwrap_err(), RepoError::NotFound(missing));
    }

    #[test]
    fn not_found_message_names_the_id() {
        let missing = Uuid::nil();
        let message = RepoError::NotFound(missing).to_string();
        assert!(message.contains(&missing.to_string()));
    }
}
