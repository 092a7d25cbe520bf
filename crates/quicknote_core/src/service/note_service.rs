//! Note use-case service.
//!
//! # Responsibility
//! - Provide edit-screen level create/update/save/delete/get/list APIs.
//! - Supply the text payload handed to the platform share action.
//! - Emit metadata-only diagnostic events for every mutation.
//!
//! # Invariants
//! - `update_note` uses full field replacement semantics.
//! - Note list is always pinned-first, insertion order within each group.
//! - Note text never appears in log output.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Target note has no shareable text.
    NothingToShare(NoteId),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::NothingToShare(id) => write!(f, "note has no text to share: {id}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository + Default> Default for NoteService<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Creates one note from an edit-screen draft.
    pub fn create_note(&mut self, draft: NoteDraft) -> Note {
        let note = self.repo.add(draft);
        info!(
            "event=note_create module=note_service status=ok note_id={} important={} has_image={}",
            note.id,
            note.is_important,
            note.image_reference.is_some()
        );
        note
    }

    /// Replaces all mutable fields of one note and returns the read-back.
    pub fn update_note(
        &mut self,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, NoteServiceError> {
        if let Err(err) = self.repo.update(id, draft) {
            warn!("event=note_update module=note_service status=not_found note_id={id}");
            return Err(err.into());
        }
        let note = self
            .repo
            .find(id)
            .cloned()
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))?;
        info!(
            "event=note_update module=note_service status=ok note_id={} important={} has_image={}",
            note.id,
            note.is_important,
            note.image_reference.is_some()
        );
        Ok(note)
    }

    /// Edit-screen "Save": creates when `id` is `None`, updates otherwise.
    pub fn save_note(
        &mut self,
        id: Option<NoteId>,
        draft: NoteDraft,
    ) -> Result<Note, NoteServiceError> {
        match id {
            Some(id) => self.update_note(id, draft),
            None => Ok(self.create_note(draft)),
        }
    }

    /// Deletes one note by stable ID.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        match self.repo.delete(id) {
            Ok(()) => {
                info!("event=note_delete module=note_service status=ok note_id={id}");
                Ok(())
            }
            Err(err) => {
                warn!("event=note_delete module=note_service status=not_found note_id={id}");
                Err(err.into())
            }
        }
    }

    /// Gets one note by stable ID.
    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.repo.find(id).cloned()
    }

    /// Lists all notes, pinned first.
    pub fn list_notes(&self) -> Vec<Note> {
        let items: Vec<Note> = self.repo.list_sorted().into_iter().cloned().collect();
        debug!(
            "event=notes_list module=note_service status=ok count={}",
            items.len()
        );
        items
    }

    /// Returns the text handed to the platform share action.
    pub fn share_text(&self, id: NoteId) -> Result<String, NoteServiceError> {
        let note = self.repo.find(id).ok_or(NoteServiceError::NoteNotFound(id))?;
        if note.text.trim().is_empty() {
            return Err(NoteServiceError::NothingToShare(id));
        }
        Ok(note.text.clone())
    }

    /// Pins or unpins one note, keeping its other fields.
    pub fn set_important(
        &mut self,
        id: NoteId,
        is_important: bool,
    ) -> Result<Note, NoteServiceError> {
        let draft = self.current_draft(id)?.important(is_important);
        self.update_note(id, draft)
    }

    /// Attaches, replaces or clears the image reference of one note.
    pub fn set_image(
        &mut self,
        id: NoteId,
        image_reference: Option<String>,
    ) -> Result<Note, NoteServiceError> {
        let mut draft = self.current_draft(id)?;
        draft.image_reference = image_reference;
        self.update_note(id, draft)
    }

    fn current_draft(&self, id: NoteId) -> Result<NoteDraft, NoteServiceError> {
        self.repo
            .find(id)
            .map(Note::to_draft)
            .ok_or(NoteServiceError::NoteNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteService, NoteServiceError};
    use crate::model::note::NoteDraft;
    use crate::repo::note_repo::NoteStore;

    #[test]
    fn share_text_rejects_blank_text() {
        let mut service = NoteService::new(NoteStore::new());
        let note = service.create_note(NoteDraft::new("   "));
        let err = service.share_text(note.id).unwrap_err();
        assert_eq!(err, NoteServiceError::NothingToShare(note.id));
    }

    #[test]
    fn share_text_returns_raw_text() {
        let mut service = NoteService::new(NoteStore::new());
        let note = service.create_note(NoteDraft::new("  Pay rent\n"));
        assert_eq!(service.share_text(note.id).unwrap(), "  Pay rent\n");
    }
}
