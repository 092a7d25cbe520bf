//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record rendered by list/edit screens.
//! - Define the editable field set (`NoteDraft`) submitted by edit screens.
//!
//! # Invariants
//! - `id` is generated once and never reassigned for the note lifetime.
//! - `image_reference` is an opaque handle; core never reads image bytes.
//! - Applying a draft overwrites every mutable field, `is_important` included.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Editable note fields as submitted by an edit screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Plain UTF-8 text. May be empty.
    pub text: String,
    /// Opaque reference produced by the platform image picker.
    pub image_reference: Option<String>,
    /// Pinned notes are listed before all unpinned notes.
    pub is_important: bool,
}

impl NoteDraft {
    /// Creates an unpinned, image-less draft with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Attaches an image reference.
    pub fn with_image(mut self, reference: impl Into<String>) -> Self {
        self.image_reference = Some(reference.into());
        self
    }

    /// Sets the importance flag.
    pub fn important(mut self, is_important: bool) -> Self {
        self.is_important = is_important;
        self
    }
}

/// One user note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id used only for lookup/equality.
    pub id: NoteId,
    pub text: String,
    pub image_reference: Option<String>,
    pub is_important: bool,
}

impl Note {
    /// Creates a note with a generated stable ID.
    pub fn new(draft: NoteDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    pub(crate) fn with_id(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            text: draft.text,
            image_reference: draft.image_reference,
            is_important: draft.is_important,
        }
    }

    /// Overwrites all mutable fields in place. `id` is kept.
    pub fn apply(&mut self, draft: NoteDraft) {
        self.text = draft.text;
        self.image_reference = draft.image_reference;
        self.is_important = draft.is_important;
    }

    /// Returns whether this note is pinned to the top of the list.
    pub fn is_pinned(&self) -> bool {
        self.is_important
    }

    /// Copies the mutable fields, e.g. to seed an edit screen.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            text: self.text.clone(),
            image_reference: self.image_reference.clone(),
            is_important: self.is_important,
        }
    }
}
