//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level note functions to Dart via FRB.
//! - Hold the single process-wide note store used by list/edit screens.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Note ids cross the boundary as canonical UUID strings.
//! - Each call holds the store lock for its whole duration.

use once_cell::sync::Lazy;
use quicknote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Note, NoteDraft, NoteId, NoteService, NoteStore,
};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

static NOTE_SERVICE: Lazy<Mutex<NoteService<NoteStore>>> =
    Lazy::new(|| Mutex::new(NoteService::default()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note item shape rendered by list/edit screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable note ID in string form.
    pub note_id: String,
    pub text: String,
    pub image_reference: Option<String>,
    pub is_important: bool,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        Self {
            note_id: note.id.to_string(),
            text: note.text,
            image_reference: note.image_reference,
            is_important: note.is_important,
        }
    }
}

/// Single-note response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteResponse {
    pub ok: bool,
    /// Note read-back on success.
    pub note: Option<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteResponse {
    fn success(message: impl Into<String>, note: Note) -> Self {
        Self {
            ok: true,
            note: Some(note.into()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note: None,
            message: message.into(),
        }
    }
}

/// List response envelope, items already pinned-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    pub items: Vec<NoteItem>,
    pub message: String,
}

/// Generic action response envelope for calls without a note payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    pub ok: bool,
    /// Share text on `note_share_text` success, otherwise a status message.
    pub message: String,
}

/// Creates a note from the edit screen.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; always succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn note_create(
    text: String,
    image_reference: Option<String>,
    is_important: bool,
) -> NoteResponse {
    let draft = to_draft(text, image_reference, is_important);
    let note = lock_service().create_note(draft);
    NoteResponse::success("Note created.", note)
}

/// Replaces all editable fields of an existing note.
///
/// # FFI contract
/// - Returns `ok=false` for malformed or unknown `note_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_update(
    note_id: String,
    text: String,
    image_reference: Option<String>,
    is_important: bool,
) -> NoteResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteResponse::failure(format!("note_update failed: {message}")),
    };
    let draft = to_draft(text, image_reference, is_important);
    match lock_service().update_note(id, draft) {
        Ok(note) => NoteResponse::success("Note updated.", note),
        Err(err) => NoteResponse::failure(format!("note_update failed: {err}")),
    }
}

/// Deletes one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(note_id: String) -> NoteActionResponse {
    let result = parse_note_id(&note_id)
        .and_then(|id| lock_service().delete_note(id).map_err(|err| err.to_string()));
    match result {
        Ok(()) => NoteActionResponse {
            ok: true,
            message: "Note deleted.".to_string(),
        },
        Err(message) => NoteActionResponse {
            ok: false,
            message: format!("note_delete failed: {message}"),
        },
    }
}

/// Gets one note for the edit screen.
#[flutter_rust_bridge::frb(sync)]
pub fn note_get(note_id: String) -> NoteResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteResponse::failure(format!("note_get failed: {message}")),
    };
    match lock_service().get_note(id) {
        Some(note) => NoteResponse::success("Note found.", note),
        None => NoteResponse::failure(format!("note_get failed: note not found: {id}")),
    }
}

/// Lists all notes, pinned first.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesListResponse {
    let items: Vec<NoteItem> = lock_service()
        .list_notes()
        .into_iter()
        .map(NoteItem::from)
        .collect();
    let message = if items.is_empty() {
        "No notes.".to_string()
    } else {
        format!("Found {} note(s).", items.len())
    };
    NotesListResponse { items, message }
}

/// Returns the text the host passes to the platform share sheet.
///
/// # FFI contract
/// - On success `message` carries the raw note text.
#[flutter_rust_bridge::frb(sync)]
pub fn note_share_text(note_id: String) -> NoteActionResponse {
    let result = parse_note_id(&note_id)
        .and_then(|id| lock_service().share_text(id).map_err(|err| err.to_string()));
    match result {
        Ok(text) => NoteActionResponse {
            ok: true,
            message: text,
        },
        Err(message) => NoteActionResponse {
            ok: false,
            message: format!("note_share_text failed: {message}"),
        },
    }
}

fn to_draft(text: String, image_reference: Option<String>, is_important: bool) -> NoteDraft {
    NoteDraft {
        text,
        image_reference: image_reference.filter(|value| !value.trim().is_empty()),
        is_important,
    }
}

fn parse_note_id(raw: &str) -> Result<NoteId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid note_id `{raw}`"))
}

fn lock_service() -> MutexGuard<'static, NoteService<NoteStore>> {
    NOTE_SERVICE.lock().unwrap_or_else(|poisoned| {
        log::warn!("event=store_lock module=ffi status=recovered_poisoned");
        poisoned.into_inner()
    })
}
