//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicknote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quicknote_core::{CoreConfig, NoteDraft, NoteService, NoteStore};

fn main() {
    let config = CoreConfig::from_env();
    if let Err(err) = config.init_logging() {
        eprintln!("quicknote_core logging disabled: {err}");
    }

    println!("quicknote_core ping={}", quicknote_core::ping());
    println!("quicknote_core version={}", quicknote_core::core_version());

    let mut service = NoteService::new(NoteStore::new());
    service.create_note(NoteDraft::new("Buy milk"));
    service.create_note(NoteDraft::new("Pay rent").important(true));
    for note in service.list_notes() {
        let marker = if note.is_pinned() { "*" } else { "-" };
        println!("{marker} {}", note.text);
    }
    log::info!("event=cli_probe module=cli status=ok");
}
