use quicknote_core::{Note, NoteDraft};

#[test]
fn note_new_sets_defaults() {
    let note = Note::new(NoteDraft::default());

    assert!(!note.id.is_nil());
    assert_eq!(note.text, "");
    assert_eq!(note.image_reference, None);
    assert!(!note.is_important);
    assert!(!note.is_pinned());
}

#[test]
fn apply_overwrites_every_mutable_field_and_keeps_id() {
    let mut note = Note::new(NoteDraft::new("draft").with_image("content://media/1"));
    let id = note.id;

    note.apply(NoteDraft::new("final").important(true));

    assert_eq!(note.id, id);
    assert_eq!(note.text, "final");
    assert_eq!(note.image_reference, None);
    assert!(note.is_important);
}

#[test]
fn to_draft_copies_mutable_fields() {
    let note = Note::new(
        NoteDraft::new("Pay rent")
            .with_image("content://media/7")
            .important(true),
    );
    let draft = note.to_draft();

    assert_eq!(draft.text, "Pay rent");
    assert_eq!(draft.image_reference.as_deref(), Some("content://media/7"));
    assert!(draft.is_important);
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note = Note::new(NoteDraft::new("Buy milk").with_image("content://media/3"));

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note.id.to_string());
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["image_reference"], "content://media/3");
    assert_eq!(json["is_important"], false);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}
