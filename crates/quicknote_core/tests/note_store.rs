use quicknote_core::{NoteDraft, NoteRepository, NoteStore, RepoError};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn added_ids_are_pairwise_distinct() {
    let mut store = NoteStore::new();
    let ids: HashSet<_> = (0..500)
        .map(|idx| store.add(NoteDraft::new(format!("note {idx}"))).id)
        .collect();

    assert_eq!(ids.len(), 500);
    assert_eq!(store.len(), 500);
}

#[test]
fn add_appends_in_insertion_order() {
    let mut store = NoteStore::new();
    assert!(store.is_empty());
    let first = store.add(NoteDraft::new("first"));
    let second = store.add(NoteDraft::new("second"));

    let texts: Vec<_> = store.iter().map(|note| note.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(store.find(first.id), Some(&first));
    assert_eq!(store.find(second.id), Some(&second));
}

#[test]
fn important_note_is_listed_first() {
    let mut store = NoteStore::new();
    let a = store.add(NoteDraft::new("Buy milk"));
    let b = store.add(NoteDraft::new("Pay rent").important(true));

    let listed: Vec<_> = store.list_sorted().into_iter().map(|note| note.id).collect();
    assert_eq!(listed, vec![b.id, a.id]);
}

#[test]
fn list_sorted_is_stable_within_each_group() {
    let mut store = NoteStore::new();
    let plain_1 = store.add(NoteDraft::new("p1"));
    let pinned_1 = store.add(NoteDraft::new("i1").important(true));
    let plain_2 = store.add(NoteDraft::new("p2"));
    let pinned_2 = store.add(NoteDraft::new("i2").important(true));
    let plain_3 = store.add(NoteDraft::new("p3"));

    let listed: Vec<_> = store.list_sorted().into_iter().map(|note| note.id).collect();
    assert_eq!(
        listed,
        vec![pinned_1.id, pinned_2.id, plain_1.id, plain_2.id, plain_3.id]
    );
}

#[test]
fn update_then_find_returns_new_values() {
    let mut store = NoteStore::new();
    let a = store.add(NoteDraft::new("Buy milk"));
    let b = store.add(NoteDraft::new("Pay rent"));

    store
        .update(a.id, NoteDraft::new("Buy milk and eggs"))
        .unwrap();

    let found = store.find(a.id).unwrap();
    assert_eq!(found.id, a.id);
    assert_eq!(found.text, "Buy milk and eggs");
    assert_eq!(store.find(b.id).unwrap().text, "Pay rent");
}

#[test]
fn update_applies_importance_and_image() {
    let mut store = NoteStore::new();
    let plain = store.add(NoteDraft::new("plain"));
    let target = store.add(NoteDraft::new("target"));

    store
        .update(
            target.id,
            NoteDraft::new("target")
                .with_image("content://media/9")
                .important(true),
        )
        .unwrap();

    let found = store.find(target.id).unwrap();
    assert!(found.is_important);
    assert_eq!(found.image_reference.as_deref(), Some("content://media/9"));

    let listed: Vec<_> = store.list_sorted().into_iter().map(|note| note.id).collect();
    assert_eq!(listed, vec![target.id, plain.id]);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let mut store = NoteStore::new();
    store.add(NoteDraft::new("kept"));
    let missing = Uuid::new_v4();

    let err = store.update(missing, NoteDraft::new("x")).unwrap_err();
    assert_eq!(err, RepoError::NotFound(missing));
    assert_eq!(store.iter().next().unwrap().text, "kept");
}

#[test]
fn delete_removes_note_and_second_delete_is_not_found() {
    let mut store = NoteStore::new();
    let a = store.add(NoteDraft::new("Buy milk"));

    store.delete(a.id).unwrap();
    assert!(store.find(a.id).is_none());
    assert!(store.is_empty());

    let err = store.delete(a.id).unwrap_err();
    assert_eq!(err, RepoError::NotFound(a.id));
}

#[test]
fn delete_keeps_order_of_remaining_notes() {
    let mut store = NoteStore::new();
    let a = store.add(NoteDraft::new("a"));
    let b = store.add(NoteDraft::new("b"));
    let c = store.add(NoteDraft::new("c"));

    store.delete(b.id).unwrap();

    let ids: Vec<_> = store.iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
}
