use std::collections::HashSet;
use std::rc::Rc;
use std::thread::sleep;
use std::time::Duration;

use scholardesk_core::{
    CollectionStore, Grant, GrantStatus, MemoryBackingStore, Paper, PaperStage, Record,
};

fn paper_store() -> CollectionStore<Paper> {
    let store = CollectionStore::new(Rc::new(MemoryBackingStore::new()), "test-papers");
    store.hydrate();
    store
}

fn draft_paper(title: &str) -> Paper {
    Paper {
        title: title.to_string(),
        ..Paper::default()
    }
}

#[test]
fn add_assigns_identity_and_returns_stored_record() {
    let store = paper_store();

    let stored = store.add(draft_paper("Hydration-Safe Stores"));
    assert!(!stored.created_at.is_empty());
    assert_eq!(stored.created_at, stored.updated_at);

    let fetched = store.get(stored.id).expect("record should exist");
    assert_eq!(fetched, stored);
}

#[test]
fn add_always_yields_distinct_ids() {
    let store = paper_store();

    let mut seen = HashSet::new();
    for i in 0..50 {
        let record = store.add(draft_paper(&format!("paper {i}")));
        assert!(seen.insert(record.id), "id reused: {}", record.id);
    }
}

#[test]
fn list_preserves_insertion_order() {
    let store = paper_store();
    let a = store.add(draft_paper("a"));
    let b = store.add(draft_paper("b"));
    let c = store.add(draft_paper("c"));

    let titles: Vec<String> = store.list().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
    assert_eq!(
        store.list().iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![a.id, b.id, c.id]
    );
}

#[test]
fn update_touches_only_named_fields_and_refreshes_update_stamp() {
    let store = paper_store();
    let stored = store.add(draft_paper("draft"));

    sleep(Duration::from_millis(10));
    store.update(stored.id, |p| p.stage = PaperStage::Submitted);

    let updated = store.get(stored.id).unwrap();
    assert_eq!(updated.stage, PaperStage::Submitted);
    assert_eq!(updated.title, "draft");
    assert_eq!(updated.created_at, stored.created_at);
    assert_ne!(updated.updated_at, stored.updated_at);
}

#[test]
fn empty_update_still_refreshes_update_stamp() {
    let store = paper_store();
    let stored = store.add(draft_paper("untouched"));

    sleep(Duration::from_millis(10));
    store.update(stored.id, |_| {});

    let updated = store.get(stored.id).unwrap();
    assert_ne!(updated.updated_at, stored.updated_at);

    // Everything except the stamp is unchanged.
    let mut expected = stored.clone();
    expected.updated_at = updated.updated_at.clone();
    assert_eq!(updated, expected);
}

#[test]
fn update_against_missing_id_is_a_silent_noop() {
    let store = paper_store();
    let stored = store.add(draft_paper("only one"));

    store.update(scholardesk_core::RecordId::new_v4(), |p| {
        p.title = "should not land".to_string()
    });

    assert_eq!(store.list(), vec![stored]);
}

#[test]
fn delete_is_idempotent_and_leaves_unrelated_records_alone() {
    let store = paper_store();
    let keep_a = store.add(draft_paper("keep a"));
    let victim = store.add(draft_paper("victim"));
    let keep_b = store.add(draft_paper("keep b"));

    store.delete(victim.id);
    store.delete(victim.id);

    assert!(store.get(victim.id).is_none());
    assert_eq!(store.list(), vec![keep_a, keep_b]);
}

#[test]
fn kinds_without_update_stamp_keep_fields_stable_across_update() {
    let store: CollectionStore<Grant> =
        CollectionStore::new(Rc::new(MemoryBackingStore::new()), "test-grants");
    store.hydrate();

    let stored = store.add(Grant {
        title: "NSF Grant A".to_string(),
        amount: 250_000.0,
        ..Grant::default()
    });

    store.update(stored.id, |g| g.status = GrantStatus::Submitted);
    let updated = store.get(stored.id).unwrap();
    assert_eq!(updated.status, GrantStatus::Submitted);
    assert_eq!(updated.created_at, stored.created_at);
    assert_eq!(updated.amount, 250_000.0);
}

#[test]
fn crud_sequence_matches_reference_model() {
    let store = paper_store();
    let mut reference: Vec<Paper> = Vec::new();

    let a = store.add(draft_paper("a"));
    reference.push(a.clone());
    let b = store.add(draft_paper("b"));
    reference.push(b.clone());
    let c = store.add(draft_paper("c"));
    reference.push(c.clone());

    store.update(b.id, |p| p.priority = scholardesk_core::Priority::Urgent);
    if let Some(entry) = reference.iter_mut().find(|p| p.id() == b.id) {
        entry.priority = scholardesk_core::Priority::Urgent;
    }

    store.delete(a.id);
    reference.retain(|p| p.id() != a.id);

    store.update(c.id, |p| p.stage = PaperStage::Accepted);
    if let Some(entry) = reference.iter_mut().find(|p| p.id() == c.id) {
        entry.stage = PaperStage::Accepted;
    }

    let actual = store.list();
    assert_eq!(actual.len(), reference.len());
    for (actual, expected) in actual.iter().zip(&reference) {
        assert_eq!(actual.id, expected.id);
        assert_eq!(actual.title, expected.title);
        assert_eq!(actual.stage, expected.stage);
        assert_eq!(actual.priority, expected.priority);
        assert_eq!(actual.created_at, expected.created_at);
    }
}

#[test]
fn store_reports_unhydrated_until_hydrate_runs() {
    let store: CollectionStore<Paper> =
        CollectionStore::new(Rc::new(MemoryBackingStore::new()), "test-gate");
    assert!(!store.is_hydrated());

    store.hydrate();
    assert!(store.is_hydrated());
}
