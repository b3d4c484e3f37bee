//! Registry contract tests: shared mutation visibility, absent-id
//! semantics, and snapshot independence.

use gridboard::registry::LayoutRegistry;
use gridboard::types::{BlockEntry, BlockId};

fn seeded_registry(count: u64) -> LayoutRegistry {
    let registry = LayoutRegistry::new();
    for sequence in 1..=count {
        registry.put(
            BlockId::compose("block", sequence),
            BlockEntry::new((sequence as f32 * 10.0, 0.0), (100.0, 100.0)),
        );
    }
    registry
}

#[test]
fn test_snapshot_has_one_key_per_entry() {
    let registry = seeded_registry(5);
    let snapshot = registry.snapshot();
    assert_eq!(snapshot.len(), 5);
    for sequence in 1..=5 {
        assert!(snapshot.contains_key(&BlockId::compose("block", sequence)));
    }
}

#[test]
fn test_mutation_through_any_handle_is_visible_to_all() {
    let registry = seeded_registry(2);
    let id = BlockId::compose("block", 1);

    // Three handles, one map
    let writer = registry.clone();
    let reader = registry.clone();

    writer.set_offset(&id, (300.0, 400.0));
    writer.set_size(&id, (200.0, 100.0));

    let entry = reader.get(&id).unwrap();
    assert_eq!(entry.offset, (300.0, 400.0));
    assert_eq!(entry.size, (200.0, 100.0));
    assert_eq!(registry.get(&id).unwrap(), entry);
}

#[test]
fn test_absent_after_remove_not_stale() {
    let registry = seeded_registry(3);
    let id = BlockId::compose("block", 2);

    let removed = registry.remove(&id).unwrap();
    assert_eq!(removed.offset, (20.0, 0.0));

    assert_eq!(registry.get(&id), None);
    assert!(!registry.contains(&id));
    assert_eq!(registry.len(), 2);

    // Writes to the removed id do not resurrect it
    registry.set_offset(&id, (1.0, 1.0));
    assert_eq!(registry.get(&id), None);
}

#[test]
fn test_put_replaces_existing_entry() {
    let registry = seeded_registry(1);
    let id = BlockId::compose("block", 1);

    registry.put(id.clone(), BlockEntry::new((7.0, 7.0), (300.0, 300.0)));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(&id).unwrap().size, (300.0, 300.0));
}

#[test]
fn test_registry_is_usable_across_threads() {
    let registry = seeded_registry(1);
    let id = BlockId::compose("block", 1);

    let handle = {
        let registry = registry.clone();
        let id = id.clone();
        std::thread::spawn(move || {
            registry.set_offset(&id, (55.0, 66.0));
        })
    };
    handle.join().unwrap();

    assert_eq!(registry.get(&id).unwrap().offset, (55.0, 66.0));
}
