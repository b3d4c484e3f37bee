//! Block lifecycle workflows: creation paths, id assignment, the
//! single-selection invariant, removal, and hit testing over the shared
//! registry.

use crate::helpers::{EventCollector, TestCanvasBuilder};
use gridboard::events::EditorEvent;
use gridboard::types::BlockId;
use std::collections::HashSet;

#[test]
fn test_n_creations_yield_n_distinct_ids_and_entries() {
    let (mut collection, _bus) = TestCanvasBuilder::new().build();

    let ids: Vec<BlockId> = (0..8).map(|_| collection.create_block()).collect();

    let distinct: HashSet<&BlockId> = ids.iter().collect();
    assert_eq!(distinct.len(), 8);
    assert_eq!(collection.len(), 8);
    assert_eq!(collection.registry().len(), 8);
    assert_eq!(collection.registry().snapshot().len(), 8);
}

#[test]
fn test_ids_follow_type_tag_and_sequence() {
    let (mut collection, _bus) = TestCanvasBuilder::new().with_type_tag("layout").build();

    assert_eq!(collection.create_block().as_str(), "layout1");
    assert_eq!(collection.create_block().as_str(), "layout2");
}

#[test]
fn test_ids_are_never_reused_after_removal() {
    let (mut collection, _bus) = TestCanvasBuilder::new().build();

    let first = collection.create_block();
    collection.remove_block(&first);
    let second = collection.create_block();

    assert_ne!(first, second);
    assert_eq!(second.as_str(), "block2");
}

#[test]
fn test_new_block_is_the_sole_selected_block() {
    let (mut collection, bus) = TestCanvasBuilder::new().build();
    let collector = EventCollector::attach(&bus);

    let first = collection.create_block();
    assert_eq!(collection.selected(), Some(&first));

    let second = collection.create_block();
    assert_eq!(collection.selected(), Some(&second));

    // Every creation deselects the previous block before selecting the new
    // one, so selection never doubles up.
    let events = collector.take();
    assert_eq!(
        events,
        vec![
            EditorEvent::Deselect,
            EditorEvent::Select(first.clone()),
            EditorEvent::Deselect,
            EditorEvent::Select(second.clone()),
        ]
    );
}

#[test]
fn test_selection_survives_arbitrary_sequences_with_one_winner() {
    let (mut collection, _bus) = TestCanvasBuilder::new().build();

    let a = collection.create_block();
    let b = collection.create_block();
    collection.select(&a);
    collection.deselect();
    collection.select(&b);
    let c = collection.create_block();

    // At most one selected, and a create always wins
    assert_eq!(collection.selected(), Some(&c));
}

#[test]
fn test_select_unknown_id_is_ignored() {
    let (mut collection, _bus) = TestCanvasBuilder::new().with_n_blocks(1).build();
    let current = collection.selected().cloned();

    assert!(!collection.select(&BlockId::from("ghost99")));
    assert_eq!(collection.selected().cloned(), current);
}

#[test]
fn test_remove_block_deletes_registry_entry() {
    let (mut collection, _bus) = TestCanvasBuilder::new().build();
    let id = collection.create_block();

    assert!(collection.remove_block(&id));
    assert_eq!(collection.registry().get(&id), None);
    assert_eq!(collection.selected(), None);
    assert!(collection.is_empty());

    // Removing again is a no-op
    assert!(!collection.remove_block(&id));
}

#[test]
fn test_create_block_request_event() {
    let (mut collection, _bus) = TestCanvasBuilder::new().build();

    collection.handle_event(&EditorEvent::CreateBlock);
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_creation_shortcut_respects_arming() {
    let (mut collection, _bus) = TestCanvasBuilder::new().build();

    // Armed by default, like the editor at startup
    assert!(collection.on_create_shortcut().is_some());

    collection.set_creation_allowed(false);
    assert!(collection.on_create_shortcut().is_none());
    assert_eq!(collection.len(), 1);

    collection.handle_event(&EditorEvent::AllowCreation);
    assert!(collection.on_create_shortcut().is_some());
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_deselect_rest_becomes_deselect_broadcast() {
    let (mut collection, bus) = TestCanvasBuilder::new().with_n_blocks(1).build();
    let collector = EventCollector::attach(&bus);

    collection.handle_event(&EditorEvent::DeselectRest);

    assert_eq!(collection.selected(), None);
    assert_eq!(collector.events(), vec![EditorEvent::Deselect]);
}

#[test]
fn test_hit_testing_over_live_geometry() {
    let (mut collection, _bus) = TestCanvasBuilder::new().build();
    let first = collection.create_block();
    let second = collection.create_block();

    // Drag the second block out of the first one's way
    {
        let block = collection.block_mut(&second).unwrap();
        block.on_pointer_move(50.0, 50.0);
        block.activate();
        block.on_drag_update((300.0, 0.0));
        block.on_drag_end();
    }

    let index = collection.build_index();
    assert_eq!(index.query_point(50.0, 50.0), vec![first.clone()]);
    assert_eq!(index.query_point(350.0, 50.0), vec![second.clone()]);
    assert!(index.query_point(50.0, 500.0).is_empty());

    // Rectangle query sees both
    let mut hits = index.query_rect(0.0, 0.0, 400.0, 100.0);
    hits.sort();
    assert_eq!(hits, vec![first, second]);
}

#[test]
fn test_registry_is_shared_not_copied() {
    let (mut collection, _bus) = TestCanvasBuilder::new().with_n_blocks(2).build();
    let outside_handle = collection.registry().clone();
    let id = collection.block_ids()[0].clone();

    let block = collection.block_mut(&id).unwrap();
    block.on_pointer_move(50.0, 50.0);
    block.activate();
    block.on_drag_update((42.0, 0.0));

    // An external reader sees the controller's write immediately
    assert_eq!(outside_handle.get(&id).unwrap().offset, (42.0, 0.0));
}
