use super::*;

#[test]
fn slot_key_embeds_the_workspace_slug() {
    assert_eq!(workspace_slot_key("studio-desk"), "editableObjects-studio-desk");
    assert_eq!(workspace_slot_key("travel-kit"), "editableObjects-travel-kit");
}

#[test]
fn slot_keys_differ_per_workspace() {
    assert_ne!(workspace_slot_key("a"), workspace_slot_key("b"));
}

// Outside the browser (no `hydrate` feature in unit tests) the storage
// helpers degrade to the same fallbacks the browser uses for a missing or
// unreadable slot.

#[test]
fn load_without_storage_falls_back_to_empty() {
    let set = load_annotations("studio-desk");
    assert!(set.is_empty());
}

#[test]
fn save_without_storage_is_a_noop() {
    let set = AnnotationSet::new();
    save_annotations("studio-desk", &set);
    assert!(load_annotations("studio-desk").is_empty());
}
