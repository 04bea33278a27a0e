//! Browser localStorage slots for per-workspace annotations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each workspace's annotation set persists under its own key, written as
//! a whole JSON array on every accepted mutation and read once when the
//! page mounts. The slot is strictly per-browser: there is no server copy
//! and no cross-tab reconciliation. Malformed or missing content degrades
//! to an empty set, never to a user-visible error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use hotspot::annotation::AnnotationSet;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// localStorage key for one workspace's annotation set.
#[must_use]
pub fn workspace_slot_key(slug: &str) -> String {
    format!("editableObjects-{slug}")
}

/// Load a JSON value from `localStorage` for `key`. Absent keys, storage
/// being unavailable, and parse failures all yield `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`, replacing any prior value.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load the annotation set for a workspace, falling back to empty.
#[must_use]
pub fn load_annotations(slug: &str) -> AnnotationSet {
    load_json(&workspace_slot_key(slug)).unwrap_or_default()
}

/// Overwrite the persisted annotation set for a workspace.
pub fn save_annotations(slug: &str, annotations: &AnnotationSet) {
    save_json(&workspace_slot_key(slug), annotations);
}
