//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interaction surfaces while reading
//! shared state from Leptos context providers. `workspace_viewer` is the
//! bridge between DOM events and the `hotspot` editor core.

pub mod annotation_dialog;
pub mod article_card;
pub mod comment_thread;
pub mod experience_timeline;
pub mod nav_bar;
pub mod project_card;
pub mod support_wizard;
pub mod workspace_viewer;
