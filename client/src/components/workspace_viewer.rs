//! Host component bridging DOM events and the hotspot editor core.
//!
//! ARCHITECTURE
//! ============
//! The `hotspot` crate owns every decision — mode transitions, id
//! assignment, clamping — while this component maps pointer events into
//! core calls and performs the one side effect the core reports back:
//! writing the full annotation set to the workspace's localStorage slot
//! whenever a transition mutated it. Persistence is an explicit step in
//! the dispatch path, not a reactive effect, so exactly the accepted
//! transitions write.

use hotspot::editor::{Action, Draft, EditorCore, EditorMode};
use leptos::prelude::*;

use crate::components::annotation_dialog::AnnotationDialog;
use crate::content::workspaces::Workspace;
use crate::util::storage;

/// Run a transition against the editor core and persist when it mutated
/// the collection.
fn dispatch(
    editor: RwSignal<EditorCore>,
    slug: &'static str,
    transition: impl FnOnce(&mut EditorCore) -> Action,
) {
    editor.update(|core| {
        let action = transition(core);
        if action.is_mutation() {
            storage::save_annotations(slug, &core.annotations);
        }
    });
}

/// Interactive hotspot layer over one workspace photo.
#[component]
pub fn WorkspaceViewer(workspace: Workspace) -> impl IntoView {
    let slug = workspace.slug;
    let editor = RwSignal::new(EditorCore::new());
    let stage_ref = NodeRef::<leptos::html::Div>::new();
    // Set once a drag actually moved, so the click after pointer-up can be
    // told apart from a plain tap on the marker.
    let drag_moved = StoredValue::new(false);

    // Hydrate the collection from the persisted slot; browser only.
    Effect::new(move || {
        editor.update(|core| core.annotations = storage::load_annotations(slug));
    });

    let on_stage_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if !editor.with_untracked(EditorCore::awaiting_placement) {
                return;
            }
            let Some(stage) = stage_ref.get_untracked() else {
                return;
            };
            if let Some(position) = crate::util::pointer::mouse_position(&ev, &stage) {
                dispatch(editor, slug, |core| core.place(position));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_stage_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if editor.with_untracked(|core| core.dragging_id().is_none()) {
                return;
            }
            let Some(stage) = stage_ref.get_untracked() else {
                return;
            };
            if let Some(position) = crate::util::pointer::pointer_position(&ev, &stage) {
                drag_moved.set_value(true);
                dispatch(editor, slug, |core| core.drag_to(position));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let end_drag = move || editor.update(EditorCore::end_drag);

    view! {
        <section class="workspace-viewer">
            <div class="workspace-viewer__toolbar">
                <label class="workspace-viewer__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || editor.with(|core| core.edit_enabled)
                        on:change=move |_| {
                            editor.update(|core| {
                                let next = !core.edit_enabled;
                                core.set_edit_enabled(next);
                            });
                        }
                    />
                    "Edit mode"
                </label>
                <Show when=move || {
                    editor.with(|core| core.edit_enabled && core.mode == EditorMode::Idle)
                }>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| editor.update(EditorCore::begin_compose)
                    >
                        "+ Add hotspot"
                    </button>
                </Show>
                <Show when=move || editor.with(EditorCore::awaiting_placement)>
                    <span class="workspace-viewer__hint">
                        "Click the photo where the new hotspot belongs"
                    </span>
                    <button class="btn" on:click=move |_| {
                        editor.update(EditorCore::cancel_placement);
                    }>
                        "Cancel"
                    </button>
                </Show>
            </div>

            <div
                class="workspace-viewer__stage"
                class:workspace-viewer__stage--placing=move || editor.with(EditorCore::awaiting_placement)
                node_ref=stage_ref
                on:click=on_stage_click
                on:pointermove=on_stage_pointer_move
                on:pointerup=move |_| end_drag()
                on:pointerleave=move |_| end_drag()
            >
                <img class="workspace-viewer__image" src=workspace.image_url alt=workspace.title/>
                {move || {
                    editor.with(|core| {
                        core.annotations
                            .iter()
                            .map(|annotation| {
                                let id = annotation.id;
                                let label = annotation.name.clone();
                                view! {
                                    <button
                                        class="workspace-viewer__marker"
                                        style:left=format!("{}%", annotation.position.x)
                                        style:top=format!("{}%", annotation.position.y)
                                        title=label
                                        on:pointerdown=move |ev| {
                                            ev.stop_propagation();
                                            drag_moved.set_value(false);
                                            editor.update(|core| core.begin_drag(id));
                                        }
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            if !drag_moved.get_value() {
                                                editor.update(|core| core.open_viewer(id));
                                            }
                                            drag_moved.set_value(false);
                                        }
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>

            {move || {
                let mode = editor.with(|core| core.mode.clone());
                match mode {
                    EditorMode::Composing { draft } => Some(
                        view! {
                            <AnnotationDialog
                                title="New hotspot"
                                submit_label="Place on photo"
                                initial=draft
                                on_submit=Callback::new(move |draft: Draft| {
                                    editor.update(|core| {
                                        core.update_draft(draft);
                                        core.confirm_draft();
                                    });
                                })
                                on_cancel=Callback::new(move |()| {
                                    editor.update(EditorCore::cancel_compose);
                                })
                            />
                        }
                            .into_any(),
                    ),
                    EditorMode::Editing { draft, .. } => Some(
                        view! {
                            <AnnotationDialog
                                title="Edit hotspot"
                                submit_label="Save"
                                initial=draft
                                on_submit=Callback::new(move |draft: Draft| {
                                    editor.update(|core| core.update_draft(draft));
                                    dispatch(editor, slug, EditorCore::save_edit);
                                })
                                on_cancel=Callback::new(move |()| {
                                    editor.update(EditorCore::cancel_edit);
                                })
                            />
                        }
                            .into_any(),
                    ),
                    EditorMode::Viewing { id } => {
                        let annotation = editor.with(|core| core.annotations.get(id).cloned())?;
                        let name = annotation.name.clone();
                        let description = annotation.description.clone();
                        let has_link = !annotation.link.is_empty();
                        let link_href = annotation.link.clone();
                        let link_text = annotation.link.clone();
                        Some(
                            view! {
                                <div
                                    class="dialog-backdrop"
                                    on:click=move |_| editor.update(EditorCore::close_viewer)
                                >
                                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                        <h2>{name}</h2>
                                        <p>{description}</p>
                                        <Show when=move || has_link>
                                            <a
                                                href=link_href.clone()
                                                target="_blank"
                                                rel="noreferrer"
                                            >
                                                {link_text.clone()}
                                            </a>
                                        </Show>
                                        <div class="dialog__actions">
                                            <Show when=move || editor.with(|core| core.edit_enabled)>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        dispatch(editor, slug, |core| core.delete(id));
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| {
                                                        editor.update(EditorCore::begin_edit);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    editor.update(EditorCore::close_viewer);
                                                }
                                            >
                                                "Close"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                            .into_any(),
                        )
                    }
                    EditorMode::Idle
                    | EditorMode::AwaitingPlacement { .. }
                    | EditorMode::Dragging { .. } => None,
                }
            }}
        </section>
    }
}
