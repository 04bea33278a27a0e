//! Modal form for composing or editing a hotspot annotation.

use hotspot::editor::Draft;
use leptos::prelude::*;

/// Shared form dialog for the compose and edit flows.
///
/// Field validation (non-blank name and description) is surfaced here; the
/// editor core re-checks on confirm so bypassing the dialog cannot leave
/// the state machine inconsistent.
#[component]
pub fn AnnotationDialog(
    title: &'static str,
    submit_label: &'static str,
    initial: Draft,
    on_submit: Callback<Draft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let link = RwSignal::new(initial.link);
    let show_incomplete = RwSignal::new(false);

    let submit = move || {
        let draft = Draft { name: name.get(), description: description.get(), link: link.get() };
        if draft.is_complete() {
            on_submit.run(draft);
        } else {
            show_incomplete.set(true);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Link (optional)"
                    <input
                        class="dialog__input"
                        type="url"
                        prop:value=move || link.get()
                        on:input=move |ev| link.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </label>
                <Show when=move || show_incomplete.get()>
                    <p class="dialog__error">"Name and description are required."</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit()>
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
