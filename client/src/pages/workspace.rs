//! Workspace showcase pages: the index and the per-workspace detail view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::workspace_viewer::WorkspaceViewer;
use crate::content::workspaces;

/// `/workspace` — list of workspace showcases.
#[component]
pub fn WorkspaceIndexPage() -> impl IntoView {
    view! {
        <div class="workspace-index">
            <h1>"Workspace"</h1>
            <p>"The rooms (and bags) where the work happens, annotated one hotspot at a time."</p>
            <div class="workspace-index__cards">
                {workspaces::workspaces()
                    .into_iter()
                    .map(|workspace| {
                        let href = format!("/workspace/{}", workspace.slug);
                        view! {
                            <a class="workspace-card" href=href>
                                <img src=workspace.image_url alt=workspace.title/>
                                <h3>{workspace.title}</h3>
                                <p>{workspace.tagline}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// `/workspace/:slug` — one workspace with its interactive hotspot layer.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    move || match workspaces::find(&slug()) {
        Some(workspace) => {
            view! {
                <div class="workspace-page">
                    <h1>{workspace.title}</h1>
                    <p class="workspace-page__tagline">{workspace.tagline}</p>
                    <WorkspaceViewer workspace=workspace.clone()/>
                    <p class="workspace-page__description">{workspace.description}</p>
                </div>
            }
            .into_any()
        }
        None => {
            view! {
                <div class="workspace-page workspace-page--missing">
                    <h1>"Not found"</h1>
                    <p>"No workspace lives at this address. " <a href="/workspace">"Back to the list"</a></p>
                </div>
            }
            .into_any()
        }
    }
}
