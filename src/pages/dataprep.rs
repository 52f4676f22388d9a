//! Data-prep page: workspace preview controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route names the workspace; this page loads it into the shared
//! data-prep store and hosts the widgets that read it. Sampling errors
//! written into the store by those widgets surface here as a dismissible
//! banner.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::sampler_dropdown::SamplerDropdown;
use crate::state::dataprep::DataPrepState;

/// Workspace preview page hosting the sampler dropdown.
#[component]
pub fn DataPrepPage() -> impl IntoView {
    let dataprep = expect_context::<RwSignal<DataPrepState>>();
    let params = use_params_map();
    let route_workspace = move || params.read().get("workspace");

    // Load the routed workspace into the store whenever the id changes.
    Effect::new(move || {
        let Some(workspace_id) = route_workspace() else {
            return;
        };
        if dataprep.get_untracked().workspace_id.as_deref() == Some(workspace_id.as_str()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_workspace(&workspace_id).await {
                Ok(info) => dataprep.update(|d| d.apply_workspace(info)),
                Err(e) => dataprep.update(|d| d.set_error(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = workspace_id;
    });

    let workspace_title = move || {
        let state = dataprep.get();
        state
            .workspace_name
            .or(state.workspace_id)
            .unwrap_or_else(|| "Workspace".to_owned())
    };

    view! {
        <div class="dataprep-page">
            <header class="dataprep-page__header">
                <h1>{workspace_title}</h1>
                <SamplerDropdown/>
            </header>
            <Show when=move || dataprep.get().error.is_some()>
                <div class="dataprep-page__error" role="alert">
                    <span>{move || dataprep.get().error.unwrap_or_default()}</span>
                    <button on:click=move |_| dataprep.update(DataPrepState::clear_error) title="Dismiss">
                        "×"
                    </button>
                </div>
            </Show>
        </div>
    }
}
