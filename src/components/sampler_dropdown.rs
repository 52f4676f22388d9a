//! Sampling-method selector for the data-prep workspace preview.
//!
//! DESIGN
//! ======
//! The stored workspace property is the source of truth: the dropdown's
//! selection follows the store one way and is never written back directly.
//! Picking a method (or re-applying the current one via the refresh
//! control) re-reads a fixed-size sample of the backing file and then
//! refreshes the workspace, which in turn updates the stored property and
//! the displayed selection.

#[cfg(test)]
#[path = "sampler_dropdown_test.rs"]
mod sampler_dropdown_test;

use leptos::prelude::*;

use crate::state::dataprep::{DataPrepState, SamplerMethod};
use crate::state::namespace::NamespaceState;

/// Dropdown picking one of the fixed sampling strategies.
#[component]
pub fn SamplerDropdown() -> impl IntoView {
    let dataprep = expect_context::<RwSignal<DataPrepState>>();
    let namespace = expect_context::<RwSignal<NamespaceState>>();

    let selected = RwSignal::new(SamplerMethod::resolve(dataprep.get_untracked().sampler().as_deref()));
    let open = RwSignal::new(false);

    // One-way sync: a stored value that resolves to a different valid
    // method updates the display; invalid values leave it untouched.
    Effect::new(move || {
        let stored = dataprep.get().sampler();
        if let Some(method) = sync_selection(stored.as_deref(), selected.get_untracked()) {
            selected.set(method);
        }
    });

    let apply = Callback::new(move |method: SamplerMethod| {
        open.set(false);
        let ns = namespace.get_untracked().current;
        let snapshot = dataprep.get_untracked();
        let Some(path) = snapshot.path() else {
            leptos::logging::warn!("sampler change ignored: workspace has no path");
            return;
        };
        let Some(workspace_id) = snapshot.workspace_id else {
            leptos::logging::warn!("sampler change ignored: no active workspace");
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let refreshed = match crate::net::api::read_file_sample(&ns, &path, method.as_str()).await {
                Ok(()) => crate::net::api::fetch_workspace(&workspace_id).await,
                Err(e) => Err(e),
            };
            match refreshed {
                Ok(info) => dataprep.update(|d| d.apply_workspace(info)),
                Err(e) => dataprep.update(|d| d.set_error(sample_error_message(e))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ns, path, workspace_id, method);
    });

    view! {
        <div class="sampler-dropdown">
            <button
                class="sampler-dropdown__refresh"
                title="Re-apply the current sampling method"
                on:click=move |_| apply.run(selected.get_untracked())
            >
                "⟳"
            </button>
            <button class="sampler-dropdown__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                {move || format!("Sample: {}", selected.get().label())}
                <span class="sampler-dropdown__caret" aria-hidden="true"></span>
            </button>
            <Show when=move || open.get()>
                <ul class="sampler-dropdown__menu">
                    {SamplerMethod::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <li class=move || option_class(option, selected.get()) on:click=move |_| apply.run(option)>
                                    <Show when=move || selected.get() == option>
                                        <span class="sampler-dropdown__check">"✓"</span>
                                    </Show>
                                    <span>{option.label()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}

/// The store drives the display: returns the method to adopt when the
/// stored value is valid and differs from the current selection.
fn sync_selection(stored: Option<&str>, current: SamplerMethod) -> Option<SamplerMethod> {
    match stored.and_then(SamplerMethod::parse) {
        Some(method) if method != current => Some(method),
        _ => None,
    }
}

/// Server-provided message, or a generic fallback when the transport gave
/// us nothing displayable.
#[cfg(any(test, feature = "hydrate"))]
fn sample_error_message(err: String) -> String {
    if err.is_empty() {
        "Failed to sample the file.".to_owned()
    } else {
        err
    }
}

fn option_class(option: SamplerMethod, selected: SamplerMethod) -> String {
    if option == selected {
        "sampler-dropdown__item sampler-dropdown__item--selected".to_owned()
    } else {
        "sampler-dropdown__item".to_owned()
    }
}
