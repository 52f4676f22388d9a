//! System-services status table with inline requested-instance editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table mirrors the shared system-services store but stays usable when
//! the bulk status source goes quiet: a one-shot timer falls back to
//! per-service status polls against a fixed list of well-known services.
//! A later bulk snapshot always supersedes poll results — adoption bumps a
//! poll epoch, and every in-flight poll checks its epoch before touching
//! state, so stale polls can never overwrite fresher data.
//!
//! ERROR HANDLING
//! ==============
//! Instance-count mutation failures revert edit state everywhere and raise
//! a dismissible error banner carrying the server's message. Poll
//! transport failures are logged and retried on the next interval.

#[cfg(test)]
#[path = "services_table_test.rs"]
mod services_table_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::alert::Alert;
use crate::state::services::{ServiceHealth, ServiceStatus, ServicesUiState, SystemServicesState};
use crate::util::logs::service_log_url;

/// Services asked for status individually when the bulk source yields
/// nothing. One poll is issued per entry, in this order.
pub const FALLBACK_SERVICES: [&str; 10] = [
    "appfabric",
    "dataset.executor",
    "log.saver",
    "messaging.service",
    "metadata.service",
    "metrics",
    "metrics.processor",
    "preview.runner",
    "runtime",
    "transaction",
];

/// Bounded wait for bulk data before falling back to per-service polls.
pub const FALLBACK_AFTER: Duration = Duration::from_secs(10);

/// Retry interval of an individual fallback poll. Polls retry until a bulk
/// snapshot supersedes them or the table is torn down.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Service status table with a reconciled local view of the bulk store.
#[component]
pub fn ServicesTable() -> impl IntoView {
    let system = expect_context::<RwSignal<SystemServicesState>>();

    // Rows as displayed: seeded from the store snapshot, then reconciled
    // from bulk updates and fallback polls.
    let services = RwSignal::new(system.get_untracked());
    let ui = RwSignal::new(ServicesUiState::default());

    let alive = Arc::new(AtomicBool::new(true));
    let bulk_seen = Arc::new(AtomicBool::new(false));
    let poll_epoch = Arc::new(AtomicU64::new(0));

    // Bulk adoption: a deep-unequal store snapshot wins over everything in
    // flight. Bumping the epoch retires the fallback timer and all polls.
    let bulk_seen_adopt = bulk_seen.clone();
    let poll_epoch_adopt = poll_epoch.clone();
    Effect::new(move || {
        let incoming = system.get().services;
        let mut changed = false;
        services.update(|s| changed = s.adopt_bulk(incoming));
        if changed {
            bulk_seen_adopt.store(true, Ordering::Relaxed);
            poll_epoch_adopt.fetch_add(1, Ordering::Relaxed);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        // One-shot fallback timer: if no bulk data lands in time, ask each
        // well-known service for its status individually.
        let alive_timer = alive.clone();
        let bulk_seen_timer = bulk_seen.clone();
        let poll_epoch_timer = poll_epoch.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(FALLBACK_AFTER).await;
            if !alive_timer.load(Ordering::Relaxed) {
                return;
            }
            if !fallback_due(services.get_untracked().is_empty(), bulk_seen_timer.load(Ordering::Relaxed)) {
                return;
            }
            for name in FALLBACK_SERVICES {
                spawn_service_poll(name, services, &alive_timer, &poll_epoch_timer);
            }
        });
    }

    let alive_cleanup = alive;
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let submit_instances = Callback::new(move |(name, raw): (String, String)| {
        let Some(instances) = parse_instance_input(&raw) else {
            ui.update(ServicesUiState::clear_edit);
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_requested_instances(&name, instances).await {
                // The next bulk poll is authoritative; no optimistic update.
                Ok(()) => ui.update(ServicesUiState::clear_edit),
                Err(message) => ui.update(|u| u.fail_instances(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name, instances);
    });

    let on_dismiss = Callback::new(move |()| ui.update(ServicesUiState::dismiss_alert));

    view! {
        <div class="services-table">
            <Show
                when=move || !services.get().is_empty()
                fallback=|| view! { <p class="services-table__loading">"Loading services..."</p> }
            >
                <table class="services-table__grid">
                    <thead>
                        <tr>
                            <th>"Status"</th>
                            <th>"Name"</th>
                            <th>"Provisioned"</th>
                            <th>"Requested"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            services
                                .get()
                                .services
                                .into_iter()
                                .map(|service| {
                                    view! { <ServiceRow service=service ui=ui on_submit=submit_instances/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            {move || ui.get().alert.map(|alert| view! { <Alert alert=alert on_close=on_dismiss/> })}
        </div>
    }
}

/// One table row. The requested-count cell toggles between a read-only
/// span and the inline editor depending on the shared edit state.
#[component]
fn ServiceRow(service: ServiceStatus, ui: RwSignal<ServicesUiState>, on_submit: Callback<(String, String)>) -> impl IntoView {
    let name = service.name.clone();
    let log_url = service_log_url(&name);
    let requested = service.requested;

    let editing_name = name.clone();
    let is_editing = move || ui.get().is_editing(&editing_name);

    let begin_name = name.clone();
    let on_begin_edit = move |_| {
        if ui.get().is_editing(&begin_name) {
            return;
        }
        ui.update(|u| u.begin_edit(&begin_name));
    };

    let editor_name = name.clone();
    view! {
        <tr>
            <td>
                <span class=status_dot_class(service.status)></span>
            </td>
            <td class="services-table__name">{name.clone()}</td>
            <td>{display_count(service.provisioned)}</td>
            <td class="services-table__requested" on:click=on_begin_edit>
                {move || {
                    if is_editing() {
                        view! {
                            <InstanceEditor
                                name=editor_name.clone()
                                initial=requested
                                ui=ui
                                on_submit=on_submit
                            />
                        }
                        .into_any()
                    } else {
                        view! {
                            <span class="services-table__requested-count">{display_count(requested)}</span>
                        }
                        .into_any()
                    }
                }}
            </td>
            <td>
                <a href=log_url target="_blank">"View logs"</a>
            </td>
        </tr>
    }
}

/// Inline editor for a row's requested instance count. Enter submits,
/// Escape or focus loss cancels.
#[component]
fn InstanceEditor(
    name: String,
    initial: Option<u32>,
    ui: RwSignal<ServicesUiState>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let value = RwSignal::new(initial.map(|n| n.to_string()).unwrap_or_default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let submit_name = name;
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_submit.run((submit_name.clone(), value.get()));
        }
        "Escape" => ui.update(ServicesUiState::clear_edit),
        _ => {}
    };

    view! {
        <input
            node_ref=input_ref
            class="services-table__instances-input"
            type="text"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            on:keydown=on_keydown
            on:blur=move |_| ui.update(ServicesUiState::clear_edit)
        />
    }
}

/// Start one indefinitely retrying status poll for `name`. The poll stops
/// touching state as soon as the table is torn down or a bulk snapshot
/// advances the epoch past the poll's own generation.
#[cfg(feature = "hydrate")]
fn spawn_service_poll(
    name: &'static str,
    services: RwSignal<SystemServicesState>,
    alive: &Arc<AtomicBool>,
    epoch: &Arc<AtomicU64>,
) {
    let alive = alive.clone();
    let epoch = epoch.clone();
    let started_epoch = epoch.load(Ordering::Relaxed);
    leptos::task::spawn_local(async move {
        loop {
            let result = crate::net::api::fetch_service_status(name).await;
            if !poll_still_current(alive.load(Ordering::Relaxed), started_epoch, epoch.load(Ordering::Relaxed)) {
                break;
            }
            match result {
                Ok(resp) => services.update(|s| s.merge_poll(name, resp.health())),
                Err(e) => leptos::logging::warn!("status poll for {name} failed: {e}"),
            }
            gloo_timers::future::sleep(POLL_INTERVAL).await;
            if !poll_still_current(alive.load(Ordering::Relaxed), started_epoch, epoch.load(Ordering::Relaxed)) {
                break;
            }
        }
    });
}

/// Fallback polling starts only when the timer expires with no bulk
/// snapshot adopted and no rows known at all.
#[cfg(any(test, feature = "hydrate"))]
fn fallback_due(rows_empty: bool, bulk_seen: bool) -> bool {
    rows_empty && !bulk_seen
}

/// A poll may touch state only while the table is alive and no bulk
/// snapshot has superseded the poll's generation.
#[cfg(any(test, feature = "hydrate"))]
fn poll_still_current(alive: bool, started_epoch: u64, current_epoch: u64) -> bool {
    alive && started_epoch == current_epoch
}

/// Requested-instance input accepts plain decimal integers only.
fn parse_instance_input(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn display_count(count: Option<u32>) -> String {
    count.map_or_else(|| "--".to_owned(), |n| n.to_string())
}

fn status_dot_class(status: ServiceHealth) -> &'static str {
    match status {
        ServiceHealth::Ok => "status-dot status-dot--ok",
        ServiceHealth::NotOk => "status-dot status-dot--down",
        ServiceHealth::Unknown => "status-dot status-dot--unknown",
    }
}
