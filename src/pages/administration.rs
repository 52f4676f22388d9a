//! Administration page: system-service health and capacity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the writer side of the system-services store: it fetches
//! the bulk status snapshot on mount and keeps refreshing it on an
//! interval, broadcasting each snapshot to subscribed widgets. The table
//! itself only ever reads the store.

use leptos::prelude::*;

use crate::components::services_table::ServicesTable;

/// Refresh interval of the bulk status feed.
pub const BULK_REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

/// Administration landing page hosting the services table.
#[component]
pub fn AdministrationPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::net::types::SystemService;
        use crate::state::services::SystemServicesState;

        let system = expect_context::<RwSignal<SystemServicesState>>();
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                match crate::net::api::fetch_system_services().await {
                    Ok(list) => {
                        if !alive_task.load(Ordering::Relaxed) {
                            break;
                        }
                        let rows = list.into_iter().map(SystemService::into_status).collect();
                        system.update(|s| {
                            s.adopt_bulk(rows);
                        });
                    }
                    Err(e) => leptos::logging::warn!("bulk services fetch failed: {e}"),
                }
                gloo_timers::future::sleep(BULK_REFRESH_INTERVAL).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="administration-page">
            <header class="administration-page__header">
                <h1>"System Services"</h1>
            </header>
            <ServicesTable/>
        </div>
    }
}
