//! Dismissible alert banner.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

use crate::state::services::{AlertKind, AlertMessage};

/// Banner surfacing a recoverable failure. Closing hands control back to
/// the owner, which resets the alert state entirely.
#[component]
pub fn Alert(alert: AlertMessage, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class=alert_class(alert.kind) role="alert">
            <span class="alert-banner__message">{alert.message}</span>
            <button class="alert-banner__close" on:click=move |_| on_close.run(()) title="Dismiss">
                "×"
            </button>
        </div>
    }
}

fn alert_class(kind: AlertKind) -> String {
    format!("alert-banner alert-banner--{}", kind.as_str())
}
