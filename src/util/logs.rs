//! Log-download link construction.
//!
//! The console never streams logs itself; it hands the browser a redirect
//! through the download proxy with the backend log path embedded as a
//! URL-encoded parameter.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

/// Backend path that serves a service's raw logs.
fn service_log_path(service_name: &str) -> String {
    format!("/api/system/services/{service_name}/logs")
}

/// Download-proxy URL for one service's logs, with the backend path
/// embedded as an encoded `backendUrl` parameter.
#[must_use]
pub fn service_log_url(service_name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(service_log_path(service_name).as_bytes()).collect();
    format!("/downloadLogs?type=raw&backendUrl={encoded}")
}
