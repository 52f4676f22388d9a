//! REST API helpers for the console backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` outputs instead of panics. Mutation
//! failures carry the server's own message when the body provides one so
//! the UI can surface it verbatim in an alert banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ServiceStatusResponse, SystemService, WorkspaceInfo};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::InstancesRequest;

/// Line cap applied to every sample read.
pub const SAMPLE_LINE_CAP: u32 = 10_000;
/// Row-selection fraction applied to every sample read.
pub const SAMPLE_FRACTION: f64 = 0.35;
/// Content type the sample endpoint expects.
pub const SAMPLE_CONTENT_TYPE: &str = "text/plain";

#[cfg(any(test, feature = "hydrate"))]
fn service_status_endpoint(service_id: &str) -> String {
    format!("/api/system/services/{service_id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn service_instances_endpoint(service_id: &str) -> String {
    format!("/api/system/services/{service_id}/instances")
}

#[cfg(any(test, feature = "hydrate"))]
fn workspace_endpoint(workspace_id: &str) -> String {
    format!("/api/dataprep/workspaces/{workspace_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn services_fetch_failed_message(status: u16) -> String {
    format!("services fetch failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_check_failed_message(status: u16) -> String {
    format!("status check failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn instances_update_failed_message(status: u16) -> String {
    format!("instances update failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sample_read_failed_message(status: u16) -> String {
    format!("sample read failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn workspace_fetch_failed_message(status: u16) -> String {
    format!("workspace fetch failed: {status}")
}

/// Prefer the server's own error message when a non-OK response carries a
/// JSON `{ "message": ... }` body; fall back to the formatted status line.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str, fallback: String) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.is_empty() => parsed.message,
        _ => fallback,
    }
}

/// Query parameters of a sample read, in wire order.
#[cfg(any(test, feature = "hydrate"))]
fn sample_query_pairs(namespace: &str, path: &str, sampler: &str) -> Vec<(&'static str, String)> {
    vec![
        ("namespace", namespace.to_owned()),
        ("path", path.to_owned()),
        ("lines", SAMPLE_LINE_CAP.to_string()),
        ("fraction", SAMPLE_FRACTION.to_string()),
        ("sampler", sampler.to_owned()),
    ]
}

/// Fetch the bulk service-status snapshot from `GET /api/system/services`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_system_services() -> Result<Vec<SystemService>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/system/services")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(services_fetch_failed_message(resp.status()));
        }
        resp.json::<Vec<SystemService>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Check a single service's status via `GET /api/system/services/{id}/status`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_service_status(service_id: &str) -> Result<ServiceStatusResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = service_status_endpoint(service_id);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_check_failed_message(resp.status()));
        }
        resp.json::<ServiceStatusResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service_id;
        Err("not available on server".to_owned())
    }
}

/// Set a service's requested instance count via
/// `PUT /api/system/services/{id}/instances`.
///
/// # Errors
///
/// Returns the server's error message (or a formatted status fallback) if
/// the mutation is rejected or the request fails.
pub async fn set_requested_instances(service_id: &str, instances: u32) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = service_instances_endpoint(service_id);
        let resp = gloo_net::http::Request::put(&url)
            .json(&InstancesRequest { instances })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = instances_update_failed_message(resp.status());
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message_from_body(&body, fallback));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service_id, instances);
        Err("not available on server".to_owned())
    }
}

/// Re-read a fixed-size sample of a workspace's backing file via
/// `GET /api/dataprep/readfile`.
///
/// # Errors
///
/// Returns the server's error message (or a formatted status fallback) if
/// the read fails.
pub async fn read_file_sample(namespace: &str, path: &str, sampler: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let pairs = sample_query_pairs(namespace, path, sampler);
        let resp = gloo_net::http::Request::get("/api/dataprep/readfile")
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .header("Content-Type", SAMPLE_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = sample_read_failed_message(resp.status());
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message_from_body(&body, fallback));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (namespace, path, sampler);
        Err("not available on server".to_owned())
    }
}

/// Fetch a data-prep workspace via `GET /api/dataprep/workspaces/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_workspace(workspace_id: &str) -> Result<WorkspaceInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = workspace_endpoint(workspace_id);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(workspace_fetch_failed_message(resp.status()));
        }
        resp.json::<WorkspaceInfo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = workspace_id;
        Err("not available on server".to_owned())
    }
}
