//! Wire DTOs for the console's REST endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads; conversion into the
//! richer state records happens here so serde stays schema-driven and the
//! stores never see raw strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::state::services::{ServiceHealth, ServiceStatus};

/// One element of the bulk `GET /api/system/services` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemService {
    /// Stable service identifier, e.g. `"metrics.processor"`.
    pub name: String,
    /// Raw status string; `"OK"` and `"NOTOK"` are the known values.
    pub status: String,
    /// Instances currently running, absent while provisioning is unknown.
    pub provisioned: Option<u32>,
    /// Instances the operator asked for, absent when never set.
    pub requested: Option<u32>,
}

impl SystemService {
    /// Convert a wire record into a domain row.
    #[must_use]
    pub fn into_status(self) -> ServiceStatus {
        ServiceStatus {
            name: self.name,
            status: ServiceHealth::parse(&self.status),
            provisioned: self.provisioned,
            requested: self.requested,
        }
    }
}

/// Response of a single-service status check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub status: String,
}

impl ServiceStatusResponse {
    #[must_use]
    pub fn health(&self) -> ServiceHealth {
        ServiceHealth::parse(&self.status)
    }
}

/// Body of the requested-instance-count mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstancesRequest {
    pub instances: u32,
}

/// Error body the backend attaches to non-OK responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// A data-prep workspace as returned by the workspace endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub id: String,
    pub name: Option<String>,
    /// Open-ended read/transform properties; `"path"` and `"sampler"` are
    /// the keys the console consumes.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}
