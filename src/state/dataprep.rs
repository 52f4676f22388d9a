//! Data-prep workspace state: active workspace, its stored properties, and
//! the shared error slot surfaced by prep widgets.

#[cfg(test)]
#[path = "dataprep_test.rs"]
mod dataprep_test;

use crate::net::types::WorkspaceInfo;

/// Strategy used to pick a preview subset of rows from a large file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SamplerMethod {
    #[default]
    First,
    Bernoulli,
    Poisson,
    Reservoir,
}

impl SamplerMethod {
    /// All methods in display order. The first entry doubles as the
    /// default when a stored value is absent or unrecognized.
    pub const ALL: [Self; 4] = [Self::First, Self::Bernoulli, Self::Poisson, Self::Reservoir];

    /// Wire name as stored in workspace properties.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Bernoulli => "bernoulli",
            Self::Poisson => "poisson",
            Self::Reservoir => "reservoir",
        }
    }

    /// Human-readable menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "First N rows",
            Self::Bernoulli => "Bernoulli",
            Self::Poisson => "Poisson",
            Self::Reservoir => "Reservoir",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }

    /// Resolve a stored property value, defaulting to the first method when
    /// the value is missing or not part of the enumeration.
    #[must_use]
    pub fn resolve(stored: Option<&str>) -> Self {
        stored.and_then(Self::parse).unwrap_or(Self::ALL[0])
    }
}

/// Stored per-workspace read/transform properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceProperties {
    pub path: Option<String>,
    pub sampler: Option<String>,
}

/// Shared data-prep store: the active workspace and its properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataPrepState {
    pub workspace_id: Option<String>,
    pub workspace_name: Option<String>,
    pub properties: WorkspaceProperties,
    pub error: Option<String>,
}

impl DataPrepState {
    /// Stored sampler value, if any. Resolution to a valid method happens
    /// at the consuming edge, not here.
    #[must_use]
    pub fn sampler(&self) -> Option<String> {
        self.properties.sampler.clone()
    }

    #[must_use]
    pub fn path(&self) -> Option<String> {
        self.properties.path.clone()
    }

    /// Adopt a freshly fetched workspace, clearing any stale error.
    pub fn apply_workspace(&mut self, info: WorkspaceInfo) {
        self.workspace_id = Some(info.id);
        self.workspace_name = info.name;
        self.properties = WorkspaceProperties {
            path: info.properties.get("path").cloned(),
            sampler: info.properties.get("sampler").cloned(),
        };
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
