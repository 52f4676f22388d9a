//! Session namespace selection.
//!
//! The console scopes data-prep calls to the namespace picked elsewhere in
//! the shell; widgets only ever read the current value.

#[cfg(test)]
#[path = "namespace_test.rs"]
mod namespace_test;

/// The namespace every scoped API call is issued against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceState {
    pub current: String,
}

impl Default for NamespaceState {
    fn default() -> Self {
        Self {
            current: "default".to_owned(),
        }
    }
}
