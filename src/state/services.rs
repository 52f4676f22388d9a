//! System-service status state and the reconciliation operations on it.
//!
//! DESIGN
//! ======
//! Domain rows (`ServiceStatus`) carry only backend-reported data. Ephemeral
//! presentation flags (which row is being edited, the active alert banner)
//! live in the parallel `ServicesUiState`, keyed by the same service name
//! and merged with the rows only at render time. Keeping the two apart
//! means a bulk adoption can replace every row without clobbering edit
//! state, and vice versa.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

/// Health of a single system service as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealth {
    Ok,
    NotOk,
    #[default]
    Unknown,
}

impl ServiceHealth {
    /// Parse the backend's status string. Anything unrecognized maps to
    /// `Unknown` rather than failing the whole snapshot.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "OK" => Self::Ok,
            "NOTOK" => Self::NotOk,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotOk => "NOTOK",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// One system service row. `name` is the stable identity key across polls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceStatus {
    pub name: String,
    pub status: ServiceHealth,
    pub provisioned: Option<u32>,
    pub requested: Option<u32>,
}

impl ServiceStatus {
    /// Row seeded from a fallback poll: status only, counts unknown.
    #[must_use]
    pub fn from_poll(name: &str, status: ServiceHealth) -> Self {
        Self {
            name: name.to_owned(),
            status,
            provisioned: None,
            requested: None,
        }
    }
}

/// Ordered collection of service rows, keyed by service name.
///
/// Order is arrival order: the backend's bulk response order, or the
/// fallback-list order when rows were seeded by per-service polls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemServicesState {
    pub services: Vec<ServiceStatus>,
}

impl SystemServicesState {
    /// Adopt a bulk snapshot iff it differs from the current rows by deep
    /// equality. Returns whether anything changed; callers use `true` as
    /// the signal to retire the fallback timer and any in-flight polls.
    pub fn adopt_bulk(&mut self, incoming: Vec<ServiceStatus>) -> bool {
        if self.services == incoming {
            return false;
        }
        self.services = incoming;
        true
    }

    /// Merge one fallback-poll result: update the named row's status in
    /// place, or append a new row when the name is not yet known.
    /// Previously known instance counts are preserved.
    pub fn merge_poll(&mut self, name: &str, status: ServiceHealth) {
        match self.services.iter_mut().find(|s| s.name == name) {
            Some(row) => row.status = status,
            None => self.services.push(ServiceStatus::from_poll(name, status)),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Banner severity. Only errors are raised today; dismissal resets the
/// whole `AlertMessage`, so no residual kind survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
}

impl AlertKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }
}

/// A dismissible alert banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub message: String,
}

/// Ephemeral presentation state for the services table.
///
/// `editing` holds the name of the row whose requested-instances cell is in
/// edit mode; `Option` makes the at-most-one-editor invariant structural.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServicesUiState {
    pub editing: Option<String>,
    pub alert: Option<AlertMessage>,
}

impl ServicesUiState {
    /// Enter edit mode on one row. Any other row's edit mode is implicitly
    /// cleared because only a single name can be held at a time.
    pub fn begin_edit(&mut self, name: &str) {
        self.editing = Some(name.to_owned());
    }

    /// Leave edit mode everywhere.
    pub fn clear_edit(&mut self) {
        self.editing = None;
    }

    #[must_use]
    pub fn is_editing(&self, name: &str) -> bool {
        self.editing.as_deref() == Some(name)
    }

    /// Record a failed instance-count mutation: edit mode is cleared on
    /// every row and an error banner carries the server's message.
    pub fn fail_instances(&mut self, message: String) {
        self.editing = None;
        self.alert = Some(AlertMessage {
            kind: AlertKind::Error,
            message,
        });
    }

    /// Dismiss the alert banner, leaving no residual kind or message.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
