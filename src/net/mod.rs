//! Networking modules for the console's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls (status polling, instance mutation, sample
//! reads) and `types` defines the wire schema shared with the backend.

pub mod api;
pub mod types;
