//! Shared application state provided to components as `RwSignal` contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each store is a plain struct behind an `RwSignal`: `get_untracked()` is
//! the synchronous snapshot, `Effect`s are the change subscriptions, and
//! signal disposal on unmount is the teardown path.

pub mod dataprep;
pub mod namespace;
pub mod services;
