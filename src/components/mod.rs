//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console widgets while reading/writing shared state
//! from Leptos context providers.

pub mod alert;
pub mod sampler_dropdown;
pub mod services_table;
