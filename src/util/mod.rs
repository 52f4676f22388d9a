//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so page and component logic stays testable
//! without a browser environment.

pub mod logs;
