//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the drag reconciliation logic and the working-copy
//! lifecycle so route handlers can stay focused on protocol translation.

pub mod boards;
pub mod drag;
