//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`data`, `query`, `ai`, etc.) so individual
//! components can depend on small focused models. Each module is a plain
//! struct held in an `RwSignal` provided via context; the pure data shaping
//! functions live here so they compile and test natively, away from the
//! WASM-only view layer.

pub mod ai;
pub mod data;
pub mod query;
pub mod toast;
pub mod ui;
