//! Pipelines module (orchestration)

pub mod confirm;

pub use confirm::resolve_and_confirm;
