//! Launch module - handing a title to its storefront client
//!
//! This module provides:
//! - Launch URI construction for Steam and Epic
//! - The `Launcher` capability that passes a URI to the OS opener
//! - Per-title launch strategies (standard Steam URI, Mod the Spire)
//!
//! ## Module Structure
//! - `pure/`: Pure functions (uri, command)
//! - `operations/`: Atomic side effects (opener, locate)
//! - `strategy.rs`: Strategy table keyed by Steam app id

mod operations;
mod pure;
mod strategy;

// Re-export public API
pub use operations::{Launcher, SystemLauncher};
pub use pure::epic_uri;
pub use strategy::{LaunchContext, StrategyTable};

#[cfg(test)]
pub use operations::opener::RecordingLauncher;
