//! Resolve module - turning a typed title into one catalog title
//!
//! This module provides:
//! - Title normalization (case, whitespace, digit -> roman numeral)
//! - The alias table for common abbreviations
//! - The match cascade: exact, alias, transformed substring, fuzzy
//! - Confirmation of the cascade's result with the user
//!
//! ## Module Structure
//! - `types.rs`: MatchTier, Matches
//! - `pure/`: Pure functions (normalize, aliases, cascade, fuzzy, answers)
//! - `pipelines/`: Interactive orchestration (confirm)

mod pipelines;
mod pure;
mod types;

// Re-export public API
pub use pipelines::resolve_and_confirm;
pub use pure::AliasTable;
