// Pure resolution functions (no I/O)

pub mod aliases;
pub mod answers;
pub mod cascade;
pub mod fuzzy;
pub mod normalize;

pub use aliases::AliasTable;
pub use cascade::find_matches;
