// Pure launch helpers (no I/O)

pub mod command;
pub mod uri;

pub use command::opener_command;
pub use uri::{epic_uri, steam_uri};
