//! Operations module (settings file I/O)

pub mod io;

pub use io::load_credentials;
