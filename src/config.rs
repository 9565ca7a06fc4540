pub mod operations;
pub mod types;

// Re-export types
pub use types::{Credentials, Opener, SystemConfig};

// Re-export operations
pub use operations::load_credentials;
