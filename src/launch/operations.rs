//! Operations module (atomic side effects)

pub mod locate;
pub mod opener;

pub use locate::find_app_dir;
pub use opener::{Launcher, SystemLauncher};
