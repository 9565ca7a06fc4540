//! Steam game path resolution
//!
//! Uses steamlocate crate to find installed Steam games.

use std::path::PathBuf;

/// Find the installation directory for a Steam app id.
///
/// Searches every Steam library folder; `None` when Steam or the app cannot
/// be found.
pub fn find_app_dir(app_id: u32) -> Option<PathBuf> {
    let steam_dir = match steamlocate::SteamDir::locate() {
        Ok(dir) => dir,
        Err(e) => {
            log::debug!("steamlocate could not find Steam: {e}");
            return None;
        }
    };

    let (app, library) = steam_dir.find_app(app_id).ok().flatten()?;
    let path = library.resolve_app_dir(&app);
    path.exists().then_some(path)
}
