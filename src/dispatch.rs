//! Dispatcher - confirmed title to running game
//!
//! Lookup order is Steam, then Epic, then the remote owned-games list.
//! A title found only remotely is added to the Steam catalog before launch.

use crate::catalog::{CatalogFetcher, CatalogStore, Library, StorePlatform};
use crate::config::SystemConfig;
use crate::error::{DispatchError, LaunchError};
use crate::launch::{LaunchContext, Launcher, StrategyTable, epic_uri};
use crate::util::title_case;

pub struct Dispatcher<'a> {
    pub config: &'a SystemConfig,
    pub launcher: &'a dyn Launcher,
    /// `None` when running offline
    pub fetcher: Option<&'a dyn CatalogFetcher>,
    pub strategies: &'a StrategyTable,
}

impl Dispatcher<'_> {
    pub fn dispatch(&self, title: &str, store: &mut CatalogStore) -> Result<(), DispatchError> {
        let title = title.to_lowercase();

        if let Some(entry) = store.lookup(&title) {
            println!(
                "Launching {} from {}...",
                title_case(&entry.title),
                entry.platform.display()
            );
            return match entry.platform {
                StorePlatform::Steam => Ok(self.launch_steam(&entry.identifier, store)?),
                StorePlatform::Epic => Ok(self.launcher.launch(&epic_uri(&entry.identifier))?),
            };
        }

        let Some(app_id) = self.fetch_app_id(&title) else {
            return Err(DispatchError::NotFound {
                title,
                known: store.listing(Library::All),
            });
        };

        if let Err(e) = store.insert_steam(&title, &app_id) {
            log::warn!("could not persist new Steam entry '{title}': {e}");
        }
        println!("Launching new Steam game: {}...", title_case(&title));
        Ok(self.launch_steam(&app_id, store)?)
    }

    /// Exact-title lookup in a fresh owned-games fetch.
    fn fetch_app_id(&self, title: &str) -> Option<String> {
        let fetcher = self.fetcher?;
        match fetcher.fetch_owned() {
            Ok(owned) => owned.get(title).map(str::to_string),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    fn launch_steam(&self, app_id: &str, store: &CatalogStore) -> Result<(), LaunchError> {
        let launch_option = store.launch_option(app_id);
        if let Some(option) = launch_option {
            println!("Launching game with options: {option}");
        }

        let strategy = self.strategies.for_app(app_id);
        log::debug!("launching {app_id} with strategy {}", strategy.name());
        let ctx = LaunchContext {
            config: self.config,
            launcher: self.launcher,
        };
        strategy.launch(app_id, launch_option, &ctx)
    }
}
