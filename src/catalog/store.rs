//! CatalogStore - the set of catalogs kept in the data directory

use super::operations::{load_catalog, load_catalog_or, save_catalog};
use super::types::{Catalog, CatalogEntry, Library, StorePlatform};
use crate::error::CatalogError;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const STEAM_GAMES_FILE: &str = "steam_games.json";
pub const EPIC_GAMES_FILE: &str = "epic_games.json";
pub const STEAM_ROGUELIKES_FILE: &str = "steam_roguelikes.json";
pub const LAUNCH_OPTIONS_FILE: &str = "launch_options.json";

#[derive(Clone, Debug)]
pub struct CatalogPaths {
    pub steam: PathBuf,
    pub epic: PathBuf,
    pub roguelikes: PathBuf,
    pub launch_options: PathBuf,
}

impl CatalogPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            steam: dir.join(STEAM_GAMES_FILE),
            epic: dir.join(EPIC_GAMES_FILE),
            roguelikes: dir.join(STEAM_ROGUELIKES_FILE),
            launch_options: dir.join(LAUNCH_OPTIONS_FILE),
        }
    }
}

fn default_epic() -> Catalog {
    [(
        "slime rancher",
        "corydalis%3A1e38b618d106430db94b474abbfecc16%3ACorydalis",
    )]
    .into_iter()
    .collect()
}

fn default_roguelikes() -> Catalog {
    [
        ("slay the spire", "646570"),
        ("vampire survivors", "1794680"),
        ("peglin", "1296610"),
        ("hades", "1145360"),
        ("hades 2", "1145350"),
    ]
    .into_iter()
    .collect()
}

pub struct CatalogStore {
    pub paths: CatalogPaths,
    pub steam: Catalog,
    pub epic: Catalog,
    pub roguelikes: Catalog,
    /// Steam app id -> launch flags appended after `//`
    pub launch_options: Catalog,
}

impl CatalogStore {
    /// Load every catalog from `dir`. Epic and roguelike catalogs are seeded
    /// with built-in entries until their files exist.
    pub fn open(dir: &Path) -> Result<Self, CatalogError> {
        let paths = CatalogPaths::in_dir(dir);
        let steam = load_catalog(&paths.steam)?;
        let epic = load_catalog_or(&paths.epic, default_epic)?;
        let roguelikes = load_catalog_or(&paths.roguelikes, default_roguelikes)?;
        let launch_options = load_catalog(&paths.launch_options)?;

        log::debug!(
            "catalogs loaded: {} steam, {} epic, {} roguelikes",
            steam.len(),
            epic.len(),
            roguelikes.len()
        );

        Ok(Self {
            paths,
            steam,
            epic,
            roguelikes,
            launch_options,
        })
    }

    /// In-memory store, used when nothing should touch the user's files.
    #[cfg(test)]
    pub fn with_catalogs(paths: CatalogPaths, steam: Catalog, epic: Catalog) -> Self {
        Self {
            paths,
            steam,
            epic,
            roguelikes: Catalog::new(),
            launch_options: Catalog::new(),
        }
    }

    /// Merge freshly fetched Steam entries and persist the Steam catalog.
    pub fn merge_steam(&mut self, fetched: Catalog) -> Result<usize, CatalogError> {
        let added = self.steam.merge(fetched);
        self.save_steam()?;
        Ok(added)
    }

    pub fn insert_steam(&mut self, title: &str, app_id: &str) -> Result<(), CatalogError> {
        self.steam.insert(title, app_id);
        self.save_steam()
    }

    pub fn save_steam(&self) -> Result<(), CatalogError> {
        save_catalog(&self.paths.steam, &self.steam)
    }

    /// Steam wins when a title is in both catalogs.
    pub fn lookup(&self, title: &str) -> Option<CatalogEntry> {
        let title = title.to_lowercase();
        let hit = |catalog: &Catalog, platform| {
            catalog.get(&title).map(|id| CatalogEntry {
                title: title.clone(),
                identifier: id.to_string(),
                platform,
            })
        };
        hit(&self.steam, StorePlatform::Steam).or_else(|| hit(&self.epic, StorePlatform::Epic))
    }

    /// Every known title, Steam first then Epic, each alphabetical,
    /// without duplicates. This is the order matching ties resolve in.
    pub fn titles(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.steam
            .titles()
            .chain(self.epic.titles())
            .filter(|t| seen.insert(*t))
            .map(str::to_string)
            .collect()
    }

    pub fn steam_titles(&self) -> Vec<String> {
        self.steam.titles().map(str::to_string).collect()
    }

    pub fn epic_titles(&self) -> Vec<String> {
        self.epic.titles().map(str::to_string).collect()
    }

    /// Sorted titles of one library, or of both for `Library::All`.
    pub fn listing(&self, library: Library) -> Vec<String> {
        let mut titles = match library {
            Library::Steam => self.steam_titles(),
            Library::Epic => self.epic_titles(),
            Library::All => self.titles(),
        };
        titles.sort();
        titles
    }

    /// Launch flags for a Steam app, if any non-empty ones are configured.
    pub fn launch_option(&self, app_id: &str) -> Option<&str> {
        self.launch_options
            .get(app_id)
            .map(str::trim)
            .filter(|opt| !opt.is_empty())
    }

    pub fn pick_roguelike(&self, rng: &mut fastrand::Rng) -> Option<String> {
        if self.roguelikes.is_empty() {
            return None;
        }
        let titles: Vec<&str> = self.roguelikes.titles().collect();
        Some(titles[rng.usize(..titles.len())].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_in(dir: &Path) -> CatalogStore {
        let steam: Catalog = [
            ("slay the spire", "646570"),
            ("hades", "1145360"),
            ("fortnite", "steam-fortnite"),
        ]
        .into_iter()
        .collect();
        let epic: Catalog = [("fortnite", "Fortnite"), ("alan wake 2", "Dill")]
            .into_iter()
            .collect();
        CatalogStore::with_catalogs(CatalogPaths::in_dir(dir), steam, epic)
    }

    // ── open ────────────────────────────────────────────────────────

    #[test]
    fn open_empty_dir_seeds_epic_and_roguelikes() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path()).unwrap();

        assert!(store.steam.is_empty());
        assert!(store.epic.get("slime rancher").is_some());
        assert_eq!(store.roguelikes.len(), 5);
        assert_eq!(store.roguelikes.get("hades 2"), Some("1145350"));
        assert!(store.launch_options.is_empty());
    }

    #[test]
    fn open_reads_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STEAM_GAMES_FILE), r#"{"celeste": "504230"}"#).unwrap();
        std::fs::write(dir.path().join(LAUNCH_OPTIONS_FILE), r#"{"504230": "-windowed"}"#)
            .unwrap();

        let store = CatalogStore::open(dir.path()).unwrap();
        assert_eq!(store.steam.get("celeste"), Some("504230"));
        assert_eq!(store.launch_option("504230"), Some("-windowed"));
    }

    // ── lookup ──────────────────────────────────────────────────────

    #[test]
    fn lookup_prefers_steam() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let entry = store.lookup("Fortnite").unwrap();
        assert_eq!(entry.platform, StorePlatform::Steam);
        assert_eq!(entry.identifier, "steam-fortnite");
    }

    #[test]
    fn lookup_falls_through_to_epic() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let entry = store.lookup("alan wake 2").unwrap();
        assert_eq!(entry.platform, StorePlatform::Epic);
        assert_eq!(entry.identifier, "Dill");
        assert!(store.lookup("celeste").is_none());
    }

    // ── titles / listing ────────────────────────────────────────────

    #[test]
    fn titles_are_steam_then_epic_without_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert_eq!(
            store.titles(),
            vec!["fortnite", "hades", "slay the spire", "alan wake 2"]
        );
    }

    #[test]
    fn listing_all_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert_eq!(
            store.listing(Library::All),
            vec!["alan wake 2", "fortnite", "hades", "slay the spire"]
        );
        assert_eq!(store.listing(Library::Epic), vec!["alan wake 2", "fortnite"]);
    }

    // ── persistence ─────────────────────────────────────────────────

    #[test]
    fn merge_steam_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let fetched: Catalog = [("celeste", "504230"), ("hades", "1145360")].into_iter().collect();
        let added = store.merge_steam(fetched).unwrap();
        assert_eq!(added, 1);

        let reopened = CatalogStore::open(dir.path()).unwrap();
        assert_eq!(reopened.steam.get("celeste"), Some("504230"));
        assert_eq!(reopened.steam.len(), 4);
    }

    #[test]
    fn blank_launch_option_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.launch_options.insert("646570", "  ");
        assert_eq!(store.launch_option("646570"), None);
    }

    #[test]
    fn pick_roguelike_is_deterministic_for_a_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path()).unwrap();

        let a = store.pick_roguelike(&mut fastrand::Rng::with_seed(7)).unwrap();
        let b = store.pick_roguelike(&mut fastrand::Rng::with_seed(7)).unwrap();
        assert_eq!(a, b);
        assert!(store.roguelikes.get(&a).is_some());
    }

    #[test]
    fn pick_roguelike_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.pick_roguelike(&mut fastrand::Rng::new()).is_none());
    }
}
