use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storefront a title launches through
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorePlatform {
    Steam,
    Epic,
}

impl StorePlatform {
    pub fn display(&self) -> &'static str {
        match self {
            StorePlatform::Steam => "Steam",
            StorePlatform::Epic => "Epic Games",
        }
    }
}

/// A catalog hit: which store owns the title and under what identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub identifier: String,
    pub platform: StorePlatform,
}

/// Which catalogs `list` shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Library {
    Steam,
    Epic,
    All,
}

impl Library {
    pub fn display(&self) -> &'static str {
        match self {
            Library::Steam => "Steam",
            Library::Epic => "Epic",
            Library::All => "All",
        }
    }
}

/// Lowercase title -> platform identifier.
///
/// Keys are always stored lowercased; iteration is alphabetical.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<String, String>);

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, lowercasing the title. Returns the previous identifier.
    pub fn insert(&mut self, title: &str, identifier: impl Into<String>) -> Option<String> {
        self.0.insert(title.to_lowercase(), identifier.into())
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.0.get(&title.to_lowercase()).map(String::as_str)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `other` into self; entries from `other` win.
    /// Returns how many titles were not present before.
    pub fn merge(&mut self, other: Catalog) -> usize {
        let mut added = 0;
        for (title, id) in other.0 {
            if self.0.insert(title, id).is_none() {
                added += 1;
            }
        }
        added
    }

    /// Re-key a freshly deserialized catalog so that hand-edited files with
    /// mixed-case titles still obey the lowercase invariant.
    pub fn normalized(self) -> Self {
        self.0.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (title, id) in iter {
            catalog.insert(title.as_ref(), id);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased() {
        let mut catalog = Catalog::new();
        catalog.insert("Slay The Spire", "646570");
        assert_eq!(catalog.titles().collect::<Vec<_>>(), vec!["slay the spire"]);
        assert_eq!(catalog.get("SLAY THE SPIRE"), Some("646570"));
        assert!(catalog.get("slay the spire").is_some());
    }

    #[test]
    fn merge_overwrites_and_counts_new() {
        let mut existing: Catalog = [("hades", "1"), ("peglin", "2")].into_iter().collect();
        let fetched: Catalog = [("hades", "1145360"), ("celeste", "504230")].into_iter().collect();

        let added = existing.merge(fetched);
        assert_eq!(added, 1);
        assert_eq!(existing.get("hades"), Some("1145360"));
        assert_eq!(existing.len(), 3);
    }

    #[test]
    fn normalized_rekeys_mixed_case() {
        let raw: Catalog = serde_json::from_str(r#"{ "Hollow Knight": "367520" }"#).unwrap();
        assert!(raw.titles().any(|t| t == "Hollow Knight"));
        let catalog = raw.normalized();
        assert_eq!(catalog.titles().collect::<Vec<_>>(), vec!["hollow knight"]);
    }
}
