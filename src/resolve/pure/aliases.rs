//! Abbreviation -> canonical title lookup

use std::collections::HashMap;

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("tf2", "team fortress 2"),
    ("csgo", "counter-strike: global offensive"),
    ("gta5", "grand theft auto v"),
    ("gtav", "grand theft auto v"),
    ("pubg", "playerunknown's battlegrounds"),
    ("dota", "dota 2"),
    ("lol", "league of legends"),
    ("wow", "world of warcraft"),
    ("r6", "tom clancy's rainbow six siege"),
    ("r6s", "tom clancy's rainbow six siege"),
    ("sts", "slay the spire"),
];

/// Immutable once built.
#[derive(Clone, Debug)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ALIASES.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(alias, title)| (alias.to_lowercase(), title.to_lowercase()))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.entries.get(&alias.to_lowercase()).map(String::as_str)
    }
}
