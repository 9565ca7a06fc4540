//! The match cascade
//!
//! Tiers run in a fixed order and the first one that produces anything wins:
//! 1. exact (case-insensitive equality)
//! 2. alias (abbreviation whose canonical title is catalogued)
//! 3. transformed substring, one transform at a time in `TRANSFORMS` order
//! 4. fuzzy similarity, at most three titles
//!
//! Candidates follow catalog order: Steam titles, then Epic titles, each
//! alphabetical. Fuzzy results are re-ordered by score.

use super::aliases::AliasTable;
use super::fuzzy::{FUZZY_CUTOFF, FUZZY_LIMIT, closest};
use super::normalize::TRANSFORMS;
use crate::resolve::types::{MatchTier, Matches};

use std::collections::HashSet;

/// Run the cascade for `query` over the union of both catalogs.
pub fn find_matches(
    query: &str,
    steam_titles: &[String],
    epic_titles: &[String],
    aliases: &AliasTable,
) -> Matches {
    let union = union_titles(steam_titles, epic_titles);
    match_titles(query, &union, aliases)
}

fn union_titles(steam_titles: &[String], epic_titles: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    steam_titles
        .iter()
        .chain(epic_titles)
        .filter(|t| seen.insert(t.to_lowercase()))
        .cloned()
        .collect()
}

/// Cascade over an already ordered, duplicate-free title list.
pub fn match_titles(query: &str, titles: &[String], aliases: &AliasTable) -> Matches {
    let query = query.trim();
    if query.is_empty() {
        return Matches::none();
    }
    let lowered = query.to_lowercase();

    if let Some(title) = titles.iter().find(|t| t.to_lowercase() == lowered) {
        return Matches::single(MatchTier::Exact, title);
    }

    if let Some(canonical) = aliases.lookup(&lowered)
        && let Some(title) = titles.iter().find(|t| t.to_lowercase() == canonical)
    {
        return Matches::single(MatchTier::Alias, title);
    }

    for (i, transform) in TRANSFORMS.iter().enumerate() {
        let needle = transform.apply(query).to_lowercase();
        let hits: Vec<String> = titles
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        if !hits.is_empty() {
            log::debug!("'{}' matched via {} as '{}'", query, transform.name(), needle);
            return Matches {
                tier: MatchTier::Transform(i),
                titles: hits,
            };
        }
    }

    let fuzzy = closest(&lowered, titles, FUZZY_LIMIT, FUZZY_CUTOFF);
    if fuzzy.is_empty() {
        return Matches::none();
    }
    Matches {
        tier: MatchTier::Fuzzy,
        titles: fuzzy.into_iter().map(str::to_string).collect(),
    }
}
