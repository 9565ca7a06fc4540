//! Fuzzy fallback: normalized Levenshtein similarity

use strsim::normalized_levenshtein;

pub const FUZZY_CUTOFF: f64 = 0.6;
pub const FUZZY_LIMIT: usize = 3;

/// Similarity in `0.0..=1.0`, ignoring case.
pub fn similarity(query: &str, title: &str) -> f64 {
    normalized_levenshtein(&query.to_lowercase(), &title.to_lowercase())
}

/// Up to `limit` titles scoring at least `cutoff`, best first. Equal scores
/// keep the order of `titles`.
pub fn closest<'a>(query: &str, titles: &'a [String], limit: usize, cutoff: f64) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &str)> = titles
        .iter()
        .map(|t| (similarity(query, t), t.as_str()))
        .filter(|(score, _)| *score >= cutoff)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, t)| t).collect()
}
