/// Stage of the match cascade that produced a result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Alias,
    /// Substring hit for the transform at this index of `TRANSFORMS`
    Transform(usize),
    Fuzzy,
    /// Every tier came up empty
    None,
}

/// Ordered, duplicate-free candidate titles for one query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matches {
    pub tier: MatchTier,
    pub titles: Vec<String>,
}

impl Matches {
    pub fn none() -> Self {
        Self {
            tier: MatchTier::None,
            titles: Vec::new(),
        }
    }

    pub fn single(tier: MatchTier, title: &str) -> Self {
        Self {
            tier,
            titles: vec![title.to_string()],
        }
    }
}
