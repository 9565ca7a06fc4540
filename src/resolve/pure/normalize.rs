//! Title normalization transforms
//!
//! Each transform is applied to the raw query on its own; they are never
//! chained. The list order is significant: the substring tier stops at the
//! first transform that hits anything.

/// One normalization applied to a query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    Identity,
    Lowercase,
    StripWhitespace,
    /// Replace every occurrence of `digits` with `roman`
    Numeral {
        digits: &'static str,
        roman: &'static str,
    },
}

const fn numeral(digits: &'static str, roman: &'static str) -> Transform {
    Transform::Numeral { digits, roman }
}

/// `"10"` comes last, after the single digits.
pub const TRANSFORMS: [Transform; 12] = [
    Transform::Identity,
    Transform::Lowercase,
    Transform::StripWhitespace,
    numeral("2", "ii"),
    numeral("3", "iii"),
    numeral("4", "iv"),
    numeral("5", "v"),
    numeral("6", "vi"),
    numeral("7", "vii"),
    numeral("8", "viii"),
    numeral("9", "ix"),
    numeral("10", "x"),
];

impl Transform {
    pub fn apply(&self, input: &str) -> String {
        match self {
            Transform::Identity => input.to_string(),
            Transform::Lowercase => input.to_lowercase(),
            Transform::StripWhitespace => input.chars().filter(|c| !c.is_whitespace()).collect(),
            Transform::Numeral { digits, roman } => input.replace(*digits, roman),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Transform::Identity => "identity".to_string(),
            Transform::Lowercase => "lowercase".to_string(),
            Transform::StripWhitespace => "strip-whitespace".to_string(),
            Transform::Numeral { digits, roman } => format!("{digits}->{roman}"),
        }
    }
}
