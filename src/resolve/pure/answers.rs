//! Interpreting the user's answers (pure)

/// Answers to "did you mean" that cancel: n/no plus the keys around `n` on
/// a QWERTY keyboard.
pub const NEGATIVE_ANSWERS: [&str; 6] = ["n", "no", "m", "b", "h", "j"];

pub fn is_negative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    NEGATIVE_ANSWERS.contains(&answer.as_str())
}

/// Outcome of a numbered-menu answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the options
    Index(usize),
    Cancel,
    Invalid,
}

/// `count` options are numbered from 1. `c` cancels.
pub fn parse_selection(answer: &str, count: usize) -> Selection {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("c") {
        return Selection::Cancel;
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Selection::Index(n - 1),
        _ => Selection::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negatives() {
        for answer in ["n", "No", " N ", "m", "b", "h", "j"] {
            assert!(is_negative(answer), "{answer:?} should decline");
        }
    }

    #[test]
    fn everything_else_confirms() {
        for answer in ["", "y", "yes", "nope", "k", "1"] {
            assert!(!is_negative(answer), "{answer:?} should confirm");
        }
    }

    #[test]
    fn selection_is_one_based() {
        assert_eq!(parse_selection("1", 3), Selection::Index(0));
        assert_eq!(parse_selection(" 3 ", 3), Selection::Index(2));
    }

    #[test]
    fn selection_cancel() {
        assert_eq!(parse_selection("c", 2), Selection::Cancel);
        assert_eq!(parse_selection("C", 2), Selection::Cancel);
    }

    #[test]
    fn selection_out_of_range_or_garbage() {
        assert_eq!(parse_selection("0", 2), Selection::Invalid);
        assert_eq!(parse_selection("3", 2), Selection::Invalid);
        assert_eq!(parse_selection("-1", 2), Selection::Invalid);
        assert_eq!(parse_selection("two", 2), Selection::Invalid);
        assert_eq!(parse_selection("", 2), Selection::Invalid);
    }
}
