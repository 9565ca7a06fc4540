use crate::catalog::Library;

/// Capitalise the first letter of every alphabetic run, the way titles are
/// shown to the user ("playerunknown's" becomes "Playerunknown'S").
pub fn title_case(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_alpha = false;
    for c in title.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Lines printed by `list`.
pub fn listing_lines(library: Library, titles: &[String]) -> Vec<String> {
    if titles.is_empty() {
        return vec![format!("No games found in the {} library.", library.display())];
    }
    let mut lines = Vec::with_capacity(titles.len() + 1);
    lines.push(format!("Games in your {} library:", library.display()));
    lines.extend(titles.iter().map(|t| format!("- {}", title_case(t))));
    lines
}

pub fn print_listing(library: Library, titles: &[String]) {
    for line in listing_lines(library, titles) {
        println!("{line}");
    }
}
