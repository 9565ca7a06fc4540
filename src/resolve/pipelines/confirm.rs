//! Resolution pipeline: run the cascade, then settle on one title with the user

use crate::catalog::{CatalogStore, Library};
use crate::error::{CancelReason, ResolveError};
use crate::prompt::Prompter;
use crate::resolve::pure::answers::{Selection, is_negative, parse_selection};
use crate::resolve::pure::{AliasTable, find_matches};
use crate::util::title_case;

/// Resolve `query` to a single catalog title.
///
/// - no candidates: `NotFound` carrying the sorted catalog listing
/// - one candidate: accepted silently if it is the query itself, otherwise
///   confirmed with "did you mean"
/// - several: numbered menu, one attempt
pub fn resolve_and_confirm(
    query: &str,
    store: &CatalogStore,
    aliases: &AliasTable,
    prompter: &mut dyn Prompter,
) -> Result<String, ResolveError> {
    let query = query.trim().to_lowercase();
    let matches = find_matches(&query, &store.steam_titles(), &store.epic_titles(), aliases);
    log::debug!("'{}' -> {:?} {:?}", query, matches.tier, matches.titles);

    match matches.titles.as_slice() {
        [] => Err(ResolveError::NotFound {
            query,
            known: store.listing(Library::All),
        }),
        [only] => {
            if *only == query {
                return Ok(only.clone());
            }
            let answer = prompter.ask(&format!("Did you mean '{}'? (y/n)", title_case(only)))?;
            if is_negative(&answer) {
                Err(ResolveError::Cancelled(CancelReason::Declined))
            } else {
                Ok(only.clone())
            }
        }
        many => {
            let options: Vec<String> = many.iter().map(|t| title_case(t)).collect();
            let answer = prompter.choose(
                &format!("Multiple matches found for '{query}':"),
                &options,
                "Enter the number of the game you want to launch (or 'c' to cancel)",
            )?;
            match parse_selection(&answer, many.len()) {
                Selection::Index(i) => Ok(many[i].clone()),
                Selection::Cancel => Err(ResolveError::Cancelled(CancelReason::Cancelled)),
                Selection::Invalid => Err(ResolveError::Cancelled(CancelReason::InvalidChoice(
                    answer.trim().to_string(),
                ))),
            }
        }
    }
}
