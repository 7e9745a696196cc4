use crate::dictionary::FirstNames;
use crate::error::{ResolverError, Result};
use crate::lexical::title_case;
use crate::types::NameMatch;
use tracing::debug;

/// Splits a bare username or domain label into first and last name.
///
/// Every dictionary name that is a case-insensitive prefix of the token is a
/// candidate. The longest one wins (earliest in dictionary order on ties) and
/// the rest of the token is the surname. With no candidate the token is cut at
/// its midpoint, and the surname starts one character early so the halves
/// share a character ("xyzzy" becomes "Xy" / "Yzzy").
pub fn match_username(token: &str, first_names: &FirstNames) -> Result<NameMatch> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ResolverError::NoCandidateFound("empty username".into()));
    }
    let lowered = token.to_lowercase();

    let best = first_names
        .iter()
        .map(str::to_lowercase)
        .filter(|name| lowered.starts_with(name.as_str()))
        .fold(None::<String>, |best, name| match best {
            Some(current) if current.chars().count() >= name.chars().count() => Some(current),
            _ => Some(name),
        });

    match best {
        Some(first) => {
            let remainder = &lowered[first.len()..];
            debug!("Username '{}' starts with first name '{}'", token, first);
            if remainder.is_empty() {
                return Err(ResolverError::NoCandidateFound(format!(
                    "'{}' is a first name with no surname",
                    token
                )));
            }
            Ok(NameMatch::dear(title_case(&first), title_case(remainder)))
        }
        None => split_at_midpoint(token),
    }
}

fn split_at_midpoint(token: &str) -> Result<NameMatch> {
    let chars: Vec<char> = token.chars().collect();
    let mid = chars.len() / 2;
    if mid == 0 {
        return Err(ResolverError::NoCandidateFound(format!(
            "'{}' is too short to split",
            token
        )));
    }
    let first: String = chars[..mid].iter().collect();
    let last: String = chars[mid - 1..].iter().collect();
    debug!("No first name prefix in '{}', split at midpoint", token);
    Ok(NameMatch::dear(title_case(&first), title_case(&last)))
}
