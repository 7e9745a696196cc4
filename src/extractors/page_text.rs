use crate::dictionary::NameDictionaries;
use crate::error::{ResolverError, Result};
use crate::lexical::{pair_with_next_token, title_case};
use crate::types::{NameMatch, Resolution};
use tracing::{debug, info};

/// Finds a first/last name pair in the visible text of a page.
///
/// Ordinary words are dropped first. The longest remaining token that is a
/// known first name is taken (earliest on ties), and each token that follows
/// it contributes its first camel-case segment as a surname candidate. The
/// last acceptable candidate wins. Without any surname only the first name is
/// reported.
pub fn extract_from_page_text(
    text: &str,
    dictionaries: &NameDictionaries,
    reject_brand_surnames: bool,
) -> Result<Resolution> {
    let body: Vec<&str> = text
        .split_whitespace()
        .filter(|word| !dictionaries.common_words.contains(word))
        .collect();

    let first = body
        .iter()
        .copied()
        .filter(|word| !word.is_empty() && dictionaries.first_names.contains(word))
        .fold(None::<&str>, |best, word| match best {
            Some(current) if current.chars().count() >= word.chars().count() => Some(current),
            _ => Some(word),
        })
        .ok_or_else(|| {
            ResolverError::NoCandidateFound(format!(
                "none of {} page tokens is a known first name",
                body.len()
            ))
        })?;

    let mut surname = None;
    for (_, candidate) in pair_with_next_token(&body, first) {
        if dictionaries.brand_names.contains(&candidate) {
            info!(
                "'{} {}' is for a brand, or is otherwise invalid. We encourage further review.",
                first, candidate
            );
            if reject_brand_surnames {
                continue;
            }
        }
        debug!("Surname candidate '{}' follows '{}'", candidate, first);
        surname = Some(candidate);
    }

    Ok(match surname {
        Some(last) => Resolution::Full(NameMatch::dear(title_case(first), title_case(&last))),
        None => Resolution::FirstNameOnly(title_case(first)),
    })
}
