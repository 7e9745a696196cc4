use crate::dictionary::FirstNames;
use crate::error::{ResolverError, Result};
use crate::extractors::username::match_username;
use crate::lexical::{contains_digit, extract_vanity_slug, title_case};
use crate::types::NameMatch;
use tracing::{debug, info};

/// Resolves a professional-network profile URL from its vanity slug.
///
/// - no dash: the slug goes through the username matcher
/// - one dash: `first-last`
/// - more dashes: `first-middle-rest`; a digit in `rest` marks it as a profile
///   id, so `middle` becomes the surname. Otherwise `rest` is the surname and
///   the first name stays as it is.
pub fn parse_vanity_url(url: &str, first_names: &FirstNames) -> Result<NameMatch> {
    let slug = extract_vanity_slug(url);
    let dashes = slug.matches('-').count();
    info!("{} dashes found in vanity slug '{}'", dashes, slug);

    let (first, last) = match dashes {
        0 => return match_username(&slug, first_names),
        1 => slug.split_once('-').unwrap_or((slug.as_str(), "")),
        _ => {
            let mut parts = slug.splitn(3, '-');
            let first = parts.next().unwrap_or_default();
            let middle = parts.next().unwrap_or_default();
            let rest = parts.next().unwrap_or_default();
            if contains_digit(rest) {
                debug!("Dropping id-like suffix '{}' from '{}'", rest, slug);
                (first, middle)
            } else {
                // TODO: consider "first middle" as the first name for three-part slugs
                (first, rest)
            }
        }
    };

    if first.trim().is_empty() || last.trim().is_empty() {
        return Err(ResolverError::NoCandidateFound(format!(
            "vanity slug '{}' has an empty name part",
            slug
        )));
    }
    Ok(NameMatch::dear(title_case(first.trim()), title_case(last.trim())))
}
