//! String primitives shared by the name extractors.

use crate::constants::VANITY_PATH_MARKER;
use crate::domain_label::domain_label_of;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));

/// Splits a token at ASCII uppercase boundaries.
///
/// A segment is either one uppercase letter followed by lowercase letters
/// ("Smith"), or an uppercase run that ends where another uppercase letter
/// starts a new word or the token ends ("ABC" in "ABCDef"). Characters that
/// belong to no segment (leading lowercase, digits, punctuation) are dropped.
pub fn split_camel_case(token: &str) -> Vec<&str> {
    let bytes = token.as_bytes();
    let len = bytes.len();
    let mut segments = Vec::new();
    let mut i = 0;

    while i < len {
        if !bytes[i].is_ascii_uppercase() {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        while end < len && bytes[end].is_ascii_lowercase() {
            end += 1;
        }
        if end > i + 1 {
            segments.push(&token[start..end]);
            i = end;
            continue;
        }

        // Uppercase run: it must be followed by another uppercase letter or the end.
        while end < len && bytes[end].is_ascii_uppercase() {
            end += 1;
        }
        if end == len {
            segments.push(&token[start..end]);
            i = end;
        } else if end > i + 1 {
            // give the last capital back to the word that follows
            segments.push(&token[start..end - 1]);
            i = end - 1;
        } else {
            i += 1;
        }
    }

    segments
}

/// Pairs every occurrence of `anchor` with the first camel-case segment of the
/// token right after it. Occurrences at the end of the sequence, or followed by
/// a token with no segment, produce no pair.
pub fn pair_with_next_token(tokens: &[&str], anchor: &str) -> Vec<(String, String)> {
    tokens
        .windows(2)
        .filter(|pair| pair[0] == anchor)
        .filter_map(|pair| {
            split_camel_case(pair[1])
                .first()
                .map(|segment| (pair[0].to_string(), segment.to_string()))
        })
        .collect()
}

/// Returns the vanity slug of a profile URL, or the registrable domain label
/// when the URL has no `/in/` segment.
pub fn extract_vanity_slug(url: &str) -> String {
    match url.split_once(VANITY_PATH_MARKER) {
        Some((_, rest)) => {
            let end = rest.find(|c| c == '?' || c == '/').unwrap_or(rest.len());
            rest[..end].trim().to_string()
        }
        None => domain_label_of(url),
    }
}

/// Capitalizes the first letter of every word and lowercases the rest. A word
/// starts at the beginning of the string or after any non-letter character.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

pub fn contains_digit(text: &str) -> bool {
    DIGIT_RE.is_match(text)
}
