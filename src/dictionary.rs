//! Word lists the extractors consult. Loaded once and shared read-only.

use crate::error::{ResolverError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Known first names. Keeps load order so tie-breaks stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct FirstNames {
    ordered: Vec<String>,
    lowered: HashSet<String>,
}

impl FirstNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut lowered = HashSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if lowered.insert(name.to_lowercase()) {
                ordered.push(name.to_string());
            }
        }
        Self { ordered, lowered }
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.lowered.contains(&word.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Ordinary English words stripped from page text before name hunting.
#[derive(Debug, Clone, Default)]
pub struct CommonWords(HashSet<String>);

impl CommonWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Organization and product tokens. Matched literally, after trimming.
#[derive(Debug, Clone, Default)]
pub struct BrandNames(Vec<String>);

impl BrandNames {
    pub fn new<I, S>(brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for brand in brands {
            let brand = brand.as_ref().trim();
            // a blank entry would be a substring of every url
            if !brand.is_empty() && seen.insert(brand.to_string()) {
                ordered.push(brand.to_string());
            }
        }
        Self(ordered)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|b| b == token)
    }

    /// Brands occurring anywhere inside `text`.
    pub fn found_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().map(String::as_str).filter(move |b| text.contains(b))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The three corpora consumed by one resolver.
#[derive(Debug, Clone, Default)]
pub struct NameDictionaries {
    pub first_names: FirstNames,
    pub common_words: CommonWords,
    pub brand_names: BrandNames,
}

impl NameDictionaries {
    pub fn new(first_names: FirstNames, common_words: CommonWords, brand_names: BrandNames) -> Self {
        Self {
            first_names,
            common_words,
            brand_names,
        }
    }

    /// Reads one entry per line from each file.
    pub fn load(
        first_names: impl AsRef<Path>,
        common_words: impl AsRef<Path>,
        brand_names: impl AsRef<Path>,
    ) -> Result<Self> {
        let dictionaries = Self::new(
            FirstNames::new(read_lines(first_names.as_ref())?),
            CommonWords::new(read_lines(common_words.as_ref())?),
            BrandNames::new(read_lines(brand_names.as_ref())?),
        );
        info!(
            "Loaded dictionaries: {} first names, {} common words, {} brand names",
            dictionaries.first_names.len(),
            dictionaries.common_words.len(),
            dictionaries.brand_names.len()
        );
        Ok(dictionaries)
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ResolverError::Config(format!("Failed to read dictionary '{}': {}", path.display(), e))
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
