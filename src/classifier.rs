//! Decides which extractor a candidate URL is routed to.

use crate::constants::RESERVED_MARKER_COUNT;
use crate::dictionary::BrandNames;
use crate::error::{ResolverError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Profile on the professional network; parsed from its vanity slug.
    ProfessionalNetwork,
    /// Never consulted.
    Reserved,
    /// Mentions a brand; the page text is fetched and scanned.
    BrandAssociated,
    /// Anything else; username match on the domain label, then page text.
    Generic,
}

impl fmt::Display for LinkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkClass::ProfessionalNetwork => "professional-network",
            LinkClass::Reserved => "reserved",
            LinkClass::BrandAssociated => "brand-associated",
            LinkClass::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// How the brand branch of the cascade is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrandMatchMode {
    /// Every link that is neither professional-network nor reserved counts as
    /// brand-associated, leaving `Generic` unreachable.
    Always,
    /// Only links containing at least one brand token are brand-associated.
    #[default]
    NonEmpty,
}

/// Ordered domain markers: the professional network first, then up to three
/// reserved prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteQueries {
    pub professional_network: String,
    pub reserved: Vec<String>,
}

impl SiteQueries {
    pub fn from_markers(markers: &[String]) -> Result<Self> {
        let (professional_network, rest) = markers
            .split_first()
            .ok_or_else(|| ResolverError::Config("site markers must not be empty".into()))?;
        if professional_network.trim().is_empty() {
            return Err(ResolverError::Config(
                "professional-network marker must not be blank".into(),
            ));
        }
        let reserved = rest
            .iter()
            .take(RESERVED_MARKER_COUNT)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        Ok(Self {
            professional_network: professional_network.trim().to_string(),
            reserved,
        })
    }
}

/// Classifies `url`, checking in priority order: professional network,
/// reserved prefix, brand substring, generic.
pub fn classify_link(
    url: &str,
    sites: &SiteQueries,
    brands: &BrandNames,
    mode: BrandMatchMode,
) -> LinkClass {
    if url.contains(&sites.professional_network) {
        return LinkClass::ProfessionalNetwork;
    }
    if sites.reserved.iter().any(|marker| url.starts_with(marker.as_str())) {
        return LinkClass::Reserved;
    }
    let brand_hit = match mode {
        BrandMatchMode::Always => true,
        BrandMatchMode::NonEmpty => brands.found_in(url).next().is_some(),
    };
    if brand_hit {
        LinkClass::BrandAssociated
    } else {
        LinkClass::Generic
    }
}
