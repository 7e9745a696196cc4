//! Walks the candidate URLs for a company and folds every extraction into one
//! contact identity.

use crate::classifier::{classify_link, BrandMatchMode, LinkClass, SiteQueries};
use crate::config::Config;
use crate::dictionary::NameDictionaries;
use crate::domain_label::domain_label_of;
use crate::error::{ResolverError, Result};
use crate::extractors::{extract_from_page_text, match_username, parse_vanity_url};
use crate::ports::{FetchedPage, PageFetchPort, SearchPort};
use crate::types::{CandidateOutcome, Company, ContactIdentity, IdentityDraft, Resolution, SkipReason};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Knobs that shape one resolution run.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub search_query: String,
    pub max_results: usize,
    pub sites: SiteQueries,
    pub brand_match: BrandMatchMode,
    pub reject_brand_surnames: bool,
}

impl ResolverSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            search_query: config.search.query.clone(),
            max_results: config.search.max_results,
            sites: config.site_queries()?,
            brand_match: config.resolver.brand_match,
            reject_brand_surnames: config.resolver.reject_brand_surnames,
        })
    }
}

pub struct IdentityResolver<S, F> {
    search: S,
    fetcher: F,
    dictionaries: Arc<NameDictionaries>,
    settings: ResolverSettings,
}

impl<S: SearchPort, F: PageFetchPort> IdentityResolver<S, F> {
    pub fn new(
        search: S,
        fetcher: F,
        dictionaries: Arc<NameDictionaries>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            search,
            fetcher,
            dictionaries,
            settings,
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// `"<company>" <configured query>`
    pub fn search_query_for(&self, company: &Company) -> String {
        format!("\"{}\" {}", company.name, self.settings.search_query)
    }

    /// Searches for candidate URLs and resolves them. Never fails: a failed
    /// search behaves like an empty result list.
    #[instrument(skip(self, company), fields(company = %company.name))]
    pub async fn resolve_contact(&self, company: &Company) -> ContactIdentity {
        let query = self.search_query_for(company);
        let candidates = match self.search.search(&query, self.settings.max_results).await {
            Ok(urls) => urls,
            Err(e) => {
                error!(company = %company.name, error = %e, "Search failed, no candidates to resolve");
                Vec::new()
            }
        };
        self.resolve_candidates(company, &candidates).await
    }

    /// Processes candidates in order. Each match overwrites what earlier
    /// candidates produced; skipped candidates change nothing.
    pub async fn resolve_candidates(&self, company: &Company, candidates: &[String]) -> ContactIdentity {
        let mut draft = IdentityDraft::default();

        for url in candidates.iter().take(self.settings.max_results) {
            info!("Getting: {} | {}", url, company.name);
            let outcome = self.resolve_candidate(url).await;
            match &outcome {
                CandidateOutcome::Matched(resolution) => {
                    debug!(url = %url, ?resolution, "Candidate resolved");
                }
                CandidateOutcome::Skipped(SkipReason::Reserved) => {
                    warn!("Skipping: {}, as it is a reserved url.", url);
                }
                CandidateOutcome::Skipped(SkipReason::Failed(e)) => {
                    error!(
                        url = %url,
                        company = %company.name,
                        kind = ?e.kind(),
                        "Skipping candidate: {}",
                        e
                    );
                }
            }
            draft = draft.apply(&outcome);
        }

        let contact = draft.finish(company);
        if contact.is_sentinel() {
            info!("No contact resolved for {}", company.name);
        }
        contact
    }

    /// Classifies one URL and runs the matching extractor.
    pub async fn resolve_candidate(&self, url: &str) -> CandidateOutcome {
        let class = classify_link(
            url,
            &self.settings.sites,
            &self.dictionaries.brand_names,
            self.settings.brand_match,
        );
        debug!(url = %url, class = %class, "Classified link");

        match class {
            LinkClass::ProfessionalNetwork => {
                parse_vanity_url(url, &self.dictionaries.first_names)
                    .map(Resolution::Full)
                    .into()
            }
            LinkClass::Reserved => CandidateOutcome::Skipped(SkipReason::Reserved),
            LinkClass::BrandAssociated => {
                debug!("Brand matches found...");
                self.names_from_page(url).await.into()
            }
            LinkClass::Generic => match self.names_from_domain_label(url) {
                Ok(found) => CandidateOutcome::Matched(found),
                Err(e) => {
                    debug!(url = %url, "Domain label unusable ({}), reading the page instead", e);
                    self.names_from_page(url).await.into()
                }
            },
        }
    }

    fn names_from_domain_label(&self, url: &str) -> Result<Resolution> {
        let label = domain_label_of(url);
        if label.is_empty() {
            return Err(ResolverError::ClassificationFailure(format!(
                "no registrable domain label in '{}'",
                url
            )));
        }
        match_username(&label, &self.dictionaries.first_names).map(Resolution::Full)
    }

    async fn names_from_page(&self, url: &str) -> Result<Resolution> {
        match self.fetcher.fetch(url, true).await? {
            FetchedPage::Html(page) => extract_from_page_text(
                &page.visible_text(),
                &self.dictionaries,
                self.settings.reject_brand_surnames,
            ),
            FetchedPage::Json(_) => Err(ResolverError::MalformedResponse(format!(
                "expected an HTML page from '{}'",
                url
            ))),
        }
    }
}
