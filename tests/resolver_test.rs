#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use contact_scraper::classifier::{BrandMatchMode, SiteQueries};
    use contact_scraper::dictionary::{BrandNames, CommonWords, FirstNames, NameDictionaries};
    use contact_scraper::error::{ResolverError, Result};
    use contact_scraper::ports::{FetchedPage, PageDocument, PageFetchPort, SearchPort, StaticSearch};
    use contact_scraper::types::{CandidateOutcome, Resolution, SkipReason};
    use contact_scraper::{Company, ContactIdentity, Greeting, IdentityResolver, ResolverSettings};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    enum FakePage {
        Html(&'static str),
        Json(serde_json::Value),
        Down,
    }

    #[derive(Default)]
    struct FakeFetcher {
        pages: HashMap<String, FakePage>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        fn with(mut self, url: &str, page: FakePage) -> Self {
            self.pages.insert(url.to_string(), page);
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetchPort for FakeFetcher {
        async fn fetch(&self, url: &str, _parse_as_html: bool) -> Result<FetchedPage> {
            self.requested.lock().unwrap().push(url.to_string());
            match self.pages.get(url) {
                Some(FakePage::Html(html)) => Ok(FetchedPage::Html(PageDocument::new(*html))),
                Some(FakePage::Json(value)) => Ok(FetchedPage::Json(value.clone())),
                Some(FakePage::Down) | None => {
                    Err(ResolverError::NetworkFailure(format!("{} unreachable", url)))
                }
            }
        }
    }

    #[async_trait]
    impl<'a> PageFetchPort for &'a FakeFetcher {
        async fn fetch(&self, url: &str, parse_as_html: bool) -> Result<FetchedPage> {
            <FakeFetcher as PageFetchPort>::fetch(*self, url, parse_as_html).await
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl SearchPort for FailingSearch {
        async fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<String>> {
            Err(ResolverError::NetworkFailure("search provider down".into()))
        }
    }

    #[derive(Default)]
    struct RecordingSearch {
        queries: Mutex<Vec<(String, usize)>>,
    }

    #[async_trait]
    impl<'a> SearchPort for &'a RecordingSearch {
        async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
            self.queries.lock().unwrap().push((query.to_string(), max_results));
            Ok(Vec::new())
        }
    }

    fn dictionaries() -> Arc<NameDictionaries> {
        Arc::new(NameDictionaries::new(
            FirstNames::new(["John", "Jane", "Mary", "Max"]),
            CommonWords::new(["the", "team", "meet", "our", "of", "and", "is", "head", "people"]),
            BrandNames::new(["acme"]),
        ))
    }

    fn settings(brand_match: BrandMatchMode) -> ResolverSettings {
        ResolverSettings {
            search_query: "hiring manager".to_string(),
            max_results: 3,
            sites: SiteQueries::from_markers(&[
                "linkedin.com".to_string(),
                "https://www.glassdoor".to_string(),
                "https://www.indeed".to_string(),
                "https://builtin".to_string(),
            ])
            .unwrap(),
            brand_match,
            reject_brand_surnames: true,
        }
    }

    async fn resolve_with(
        urls: &[&str],
        fetcher: &FakeFetcher,
        brand_match: BrandMatchMode,
    ) -> ContactIdentity {
        let resolver = IdentityResolver::new(
            StaticSearch::new(urls.iter().copied()),
            fetcher,
            dictionaries(),
            settings(brand_match),
        );
        resolver.resolve_contact(&Company::new("Acme Corp")).await
    }

    fn assert_contact(contact: &ContactIdentity, greeting: Greeting, first: &str, last: &str) {
        assert_eq!(contact.greeting, greeting);
        assert_eq!(contact.first, first);
        assert_eq!(contact.last, last);
        assert_eq!(contact.fullname, format!("{} {}", first, last));
        assert_eq!(contact.workplace, "Acme Corp");
    }

    #[tokio::test]
    async fn no_candidates_yields_the_sentinel() {
        let fetcher = FakeFetcher::default();
        let contact = resolve_with(&[], &fetcher, BrandMatchMode::NonEmpty).await;
        assert_contact(&contact, Greeting::To, "Whom It", "May Concern");
        assert!(contact.is_sentinel());
    }

    #[tokio::test]
    async fn failed_search_yields_the_sentinel() {
        let fetcher = FakeFetcher::default();
        let resolver = IdentityResolver::new(
            FailingSearch,
            &fetcher,
            dictionaries(),
            settings(BrandMatchMode::NonEmpty),
        );
        let contact = resolver.resolve_contact(&Company::new("Acme Corp")).await;
        assert_contact(&contact, Greeting::To, "Whom It", "May Concern");
    }

    #[tokio::test]
    async fn search_query_quotes_the_company_and_passes_the_budget() {
        let search = RecordingSearch::default();
        let fetcher = FakeFetcher::default();
        let resolver = IdentityResolver::new(
            &search,
            &fetcher,
            dictionaries(),
            settings(BrandMatchMode::NonEmpty),
        );
        resolver.resolve_contact(&Company::new("Acme Corp")).await;
        assert_eq!(
            search.queries.lock().unwrap().as_slice(),
            &[("\"Acme Corp\" hiring manager".to_string(), 3)]
        );
    }

    #[tokio::test]
    async fn profile_url_resolves_from_its_vanity_slug() {
        let fetcher = FakeFetcher::default();
        let contact = resolve_with(
            &["https://www.linkedin.com/in/jane-doe?trk=people"],
            &fetcher,
            BrandMatchMode::NonEmpty,
        )
        .await;
        assert_contact(&contact, Greeting::Dear, "Jane", "Doe");
        assert!(fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn later_successful_candidate_wins() {
        let fetcher = FakeFetcher::default();
        let contact = resolve_with(
            &[
                "https://www.linkedin.com/in/jane-doe",
                "https://www.linkedin.com/in/mary-jane-smith123",
            ],
            &fetcher,
            BrandMatchMode::NonEmpty,
        )
        .await;
        assert_contact(&contact, Greeting::Dear, "Mary", "Jane");
    }

    #[tokio::test]
    async fn reserved_urls_never_change_the_identity() {
        let profile = "https://www.linkedin.com/in/jane-doe";
        let reserved = "https://www.glassdoor.com/Overview/Working-at-Acme";
        for urls in [[reserved, profile], [profile, reserved]] {
            let fetcher = FakeFetcher::default();
            let contact = resolve_with(&urls, &fetcher, BrandMatchMode::Always).await;
            assert_contact(&contact, Greeting::Dear, "Jane", "Doe");
            assert!(fetcher.requested().is_empty());
        }

        let fetcher = FakeFetcher::default();
        let contact = resolve_with(&[reserved], &fetcher, BrandMatchMode::Always).await;
        assert!(contact.is_sentinel());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_previous_match() {
        let fetcher = FakeFetcher::default().with("https://acme.com/team", FakePage::Down);
        let contact = resolve_with(
            &["https://www.linkedin.com/in/jane-doe", "https://acme.com/team"],
            &fetcher,
            BrandMatchMode::NonEmpty,
        )
        .await;
        assert_contact(&contact, Greeting::Dear, "Jane", "Doe");
        assert_eq!(fetcher.requested(), vec!["https://acme.com/team"]);
    }

    #[tokio::test]
    async fn brand_pages_are_read_for_names() {
        let fetcher = FakeFetcher::default().with(
            "https://acme.com/team",
            FakePage::Html("<html><body><h2>Meet our team</h2><p>Max PowerHead of People</p></body></html>"),
        );
        let contact = resolve_with(&["https://acme.com/team"], &fetcher, BrandMatchMode::NonEmpty).await;
        assert_contact(&contact, Greeting::Dear, "Max", "Power");
    }

    #[tokio::test]
    async fn json_instead_of_html_is_skipped() {
        let fetcher = FakeFetcher::default()
            .with("https://acme.com/api", FakePage::Json(serde_json::json!({"name": "Max Power"})));
        let contact = resolve_with(&["https://acme.com/api"], &fetcher, BrandMatchMode::NonEmpty).await;
        assert!(contact.is_sentinel());
    }

    #[tokio::test]
    async fn generic_links_match_the_domain_label_without_fetching() {
        let fetcher = FakeFetcher::default();
        let contact = resolve_with(&["https://johnsmith.com/about"], &fetcher, BrandMatchMode::NonEmpty).await;
        assert_contact(&contact, Greeting::Dear, "John", "Smith");
        assert!(fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn generic_links_without_a_label_fall_back_to_page_text() {
        let fetcher = FakeFetcher::default().with(
            "http://localhost:8080/team",
            FakePage::Html("<p>Jane Doe</p>"),
        );
        let contact = resolve_with(&["http://localhost:8080/team"], &fetcher, BrandMatchMode::NonEmpty).await;
        assert_contact(&contact, Greeting::Dear, "Jane", "Doe");
        assert_eq!(fetcher.requested(), vec!["http://localhost:8080/team"]);
    }

    #[tokio::test]
    async fn always_mode_sends_every_leftover_link_to_the_page_reader() {
        let fetcher = FakeFetcher::default()
            .with("https://johnsmith.com/about", FakePage::Html("<p>Mary Major</p>"));
        let contact = resolve_with(&["https://johnsmith.com/about"], &fetcher, BrandMatchMode::Always).await;
        assert_contact(&contact, Greeting::Dear, "Mary", "Major");
        assert_eq!(fetcher.requested(), vec!["https://johnsmith.com/about"]);
    }

    #[tokio::test]
    async fn first_name_only_page_replaces_just_the_first_name() {
        let fetcher = FakeFetcher::default()
            .with("https://acme.com/blog", FakePage::Html("<p>thanks to max for this</p>"));
        let contact = resolve_with(
            &["https://www.linkedin.com/in/jane-doe", "https://acme.com/blog"],
            &fetcher,
            BrandMatchMode::NonEmpty,
        )
        .await;
        assert_contact(&contact, Greeting::Dear, "Max", "Doe");
    }

    #[tokio::test]
    async fn candidates_beyond_the_budget_are_ignored() {
        let fetcher = FakeFetcher::default();
        let resolver = IdentityResolver::new(
            StaticSearch::default(),
            &fetcher,
            dictionaries(),
            settings(BrandMatchMode::NonEmpty),
        );
        let candidates: Vec<String> = [
            "https://www.linkedin.com/in/jane-doe",
            "https://www.indeed.com/cmp/acme",
            "https://www.glassdoor.com/acme",
            "https://www.linkedin.com/in/john-smith",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let contact = resolver.resolve_candidates(&Company::new("Acme Corp"), &candidates).await;
        assert_contact(&contact, Greeting::Dear, "Jane", "Doe");
    }

    #[tokio::test]
    async fn resolution_is_deterministic() {
        let urls = [
            "https://www.linkedin.com/in/xyzzy",
            "https://acme.com/team",
            "https://janedoe.io",
        ];
        let fetcher = FakeFetcher::default()
            .with("https://acme.com/team", FakePage::Html("<p>Max Power</p>"));
        let first = resolve_with(&urls, &fetcher, BrandMatchMode::NonEmpty).await;
        let second = resolve_with(&urls, &fetcher, BrandMatchMode::NonEmpty).await;
        assert_eq!(first, second);
        assert_contact(&first, Greeting::Dear, "Jane", "Doe");
    }

    #[tokio::test]
    async fn single_candidate_outcomes_are_typed() {
        let fetcher = FakeFetcher::default();
        let resolver = IdentityResolver::new(
            StaticSearch::default(),
            &fetcher,
            dictionaries(),
            settings(BrandMatchMode::NonEmpty),
        );

        match resolver.resolve_candidate("https://www.indeed.com/cmp/acme").await {
            CandidateOutcome::Skipped(SkipReason::Reserved) => {}
            other => panic!("expected reserved skip, got {:?}", other),
        }
        match resolver.resolve_candidate("https://acme.com/gone").await {
            CandidateOutcome::Skipped(SkipReason::Failed(ResolverError::NetworkFailure(_))) => {}
            other => panic!("expected network failure, got {:?}", other),
        }
        match resolver.resolve_candidate("https://www.linkedin.com/in/xyzzy").await {
            CandidateOutcome::Matched(Resolution::Full(found)) => {
                assert_eq!((found.first.as_str(), found.last.as_str()), ("Xy", "Yzzy"));
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }
}
