/// Greeting and names used when no candidate resolves to a person.
/// Callers treat "Whom It May Concern" as the explicit non-resolution marker.
pub const SENTINEL_FIRST: &str = "Whom It";
pub const SENTINEL_LAST: &str = "May Concern";

/// Candidate budget handed to the search collaborator.
pub const DEFAULT_MAX_RESULTS: usize = 3;

// Minimum pauses before outbound requests, in milliseconds
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 4000;
pub const DEFAULT_FETCH_DELAY_MS: u64 = 1500;
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 20;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
pub const DEFAULT_RESULT_SELECTOR: &str = "a.result__a";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "CONTACT_SCRAPER_CONFIG";

/// Path segment that introduces a vanity slug on a profile URL.
pub const VANITY_PATH_MARKER: &str = "/in/";

/// Number of reserved markers that follow the professional-network marker.
pub const RESERVED_MARKER_COUNT: usize = 3;
