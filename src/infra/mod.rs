pub mod page_fetcher;
pub mod search_client;

pub use page_fetcher::ReqwestPageFetcher;
pub use search_client::HtmlSearchClient;
