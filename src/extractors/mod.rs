pub mod page_text;
pub mod username;
pub mod vanity;

pub use page_text::extract_from_page_text;
pub use username::match_username;
pub use vanity::parse_vanity_url;
