pub mod classifier;
pub mod config;
pub mod constants;
pub mod dictionary;
pub mod domain_label;
pub mod error;
pub mod extractors;
pub mod lexical;
pub mod logging;
pub mod resolver;
pub mod types;

// Collaborator boundaries and their HTTP-backed adapters
pub mod infra;
pub mod ports;

pub use resolver::{IdentityResolver, ResolverSettings};
pub use types::{Company, ContactIdentity, Greeting};
