use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Could not classify link: {0}")]
    ClassificationFailure(String),

    #[error("No name candidate found: {0}")]
    NoCandidateFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse failure category, used when logging skipped candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    MalformedResponse,
    ClassificationFailure,
    NoCandidateFound,
    Setup,
}

impl ResolverError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolverError::NetworkFailure(_) | ResolverError::Http(_) => ErrorKind::NetworkFailure,
            ResolverError::MalformedResponse(_) | ResolverError::Json(_) => {
                ErrorKind::MalformedResponse
            }
            ResolverError::ClassificationFailure(_) => ErrorKind::ClassificationFailure,
            ResolverError::NoCandidateFound(_) => ErrorKind::NoCandidateFound,
            ResolverError::Toml(_) | ResolverError::Io(_) | ResolverError::Config(_) => {
                ErrorKind::Setup
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;
