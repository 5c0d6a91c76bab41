use thiserror::Error;

pub const CONTRIBUTOR_NOT_FOUND: &str = "There is no contributor with the ID that you requested.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("Upstream fetch error: {0}")]
    UpstreamFetch(String),
}

impl DomainError {
    pub fn contributor_not_found() -> Self {
        DomainError::NotFound(CONTRIBUTOR_NOT_FOUND.to_string())
    }
}
