use super::entity::ContributorRecord;
use super::errors::DomainError;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the upstream contributor list.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContributorSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ContributorRecord>, DomainError>;
}
