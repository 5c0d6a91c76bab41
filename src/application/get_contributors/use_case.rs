use super::dto::GetContributorsRequest;
use crate::domain::contributor::{
    entity::ContributorResource, errors::DomainError, ordering::sort_contributors,
    repository::ContributorSource,
};
use std::sync::Arc;

pub struct GetContributorsUseCase {
    source: Arc<dyn ContributorSource>,
}

impl GetContributorsUseCase {
    pub fn new(source: Arc<dyn ContributorSource>) -> Self {
        Self { source }
    }

    pub async fn execute(
        &self,
        request: GetContributorsRequest,
    ) -> Result<Vec<ContributorResource>, DomainError> {
        let mut records = self.source.fetch_all().await?;
        tracing::debug!(count = records.len(), "fetched contributor records");

        if let Some(id) = request.id.as_deref() {
            records.retain(|record| record.github == id);
            if records.is_empty() {
                return Err(DomainError::contributor_not_found());
            }
        }

        sort_contributors(&mut records);

        Ok(records.into_iter().map(ContributorResource::from).collect())
    }
}
