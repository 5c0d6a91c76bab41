use crate::{config::Config, domain::contributor::repository::ContributorSource};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub contributor_source: Arc<dyn ContributorSource>,
}
