use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetContributorsRequest {
    /// GitHub login to narrow the listing to a single contributor.
    pub id: Option<String>,
}

impl GetContributorsRequest {
    pub fn all() -> Self {
        Self { id: None }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}
