use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A contributor entry exactly as published in the upstream document.
///
/// Only `github` is required. The other fields are carried untouched so that
/// odd upstream data reaches the client as-is instead of dropping the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorRecord {
    pub github: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub active: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub joined: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub team_ids: Option<Value>,
}

impl ContributorRecord {
    /// Only a literal `true` marks a contributor as active.
    pub fn is_active(&self) -> bool {
        matches!(self.active, Some(Value::Bool(true)))
    }

    pub fn joined_str(&self) -> Option<&str> {
        self.joined.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContributorAttributes {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub country_code: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub active: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub joined: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub team_ids: Option<Value>,
}

/// JSON:API style envelope returned to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContributorResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: ContributorAttributes,
}

impl ContributorResource {
    pub const KIND: &'static str = "contributor";
}

impl From<ContributorRecord> for ContributorResource {
    fn from(record: ContributorRecord) -> Self {
        Self {
            kind: Self::KIND.to_string(),
            id: record.github.clone(),
            attributes: ContributorAttributes {
                username: record.github,
                name: record.name,
                image: record.image,
                country_code: record.country_code,
                active: record.active,
                joined: record.joined,
                team_ids: record.team_ids,
            },
        }
    }
}
