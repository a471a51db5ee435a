//! Flight plan tags.

use serde::{Deserialize, Serialize};

/// A popular flight plan tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Description of the tag.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of plans carrying this tag.
    pub plan_count: i64,
    /// Popularity index of the tag.
    pub popularity: i64,
}
