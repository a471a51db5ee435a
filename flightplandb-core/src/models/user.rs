//! Account identities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamps;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Username.
    pub username: String,
    /// User-provided location information.
    #[serde(default)]
    pub location: Option<String>,
    /// Gravatar hash based on the account email address.
    #[serde(default)]
    pub gravatar_hash: Option<String>,
    /// When the user registered.
    #[serde(default, with = "timestamps::option")]
    pub joined: Option<DateTime<Utc>>,
    /// When the user was last connected.
    #[serde(default, with = "timestamps::option")]
    pub last_seen: Option<DateTime<Utc>>,
    /// Number of flight plans created by the user.
    #[serde(default)]
    pub plans_count: Option<i64>,
    /// Total distance of all the user's flight plans.
    #[serde(default)]
    pub plans_distance: Option<f64>,
    /// Total download count of all the user's plans.
    #[serde(default)]
    pub plans_downloads: Option<i64>,
    /// Total like count of all the user's plans.
    #[serde(default)]
    pub plans_likes: Option<i64>,
}

/// The reduced user shape returned by user search.
///
/// Search results carry far less information than a full profile fetch, so
/// they get their own type instead of a [`User`] full of `None`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSmall {
    /// Unique user identifier.
    pub id: i64,
    /// Username.
    pub username: String,
    /// User-provided location information.
    #[serde(default)]
    pub location: Option<String>,
    /// Gravatar hash based on the account email address.
    #[serde(default)]
    pub gravatar_hash: Option<String>,
}
