//! Users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::timestamped::wp_datetime;
use crate::resource::{NumericId, Resource, ResourceKind};

use super::empty_object;

/// A registered user.
///
/// An instance without a server-assigned id addresses the currently
/// authenticated user: its URL falls back to `users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub username: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub url: String,
    pub description: String,
    pub link: String,
    pub nickname: String,
    pub slug: String,
    #[serde(with = "wp_datetime")]
    pub registered_date: DateTime<Utc>,
    pub roles: Vec<String>,
    pub capabilities: Value,
    pub extra_capabilities: Value,
    pub avatar_url: Value,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            username: String::new(),
            name: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            url: String::new(),
            description: String::new(),
            link: String::new(),
            nickname: String::new(),
            slug: String::new(),
            registered_date: Utc::now(),
            roles: Vec::new(),
            capabilities: empty_object(),
            extra_capabilities: empty_object(),
            avatar_url: empty_object(),
            links: empty_object(),
        }
    }
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;
    const ROUTE: &'static str = "users";

    fn item_path(&self) -> Option<String> {
        Some(match self.id {
            Some(id) => id.to_string(),
            None => "me".to_string(),
        })
    }
}

impl NumericId for User {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn with_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}
