//! Site-level metadata kinds
//!
//! Post types, post statuses and the API schema describe the site's
//! configuration. The server never accepts writes for them, so save and
//! delete are rejected locally.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::resource::{Resource, ResourceKind, SlugId};

use super::empty_object;

/// A registered post type, addressed by slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub name: String,
    pub description: String,
    pub labels: Value,
    pub hierarchical: bool,
}

impl Default for PostType {
    fn default() -> Self {
        Self {
            slug: None,
            name: String::new(),
            description: String::new(),
            labels: empty_object(),
            hierarchical: false,
        }
    }
}

impl Resource for PostType {
    const KIND: ResourceKind = ResourceKind::PostType;
    const ROUTE: &'static str = "types";
    const READ_ONLY: bool = true;

    fn item_path(&self) -> Option<String> {
        self.slug
            .as_deref()
            .map(|slug| urlencoding::encode(slug).into_owned())
    }
}

impl SlugId for PostType {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}

/// A registered post status, addressed by slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub name: String,
    pub public: bool,
    pub protected: bool,
    pub private: bool,
    pub queryable: bool,
    pub show_in_list: bool,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for PostStatus {
    fn default() -> Self {
        Self {
            slug: None,
            name: String::new(),
            public: true,
            protected: false,
            private: false,
            queryable: true,
            show_in_list: true,
            links: empty_object(),
        }
    }
}

impl Resource for PostStatus {
    const KIND: ResourceKind = ResourceKind::PostStatus;
    const ROUTE: &'static str = "statuses";
    const READ_ONLY: bool = true;

    fn item_path(&self) -> Option<String> {
        self.slug
            .as_deref()
            .map(|slug| urlencoding::encode(slug).into_owned())
    }
}

impl SlugId for PostStatus {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}

/// Meta information about the API itself.
///
/// A singleton: the one instance lives at the namespace root rather than
/// under a collection route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub namespace: String,
    pub routes: Value,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            routes: empty_object(),
            links: empty_object(),
        }
    }
}

impl Resource for Schema {
    const KIND: ResourceKind = ResourceKind::Schema;
    const ROUTE: &'static str = "";
    const READ_ONLY: bool = true;

    fn item_path(&self) -> Option<String> {
        None
    }

    fn endpoint(config: &ApiConfig) -> String {
        format!(
            "{}/{}",
            config.api_root.trim_end_matches('/'),
            config.namespace
        )
    }
}
