//! Taxonomies and terms

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::{NumericId, Resource, ResourceKind, SlugId};

use super::empty_object;

/// A taxonomy, addressed by slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub description: String,
    pub labels: Value,
    pub types: Vec<String>,
    pub show_cloud: bool,
    pub hierarchical: bool,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: None,
            description: String::new(),
            labels: empty_object(),
            types: Vec::new(),
            show_cloud: false,
            hierarchical: false,
        }
    }
}

impl Resource for Taxonomy {
    const KIND: ResourceKind = ResourceKind::Taxonomy;
    const ROUTE: &'static str = "taxonomies";

    fn item_path(&self) -> Option<String> {
        self.slug
            .as_deref()
            .map(|slug| urlencoding::encode(slug).into_owned())
    }
}

impl SlugId for Taxonomy {
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

/// A term within a taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Id of the parent term, for hierarchical taxonomies.
    pub parent: Option<u64>,
    pub count: u64,
    pub link: String,
    pub taxonomy: String,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for Term {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            parent: None,
            count: 0,
            link: String::new(),
            taxonomy: String::new(),
            links: empty_object(),
        }
    }
}

impl Resource for Term {
    const KIND: ResourceKind = ResourceKind::Term;
    const ROUTE: &'static str = "terms/tag";

    fn item_path(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl NumericId for Term {
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
