//! The per-kind resource contract
//!
//! Every remote resource kind is a plain serde struct implementing
//! [`Resource`]: a kind tag, a collection route, a read-only flag, and an
//! identity segment. One generic client consumes the contract; kinds with
//! unusual addressing (revisions, the schema singleton, the current user)
//! override the URL derivation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::config::ApiConfig;
use crate::error::Result;

/// The closed set of resource kinds exposed by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    User,
    Taxonomy,
    Term,
    Post,
    Page,
    PostRevision,
    Media,
    Comment,
    PostType,
    PostStatus,
    Schema,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Taxonomy => "taxonomy",
            ResourceKind::Term => "term",
            ResourceKind::Post => "post",
            ResourceKind::Page => "page",
            ResourceKind::PostRevision => "post revision",
            ResourceKind::Media => "media",
            ResourceKind::Comment => "comment",
            ResourceKind::PostType => "post type",
            ResourceKind::PostStatus => "post status",
            ResourceKind::Schema => "schema",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract every resource kind implements.
///
/// `Default` doubles as the kind's default-attribute table: it builds a
/// fresh value per instance, so nested defaults (maps, vectors, dates)
/// are never shared between unrelated instances, and sparse server
/// responses fall back to it through `#[serde(default)]`.
pub trait Resource: Serialize + DeserializeOwned + Default + Send + Sync {
    /// Which kind this is.
    const KIND: ResourceKind;

    /// Collection route under the API namespace, e.g. `posts`.
    const ROUTE: &'static str;

    /// Read-only kinds reject save/delete locally, before any I/O.
    const READ_ONLY: bool = false;

    /// Identity segment addressing this instance within its route, if
    /// assigned. Numeric-id kinds return the id, slug kinds the escaped
    /// slug.
    fn item_path(&self) -> Option<String>;

    /// The kind's collection endpoint.
    fn endpoint(config: &ApiConfig) -> String {
        format!(
            "{}/{}/{}",
            config.api_root.trim_end_matches('/'),
            config.namespace,
            Self::ROUTE
        )
    }

    /// URL addressing this instance; the collection endpoint while the
    /// identity segment is unassigned.
    fn url(&self, config: &ApiConfig) -> String {
        match self.item_path() {
            Some(segment) => format!("{}/{}", Self::endpoint(config), segment),
            None => Self::endpoint(config),
        }
    }

    /// Whether the server has assigned this instance an identity yet.
    fn is_new(&self) -> bool {
        self.item_path().is_none()
    }

    /// Serialize for wire transmission. Clones-then-converts: the live
    /// instance is never touched.
    fn to_wire(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Build an instance from a wire payload. Fields absent from the
    /// payload take the kind's defaults.
    fn from_wire(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Addressing for kinds whose identity field is a numeric `id`.
pub trait NumericId {
    fn id(&self) -> Option<u64>;

    /// An otherwise-default instance addressed by `id`.
    fn with_id(id: u64) -> Self;
}

/// Addressing for kinds whose identity field is a `slug`.
pub trait SlugId {
    fn slug(&self) -> Option<&str>;

    /// An otherwise-default instance addressed by `slug`.
    fn with_slug(slug: impl Into<String>) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(ResourceKind::PostType.to_string(), "post type");
        assert_eq!(ResourceKind::Media.to_string(), "media");
    }
}
