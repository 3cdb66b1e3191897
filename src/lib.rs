//! Typed Rust client for the WordPress REST API resource model
//!
//! Maps the remote resource kinds (posts, pages, media, users,
//! taxonomies, terms, comments, revisions, post types, post statuses,
//! schema) onto typed local structs with create/read/update/delete
//! semantics, nonce-authenticated transport and normalized temporal and
//! relational fields.
//!
//! # Architecture
//!
//! - [`Resource`] is the per-kind contract: identity field, collection
//!   route, default attribute table, read-only flag.
//! - [`ApiClient`] wraps every persistence operation: read-only kinds are
//!   rejected before any I/O, the configured `X-WP-Nonce` token is
//!   injected into each outgoing request, and transport failures pass
//!   through uninterpreted.
//! - Capabilities bundle behavior shared across kinds: [`TimeStamped`]
//!   (ISO-8601 wire timestamps held locally as `DateTime<Utc>`, author-id
//!   expansion) and [`Hierarchical`] (parent resolution through a local
//!   [`Collection`] or a spawned fetch that populates the instance in
//!   place).
//!
//! Remote operations are plain futures; nothing is serialized per
//! instance and in-flight parent fetches are not cancelled by dropping
//! their handles.
//!
//! # Example
//!
//! ```rust,no_run
//! use wp_api_client::{ApiClient, ApiConfig, Collection, Hierarchical, ParentLookup, Post};
//!
//! # async fn example() -> wp_api_client::Result<()> {
//! let client = ApiClient::new(ApiConfig {
//!     api_root: "https://example.com/wp-json".into(),
//!     nonce: Some("a1b2c3d4e5".into()),
//!     ..Default::default()
//! });
//!
//! // Fetch, edit, save.
//! let mut post = client.fetch::<Post>(42).await?;
//! post.title = serde_json::json!({ "raw": "Updated title" });
//! client.save(&mut post).await?;
//!
//! // Resolve the parent through a loaded collection when possible.
//! let posts: Collection<Post> = Collection::fetch(&client).await?;
//! if let Some(ParentLookup::Cached(parent)) = post.parent(&client, Some(&posts)) {
//!     println!("parent: {:?}", parent.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod models;
pub mod resource;

// Re-export the main types
pub use capability::{Hierarchical, ParentLookup, PendingParent, TimeStamped};
pub use client::{ApiClient, SyncMethod, SyncOptions};
pub use collection::Collection;
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use models::{
    Comment, Media, Page, Post, PostRevision, PostStatus, PostType, Schema, Taxonomy, Term, User,
};
pub use resource::{NumericId, Resource, ResourceKind, SlugId};
