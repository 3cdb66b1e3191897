//! Typed definitions for each resource kind
//!
//! One struct per kind, composed from the shared [`Resource`] contract
//! plus the capabilities the kind carries. The hand-written `Default`
//! impls are the per-kind default-attribute tables; `#[serde(default)]`
//! routes sparse server responses through them.
//!
//! [`Resource`]: crate::resource::Resource

mod comment;
mod media;
mod post;
mod site;
mod taxonomy;
mod user;

pub use comment::Comment;
pub use media::Media;
pub use post::{Page, Post, PostRevision};
pub use site::{PostStatus, PostType, Schema};
pub use taxonomy::{Taxonomy, Term};
pub use user::User;

use serde_json::Value;

pub(crate) fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
