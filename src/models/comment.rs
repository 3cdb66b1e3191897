//! Comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::hierarchical::Hierarchical;
use crate::capability::timestamped::{author, wp_datetime, TimeStamped};
use crate::resource::{NumericId, Resource, ResourceKind};

use super::{empty_object, User};

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(with = "author")]
    pub author: Option<User>,
    pub author_email: String,
    pub author_ip: String,
    pub author_name: String,
    pub author_url: String,
    pub author_user_agent: String,
    pub content: Value,
    #[serde(with = "wp_datetime")]
    pub date: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub date_gmt: DateTime<Utc>,
    pub karma: i64,
    pub link: String,
    /// Id of the comment this one replies to; `0` means top-level.
    pub parent: u64,
    #[serde(rename = "type")]
    pub comment_type: String,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for Comment {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            author: None,
            author_email: String::new(),
            author_ip: String::new(),
            author_name: String::new(),
            author_url: String::new(),
            author_user_agent: String::new(),
            content: empty_object(),
            date: now,
            date_gmt: now,
            karma: 0,
            link: String::new(),
            parent: 0,
            comment_type: String::new(),
            links: empty_object(),
        }
    }
}

impl Resource for Comment {
    const KIND: ResourceKind = ResourceKind::Comment;
    const ROUTE: &'static str = "comments";

    fn item_path(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl NumericId for Comment {
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

impl TimeStamped for Comment {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn author(&self) -> Option<&User> {
        self.author.as_ref()
    }
}

impl Hierarchical for Comment {
    type Parent = Comment;

    fn parent_id(&self) -> u64 {
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replies_reference_their_parent_comment() {
        let reply = Comment::from_wire(json!({ "id": 8, "parent": 4 })).unwrap();
        assert_eq!(reply.parent_id(), 4);

        let top_level = Comment::from_wire(json!({ "id": 9 })).unwrap();
        assert_eq!(top_level.parent_id(), 0);
    }

    #[test]
    fn tracks_no_modification_timestamp() {
        let comment = Comment::default();
        assert!(comment.modified().is_none());
    }
}
