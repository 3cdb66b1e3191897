//! Posts, pages and post revisions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::hierarchical::Hierarchical;
use crate::capability::timestamped::{author, wp_datetime, TimeStamped};
use crate::config::ApiConfig;
use crate::resource::{NumericId, Resource, ResourceKind};

use super::{empty_object, User};

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(with = "wp_datetime")]
    pub date: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub date_gmt: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub modified: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub modified_gmt: DateTime<Utc>,
    pub guid: Value,
    pub link: String,
    pub password: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub title: Value,
    pub content: Value,
    #[serde(with = "author")]
    pub author: Option<User>,
    pub excerpt: Value,
    pub featured_image: Option<u64>,
    pub comment_status: String,
    pub ping_status: String,
    pub sticky: bool,
    pub format: String,
    /// Id of the parent post; `0` means top-level.
    pub parent: u64,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for Post {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            date: now,
            date_gmt: now,
            modified: now,
            modified_gmt: now,
            guid: empty_object(),
            link: String::new(),
            password: String::new(),
            post_type: "post".to_string(),
            title: empty_object(),
            content: empty_object(),
            author: None,
            excerpt: empty_object(),
            featured_image: None,
            comment_status: "open".to_string(),
            ping_status: "open".to_string(),
            sticky: false,
            format: "standard".to_string(),
            parent: 0,
            links: empty_object(),
        }
    }
}

impl Resource for Post {
    const KIND: ResourceKind = ResourceKind::Post;
    const ROUTE: &'static str = "posts";

    fn item_path(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl NumericId for Post {
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

impl TimeStamped for Post {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn modified(&self) -> Option<DateTime<Utc>> {
        Some(self.modified)
    }

    fn author(&self) -> Option<&User> {
        self.author.as_ref()
    }
}

impl Hierarchical for Post {
    type Parent = Post;

    fn parent_id(&self) -> u64 {
        self.parent
    }
}

/// A static page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(with = "wp_datetime")]
    pub date: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub date_gmt: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub modified: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub modified_gmt: DateTime<Utc>,
    pub guid: Value,
    pub link: String,
    pub password: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub title: Value,
    pub content: Value,
    #[serde(with = "author")]
    pub author: Option<User>,
    pub excerpt: Value,
    pub featured_image: Option<u64>,
    pub comment_status: String,
    pub ping_status: String,
    pub menu_order: Option<i64>,
    pub template: String,
    /// Id of the parent page; `0` means top-level.
    pub parent: u64,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for Page {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            date: now,
            date_gmt: now,
            modified: now,
            modified_gmt: now,
            guid: empty_object(),
            link: String::new(),
            password: String::new(),
            slug: String::new(),
            post_type: "page".to_string(),
            title: empty_object(),
            content: empty_object(),
            author: None,
            excerpt: empty_object(),
            featured_image: None,
            comment_status: "closed".to_string(),
            ping_status: "closed".to_string(),
            menu_order: None,
            template: String::new(),
            parent: 0,
            links: empty_object(),
        }
    }
}

impl Resource for Page {
    const KIND: ResourceKind = ResourceKind::Page;
    const ROUTE: &'static str = "pages";

    fn item_path(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl NumericId for Page {
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

impl TimeStamped for Page {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn modified(&self) -> Option<DateTime<Utc>> {
        Some(self.modified)
    }

    fn author(&self) -> Option<&User> {
        self.author.as_ref()
    }
}

impl Hierarchical for Page {
    type Parent = Page;

    fn parent_id(&self) -> u64 {
        self.parent
    }
}

/// A stored revision of a post.
///
/// Revisions have no fixed collection root: an instance is addressed
/// through the post it belongs to, `posts/<parent>/revisions/<id>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRevision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(with = "author")]
    pub author: Option<User>,
    #[serde(with = "wp_datetime")]
    pub date: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub date_gmt: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub modified: DateTime<Utc>,
    #[serde(with = "wp_datetime")]
    pub modified_gmt: DateTime<Utc>,
    pub guid: Value,
    /// Id of the post this revision belongs to.
    pub parent: u64,
    pub slug: String,
    pub title: Value,
    pub content: Value,
    pub excerpt: Value,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl PostRevision {
    /// Address a specific revision of a post.
    pub fn for_post(parent: u64, id: u64) -> Self {
        Self {
            id: Some(id),
            parent,
            ..Self::default()
        }
    }
}

impl Default for PostRevision {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            author: None,
            date: now,
            date_gmt: now,
            modified: now,
            modified_gmt: now,
            guid: empty_object(),
            parent: 0,
            slug: String::new(),
            title: empty_object(),
            content: empty_object(),
            excerpt: empty_object(),
            links: empty_object(),
        }
    }
}

impl Resource for PostRevision {
    const KIND: ResourceKind = ResourceKind::PostRevision;
    const ROUTE: &'static str = "posts";

    fn item_path(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn url(&self, config: &ApiConfig) -> String {
        let collection = format!("{}/{}/revisions", Self::endpoint(config), self.parent);
        match self.item_path() {
            Some(segment) => format!("{}/{}", collection, segment),
            None => collection,
        }
    }
}

impl NumericId for PostRevision {
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

impl TimeStamped for PostRevision {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn modified(&self) -> Option<DateTime<Utc>> {
        Some(self.modified)
    }

    fn author(&self) -> Option<&User> {
        self.author.as_ref()
    }
}

impl Hierarchical for PostRevision {
    type Parent = Post;

    fn parent_id(&self) -> u64 {
        self.parent
    }
}
