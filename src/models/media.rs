//! Media items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::timestamped::{author, wp_datetime, TimeStamped};
use crate::resource::{NumericId, Resource, ResourceKind};

use super::{empty_object, User};

/// An uploaded media attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
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
    #[serde(with = "author")]
    pub author: Option<User>,
    pub comment_status: String,
    pub ping_status: String,
    pub alt_text: String,
    pub caption: String,
    pub description: String,
    pub media_type: String,
    pub media_details: Value,
    /// Id of the post this attachment belongs to, if any.
    pub post: Option<u64>,
    pub source_url: String,
    #[serde(rename = "_links")]
    pub links: Value,
}

impl Default for Media {
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
            post_type: "attachment".to_string(),
            title: empty_object(),
            author: None,
            comment_status: "open".to_string(),
            ping_status: "open".to_string(),
            alt_text: String::new(),
            caption: String::new(),
            description: String::new(),
            media_type: String::new(),
            media_details: empty_object(),
            post: None,
            source_url: String::new(),
            links: empty_object(),
        }
    }
}

impl Resource for Media {
    const KIND: ResourceKind = ResourceKind::Media;
    const ROUTE: &'static str = "media";

    fn item_path(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl NumericId for Media {
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

impl TimeStamped for Media {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_with_defaults_and_expanded_author() {
        let media = Media::from_wire(json!({
            "id": 33,
            "author": 2,
            "source_url": "https://example.com/a.png"
        }))
        .unwrap();

        assert_eq!(media.post_type, "attachment");
        assert_eq!(media.author.as_ref().and_then(|user| user.id()), Some(2));
        assert_eq!(media.source_url, "https://example.com/a.png");
    }
}
