//! Temporal normalization for time-stamped resources
//!
//! Kinds carrying the timestamp field set (`date`, `date_gmt`, `modified`,
//! `modified_gmt`) hold them locally as [`DateTime<Utc>`] and transmit
//! them as ISO-8601 strings; the round trip is lossless to the second.
//! The same kinds carry an `author` reference the API serves either as a
//! raw numeric id or as a nested object; locally it is always `None` or
//! a structured [`User`].

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::User;
use crate::resource::Resource;

/// Capability marker for kinds carrying the timestamp field set and an
/// author reference.
pub trait TimeStamped: Resource {
    /// Creation timestamp.
    fn date(&self) -> DateTime<Utc>;

    /// Last-modification timestamp, for kinds that track one.
    fn modified(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Expanded author, when present.
    fn author(&self) -> Option<&User>;
}

/// Parse the timestamp forms the API emits.
///
/// Site-local fields come without a UTC offset (`2017-02-04T13:00:00`);
/// GMT fields and well-behaved clients use full RFC 3339.
pub(crate) fn parse_wp_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Field codec for timestamp fields: `#[serde(with = "wp_datetime")]`.
pub mod wp_datetime {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_wp_datetime(&raw)
            .ok_or_else(|| de::Error::custom(format!("unparseable timestamp: {raw}")))
    }
}

/// Field codec for author references: `#[serde(with = "author")]`.
///
/// Deserialization expands a raw id into a [`User`] addressed by it
/// (fields hold user defaults until that user is fetched); `0` and `null`
/// mean no author. Serialization sends the id form the API accepts on
/// writes.
pub mod author {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::User;
    use crate::resource::NumericId;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Id(u64),
        Full(Box<User>),
    }

    pub fn serialize<S>(author: &Option<User>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match author.as_ref().and_then(|user| user.id()) {
            Some(id) => serializer.serialize_u64(id),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<User>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Wire>::deserialize(deserializer)? {
            None | Some(Wire::Id(0)) => None,
            Some(Wire::Id(id)) => Some(User::with_id(id)),
            Some(Wire::Full(user)) => Some(*user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use crate::resource::NumericId;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "wp_datetime")]
        at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Byline {
        #[serde(with = "author")]
        author: Option<User>,
    }

    #[test]
    fn parses_rfc3339() {
        let parsed = parse_wp_datetime("2017-02-04T13:00:00Z").unwrap();
        assert_eq!(parsed.timestamp(), 1_486_213_200);
    }

    #[test]
    fn parses_offsetless_site_local_form() {
        let bare = parse_wp_datetime("2017-02-04T13:00:00").unwrap();
        let zulu = parse_wp_datetime("2017-02-04T13:00:00Z").unwrap();
        assert_eq!(bare, zulu);
    }

    #[test]
    fn parses_fractional_seconds() {
        let parsed = parse_wp_datetime("2017-02-04T13:00:00.500").unwrap();
        assert_eq!(parsed.timestamp(), 1_486_213_200);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_wp_datetime("next tuesday").is_none());
    }

    #[test]
    fn wire_round_trip_is_lossless_to_the_second() {
        let stamp = Stamp {
            at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let wire = serde_json::to_value(&stamp).unwrap();
        assert_eq!(wire, json!({ "at": "2023-11-14T22:13:20Z" }));

        let back: Stamp = serde_json::from_value(wire).unwrap();
        assert_eq!(back.at, stamp.at);
    }

    #[test]
    fn author_id_expands_to_user() {
        let byline: Byline = serde_json::from_value(json!({ "author": 7 })).unwrap();
        let user = byline.author.expect("author should expand");
        assert_eq!(user.id(), Some(7));
    }

    #[test]
    fn author_zero_and_null_mean_none() {
        let zero: Byline = serde_json::from_value(json!({ "author": 0 })).unwrap();
        assert!(zero.author.is_none());

        let null: Byline = serde_json::from_value(json!({ "author": null })).unwrap();
        assert!(null.author.is_none());
    }

    #[test]
    fn author_object_deserializes_fully() {
        let byline: Byline =
            serde_json::from_value(json!({ "author": { "id": 3, "name": "Ada" } })).unwrap();
        let user = byline.author.unwrap();
        assert_eq!(user.id(), Some(3));
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn author_serializes_back_to_id() {
        let byline = Byline {
            author: Some(User::with_id(9)),
        };
        assert_eq!(serde_json::to_value(&byline).unwrap(), json!({ "author": 9 }));

        let anonymous = Byline { author: None };
        assert_eq!(
            serde_json::to_value(&anonymous).unwrap(),
            json!({ "author": null })
        );
    }
}
