//! Status update entity and creation payload.
//!
//! [`StatusUpdate`] is the persisted representation of one short text
//! post. [`StatusUpdatePostData`] is the inbound payload the API layer
//! hands to the store for creation and update; its post date travels as
//! a `YYYY-MM-DD` string and is validated at the persistence boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Identifier value returned by write operations that failed recoverably.
///
/// Callers must compare against this constant rather than assume a
/// returned id refers to a persisted row.
pub const SENTINEL_ID: &str = "-1";

/// Wire format for post dates exchanged with callers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted status update post.
///
/// The `id` is assigned by the store on insert (a generated key rendered
/// as a decimal string) and is immutable thereafter, as are `user_id`
/// and `post_date`. Only `title` and `description` change through the
/// update operation; `likes` is mutated by a separate like operation
/// outside this component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Store-assigned identifier, unique and non-empty for persisted rows.
    pub id: String,
    /// Identifier of the owning user.
    pub user_id: String,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub description: String,
    /// Calendar date the update was posted (no time component).
    pub post_date: NaiveDate,
    /// Like counter, always non-negative, 0 at creation.
    pub likes: u32,
}

impl StatusUpdate {
    /// Creates an entity from already-validated parts.
    #[must_use]
    pub fn new(
        id: String,
        user_id: String,
        title: String,
        description: String,
        post_date: NaiveDate,
        likes: u32,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            post_date,
            likes,
        }
    }

    /// Returns the sentinel entity signalling a failed write.
    ///
    /// Its `id` is [`SENTINEL_ID`]; every other field is empty or zero.
    #[must_use]
    pub fn sentinel() -> Self {
        Self {
            id: SENTINEL_ID.to_string(),
            user_id: String::new(),
            title: String::new(),
            description: String::new(),
            post_date: NaiveDate::default(),
            likes: 0,
        }
    }

    /// Returns `true` if this entity is the failure sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_ID
    }
}

/// Inbound payload for creating or updating a status update.
///
/// Not persisted directly: the insert path transforms it into a row
/// (forcing `likes` to 0), the update path uses only `title` and
/// `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdatePostData {
    /// Identifier of the posting user.
    pub user_id: String,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub description: String,
    /// Post date as a `YYYY-MM-DD` string.
    pub date_posted: String,
}

impl StatusUpdatePostData {
    /// Parses `date_posted` into a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DateParse`] when the string is not a valid
    /// `YYYY-MM-DD` date.
    pub fn parsed_date(&self) -> Result<NaiveDate, StoreError> {
        NaiveDate::parse_from_str(&self.date_posted, DATE_FORMAT).map_err(|_| {
            StoreError::DateParse {
                value: self.date_posted.clone(),
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn post_data(date: &str) -> StatusUpdatePostData {
        StatusUpdatePostData {
            user_id: "user-7".to_string(),
            title: "hello".to_string(),
            description: "first post".to_string(),
            date_posted: date.to_string(),
        }
    }

    #[test]
    fn parses_well_formed_date() {
        let Ok(date) = post_data("2024-03-09").parsed_date() else {
            panic!("expected valid date");
        };
        let Some(expected) = NaiveDate::from_ymd_opt(2024, 3, 9) else {
            panic!("valid ymd");
        };
        assert_eq!(date, expected);
    }

    #[test]
    fn rejects_garbage_date() {
        let err = post_data("not-a-date").parsed_date();
        assert!(matches!(err, Err(StoreError::DateParse { .. })));
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let err = post_data("2024-02-30").parsed_date();
        assert!(matches!(err, Err(StoreError::DateParse { .. })));
    }

    #[test]
    fn rejects_empty_date() {
        let err = post_data("").parsed_date();
        assert!(matches!(err, Err(StoreError::DateParse { .. })));
    }

    #[test]
    fn sentinel_has_sentinel_id_and_zero_likes() {
        let s = StatusUpdate::sentinel();
        assert_eq!(s.id, SENTINEL_ID);
        assert_eq!(s.likes, 0);
        assert!(s.is_sentinel());
    }

    #[test]
    fn persisted_entity_is_not_sentinel() {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 3, 9) else {
            panic!("valid ymd");
        };
        let ssu = StatusUpdate::new(
            "42".to_string(),
            "user-7".to_string(),
            "hello".to_string(),
            "first post".to_string(),
            date,
            0,
        );
        assert!(!ssu.is_sentinel());
    }

    #[test]
    fn serde_round_trip() {
        let Some(date) = NaiveDate::from_ymd_opt(2023, 12, 31) else {
            panic!("valid ymd");
        };
        let ssu = StatusUpdate::new(
            "1".to_string(),
            "user-1".to_string(),
            "t".to_string(),
            "d".to_string(),
            date,
            3,
        );
        let json = serde_json::to_string(&ssu).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        let back: StatusUpdate = serde_json::from_str(&json).ok().unwrap_or_else(|| {
            panic!("deserialization failed");
        });
        assert_eq!(ssu, back);
    }

    #[test]
    fn post_date_serializes_as_plain_date() {
        let Some(date) = NaiveDate::from_ymd_opt(2023, 12, 31) else {
            panic!("valid ymd");
        };
        let ssu = StatusUpdate::new(
            "1".to_string(),
            "u".to_string(),
            "t".to_string(),
            "d".to_string(),
            date,
            0,
        );
        let json = serde_json::to_string(&ssu).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.contains("\"2023-12-31\""));
    }
}
