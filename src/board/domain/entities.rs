//! Board, list, card and comment entities.

use super::{BoardId, CardId, CommentId, ListId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The singleton board that orders lists into columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Board identifier.
    pub id: BoardId,
    /// Display title.
    pub title: String,
    /// Display colour, typically a CSS hex string.
    pub color: String,
    /// Column order. Every id keys an entry of [`super::BoardState::lists`].
    pub list_ids: Vec<ListId>,
}

impl Board {
    /// Creates a board with no lists.
    #[must_use]
    pub fn new(id: BoardId, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color: color.into(),
            list_ids: Vec::new(),
        }
    }

    /// Returns the column position of `list_id`.
    #[must_use]
    pub fn position_of(&self, list_id: &ListId) -> Option<usize> {
        self.list_ids.iter().position(|id| id == list_id)
    }
}

/// A named, ordered column of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardList {
    /// List identifier.
    pub id: ListId,
    /// Display title.
    pub title: String,
    /// Card order within the list.
    pub card_ids: Vec<CardId>,
}

impl BoardList {
    /// Creates an empty list.
    #[must_use]
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            card_ids: Vec::new(),
        }
    }

    /// Returns the position of `card_id` within this list.
    #[must_use]
    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card_id)
    }

    /// Returns `true` when the list holds `card_id`.
    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.card_ids.contains(card_id)
    }
}

/// A task unit owned by exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier.
    pub id: CardId,
    /// Display title.
    pub title: String,
    /// Free-text description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Comments, newest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Card {
    /// Creates a card with an empty description and no comments.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            comments: Vec::new(),
        }
    }
}

/// An immutable note attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment identifier.
    pub id: CommentId,
    /// Comment body.
    pub message: String,
    /// Display name of the author.
    pub author: String,
    /// Creation timestamp, serialized as RFC 3339.
    ///
    /// Decoding also accepts an offset-less date-time, a bare date or epoch
    /// milliseconds. Anything else decodes as the Unix epoch instead of
    /// rejecting the snapshot.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::String(text) => parse_timestamp_text(&text),
        Value::Number(number) => number.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };
    Ok(parsed.unwrap_or_default())
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|stamp| stamp.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

impl Comment {
    /// Creates a comment.
    #[must_use]
    pub fn new(
        id: CommentId,
        message: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            author: author.into(),
            created_at,
        }
    }
}
