//! Classification tags attached to draggable and droppable elements.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What a drag element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// A card inside a list.
    Card,
    /// The empty-area sentinel at the foot of a list.
    Dropzone,
    /// A list's own draggable region.
    List,
}

impl DragKind {
    /// Returns the canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Dropzone => "dropzone",
            Self::List => "list",
        }
    }

    /// Parses an optional raw tag, treating unknown tags as absent.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Option<Self> {
        tag.and_then(|raw| Self::try_from(raw).ok())
    }
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DragKind {
    type Error = ParseDragKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "card" => Ok(Self::Card),
            "dropzone" => Ok(Self::Dropzone),
            "list" => Ok(Self::List),
            _ => Err(ParseDragKindError(value.to_owned())),
        }
    }
}

/// Error returned for an unrecognized drag tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown drag element tag: {0}")]
pub struct ParseDragKindError(pub String);
