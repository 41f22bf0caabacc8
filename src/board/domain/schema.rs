//! Load-time shape check for persisted snapshots.
//!
//! A persisted blob is accepted when it is an object whose `board` carries
//! string `id`, `title` and `color` fields and an array `listIds`, and whose
//! `lists` and `cards` are objects. Anything else is rejected so the caller can
//! fall back to the built-in default board.

use super::{BoardState, SnapshotSchemaError};
use serde_json::{Map, Value};

/// Checks the minimal snapshot shape on an already-parsed JSON value.
///
/// # Errors
///
/// Returns the first [`SnapshotSchemaError`] rule the value breaks.
pub fn validate_snapshot_value(value: &Value) -> Result<(), SnapshotSchemaError> {
    let root = value.as_object().ok_or(SnapshotSchemaError::NotAnObject)?;
    let board = require_object(root, "board")?;
    require_object(root, "lists")?;
    require_object(root, "cards")?;

    require_string(board, "id", "board.id")?;
    require_string(board, "title", "board.title")?;
    require_string(board, "color", "board.color")?;
    if !board.get("listIds").is_some_and(Value::is_array) {
        return Err(SnapshotSchemaError::ExpectedArray("board.listIds"));
    }
    Ok(())
}

/// Parses and validates a persisted snapshot.
///
/// # Errors
///
/// Returns [`SnapshotSchemaError::MalformedJson`] for unparsable input, a
/// shape error from [`validate_snapshot_value`], or
/// [`SnapshotSchemaError::Undecodable`] when the shape is acceptable but the
/// nested lists or cards do not decode.
pub fn parse_snapshot(raw: &str) -> Result<BoardState, SnapshotSchemaError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| SnapshotSchemaError::MalformedJson(err.to_string()))?;
    validate_snapshot_value(&value)?;
    serde_json::from_value(value).map_err(|err| SnapshotSchemaError::Undecodable(err.to_string()))
}

fn require_object<'a>(
    parent: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Map<String, Value>, SnapshotSchemaError> {
    parent
        .get(field)
        .and_then(Value::as_object)
        .ok_or(SnapshotSchemaError::ExpectedObject(field))
}

fn require_string(
    parent: &Map<String, Value>,
    field: &str,
    path: &'static str,
) -> Result<(), SnapshotSchemaError> {
    if parent.get(field).is_some_and(Value::is_string) {
        Ok(())
    } else {
        Err(SnapshotSchemaError::ExpectedString(path))
    }
}
