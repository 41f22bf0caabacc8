//! Id generation port.

/// Source of fresh, unique entity ids.
///
/// The engine never creates ids itself, which keeps [`crate::board::domain::apply`]
/// deterministic under test.
pub trait IdGenerator {
    /// Returns a new id for an entity of the given kind, such as `"card"`.
    fn next_id(&self, prefix: &str) -> String;
}
