//! Session configuration.
//!
//! Where snapshots are stored is decided by the [`crate::board::ports::BoardStore`]
//! handed to the session, not by this configuration.

/// Author recorded on comments when the caller supplies none.
pub const DEFAULT_COMMENT_AUTHOR: &str = "You";

/// Configuration for a [`super::BoardSession`].
///
/// # Examples
///
/// ```
/// use taskboard::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.default_author, "You");
///
/// let custom = BoardConfig::default().with_default_author("Ada");
/// assert_eq!(custom.default_author, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Author used by [`super::BoardSession::add_comment`] when none is given.
    pub default_author: String,
}

impl BoardConfig {
    /// Sets the default comment author.
    #[must_use]
    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_author: DEFAULT_COMMENT_AUTHOR.to_owned(),
        }
    }
}
