//! Board session: the single writer that owns the current snapshot.

use super::BoardConfig;
use crate::board::{
    domain::{
        BoardAction, BoardState, BoardView, CardId, Comment, CommentId, ListId, Transition,
        apply_traced, default_board_state, parse_snapshot,
    },
    ports::{BoardDispatcher, BoardStore, BoardStoreError, IdGenerator},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Service-level errors for board session operations.
#[derive(Debug, Error)]
pub enum BoardSessionError {
    /// The store rejected the updated snapshot.
    #[error(transparent)]
    Store(#[from] BoardStoreError),

    /// The snapshot could not be serialized.
    #[error("snapshot serialization failed: {0}")]
    Serialization(String),

    /// A title was empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// A comment message was empty after trimming.
    #[error("comment must not be empty")]
    EmptyComment,
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// Where the session's initial snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// A valid persisted snapshot was restored.
    Persisted,
    /// Nothing usable was persisted; the built-in board is in use.
    Default,
}

/// Owns the current [`BoardState`] and routes every mutation through the
/// transition function, persisting each changed snapshot in full.
pub struct BoardSession<S, G, C>
where
    S: BoardStore,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    ids: Arc<G>,
    clock: Arc<C>,
    config: BoardConfig,
    state: BoardState,
    load_source: LoadSource,
}

impl<S, G, C> BoardSession<S, G, C>
where
    S: BoardStore,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Opens a session, restoring the persisted snapshot when it validates.
    ///
    /// Malformed or schema-invalid blobs are logged and replaced by
    /// [`default_board_state`]; opening never fails. Once hydrated, the
    /// snapshot is written back so the store always holds the board in use.
    /// A store that cannot be read is left untouched.
    #[must_use]
    pub fn open(store: Arc<S>, ids: Arc<G>, clock: Arc<C>, config: BoardConfig) -> Self {
        let default_state = default_board_state();
        let loaded = store.load();
        let readable = loaded.is_ok();
        let (state, load_source) = match restore(loaded) {
            Some(snapshot) => {
                let (restored, _) = apply_traced(
                    &default_state,
                    BoardAction::ReplaceAll {
                        snapshot: Box::new(snapshot),
                    },
                );
                (restored, LoadSource::Persisted)
            }
            None => (default_state, LoadSource::Default),
        };

        for violation in state.integrity_violations() {
            warn!(%violation, "board snapshot breaks referential integrity");
        }
        info!(
            source = ?load_source,
            lists = state.board().list_ids.len(),
            cards = state.cards().len(),
            "board session opened"
        );

        let session = Self {
            store,
            ids,
            clock,
            config,
            state,
            load_source,
        };
        if readable && let Err(err) = session.persist() {
            warn!(error = %err, "failed to persist board after opening");
        }
        session
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the render-ready projection of the current snapshot.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.state)
    }

    /// Returns where the initial snapshot came from.
    #[must_use]
    pub const fn load_source(&self) -> LoadSource {
        self.load_source
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Applies `action` and persists the snapshot when it changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Serialization`] or
    /// [`BoardSessionError::Store`] when the changed snapshot cannot be
    /// persisted. The in-memory snapshot is updated either way.
    pub fn dispatch(&mut self, action: BoardAction) -> BoardSessionResult<Transition> {
        let kind = action.kind();
        let (next, transition) = apply_traced(&self.state, action);
        if !transition.is_changed() {
            trace!(action = kind, "board action absorbed as no-op");
            return Ok(transition);
        }

        self.state = next;
        debug!(action = kind, "board action applied");
        self.persist()?;
        Ok(transition)
    }

    /// Renames the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::EmptyTitle`] for a blank title, or a
    /// persistence error from [`Self::dispatch`].
    pub fn rename_board(&mut self, title: &str) -> BoardSessionResult<Transition> {
        let normalized = normalize_title(title)?;
        if normalized == self.state.board().title {
            return Ok(Transition::Unchanged);
        }
        self.dispatch(BoardAction::SetBoardTitle { title: normalized })
    }

    /// Appends a new list.
    ///
    /// Returns the generated list id, or `None` when that id is already taken
    /// and the board is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::EmptyTitle`] for a blank title, or a
    /// persistence error from [`Self::dispatch`].
    pub fn add_list(&mut self, title: &str) -> BoardSessionResult<Option<ListId>> {
        let normalized = normalize_title(title)?;
        let list_id = ListId::new(self.ids.next_id("list"));
        let transition = self.dispatch(BoardAction::AddList {
            list_id: list_id.clone(),
            title: normalized,
        })?;
        Ok(transition.is_changed().then_some(list_id))
    }

    /// Removes a list and every card it holds.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from [`Self::dispatch`].
    pub fn remove_list(&mut self, list_id: &ListId) -> BoardSessionResult<Transition> {
        self.dispatch(BoardAction::RemoveList {
            list_id: list_id.clone(),
        })
    }

    /// Renames a list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::EmptyTitle`] for a blank title, or a
    /// persistence error from [`Self::dispatch`].
    pub fn rename_list(&mut self, list_id: &ListId, title: &str) -> BoardSessionResult<Transition> {
        let normalized = normalize_title(title)?;
        if self
            .state
            .list(list_id)
            .is_some_and(|list| list.title == normalized)
        {
            return Ok(Transition::Unchanged);
        }
        self.dispatch(BoardAction::SetListTitle {
            list_id: list_id.clone(),
            title: normalized,
        })
    }

    /// Appends a new card to `list_id`.
    ///
    /// Returns the generated card id, or `None` when the list does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::EmptyTitle`] for a blank title, or a
    /// persistence error from [`Self::dispatch`].
    pub fn add_card(&mut self, list_id: &ListId, title: &str) -> BoardSessionResult<Option<CardId>> {
        let normalized = normalize_title(title)?;
        let card_id = CardId::new(self.ids.next_id("card"));
        let transition = self.dispatch(BoardAction::AddCard {
            list_id: list_id.clone(),
            card_id: card_id.clone(),
            title: normalized,
        })?;
        Ok(transition.is_changed().then_some(card_id))
    }

    /// Renames a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::EmptyTitle`] for a blank title, or a
    /// persistence error from [`Self::dispatch`].
    pub fn rename_card(&mut self, card_id: &CardId, title: &str) -> BoardSessionResult<Transition> {
        let normalized = normalize_title(title)?;
        if self
            .state
            .card(card_id)
            .is_some_and(|card| card.title == normalized)
        {
            return Ok(Transition::Unchanged);
        }
        self.dispatch(BoardAction::SetCardTitle {
            card_id: card_id.clone(),
            title: normalized,
        })
    }

    /// Moves `active_id` to the column position held by `over_id`.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from [`Self::dispatch`].
    pub fn reorder_lists(
        &mut self,
        active_id: &ListId,
        over_id: &ListId,
    ) -> BoardSessionResult<Transition> {
        self.dispatch(BoardAction::reorder_lists(active_id.clone(), over_id.clone()))
    }

    /// Moves a card in front of `over_card_id`, or to the end of `to_list_id`.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from [`Self::dispatch`].
    pub fn move_card(
        &mut self,
        card_id: &CardId,
        from_list_id: &ListId,
        to_list_id: &ListId,
        over_card_id: Option<&CardId>,
    ) -> BoardSessionResult<Transition> {
        self.dispatch(BoardAction::move_card(
            card_id.clone(),
            from_list_id.clone(),
            to_list_id.clone(),
            over_card_id.cloned(),
        ))
    }

    /// Adds a comment to a card, newest first.
    ///
    /// `author` falls back to [`BoardConfig::default_author`]. Returns the
    /// generated comment id, or `None` when the card does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::EmptyComment`] for a blank message, or a
    /// persistence error from [`Self::dispatch`].
    pub fn add_comment(
        &mut self,
        card_id: &CardId,
        message: &str,
        author: Option<&str>,
    ) -> BoardSessionResult<Option<CommentId>> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(BoardSessionError::EmptyComment);
        }
        let comment_id = CommentId::new(self.ids.next_id("comment"));
        let comment = Comment::new(
            comment_id.clone(),
            trimmed,
            author.unwrap_or(&self.config.default_author),
            self.clock.utc(),
        );
        let transition = self.dispatch(BoardAction::AddComment {
            card_id: card_id.clone(),
            comment,
        })?;
        Ok(transition.is_changed().then_some(comment_id))
    }

    fn persist(&self) -> BoardSessionResult<()> {
        let serialized = serde_json::to_string(&self.state)
            .map_err(|err| BoardSessionError::Serialization(err.to_string()))?;
        self.store.save(&serialized)?;
        Ok(())
    }
}

impl<S, G, C> BoardDispatcher for BoardSession<S, G, C>
where
    S: BoardStore,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    fn snapshot(&self) -> &BoardState {
        &self.state
    }

    fn forward(&mut self, action: BoardAction) -> Transition {
        let kind = action.kind();
        let (next, transition) = apply_traced(&self.state, action);
        if transition.is_changed() {
            self.state = next;
            debug!(action = kind, "drag intent applied");
            if let Err(err) = self.persist() {
                warn!(action = kind, error = %err, "failed to persist board after drag intent");
            }
        } else {
            trace!(action = kind, "drag intent absorbed as no-op");
        }
        transition
    }
}

fn restore(loaded: Result<Option<String>, BoardStoreError>) -> Option<BoardState> {
    let raw = match loaded {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(error = %err, "failed to read persisted board; using default board");
            return None;
        }
    };
    parse_snapshot(&raw)
        .inspect_err(|err| warn!(error = %err, "persisted board rejected; using default board"))
        .ok()
}

fn normalize_title(title: &str) -> BoardSessionResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardSessionError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
