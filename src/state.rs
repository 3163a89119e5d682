//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the working board list behind an `RwLock`, together with the
//! at-most-one in-flight drag session, and a watch channel carrying a
//! read-only `BoardsView` to observers. Mutators republish the view
//! while still holding the write lock, so observers receive views in
//! mutation order and no two controller transitions interleave.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{RwLock, watch};

use crate::model::Board;

// =============================================================================
// WORKING SET
// =============================================================================

/// Load lifecycle of the working board list.
#[derive(Debug)]
pub enum BoardData {
    /// Initial fetch pending; no working copy exists yet.
    Loading,
    /// Initial fetch failed; the error is shown to the presentation layer.
    Failed(String),
    /// Working copy loaded and exclusively owned by the drag controller.
    Ready(Vec<Board>),
}

/// Ephemeral state for one in-progress drag gesture. Exists only
/// between drag start and drag end, whatever the outcome.
#[derive(Debug)]
pub struct DragSession {
    /// The task being dragged, rendered as the overlay card.
    pub active_task_id: String,
    /// Full copy of the working list taken at drag start. Restored on a
    /// cancelled drop, discarded otherwise.
    pub snapshot: Vec<Board>,
}

/// Controller-owned mutable state: the working board list plus the
/// current drag session, if any.
#[derive(Debug)]
pub struct WorkingSet {
    pub data: BoardData,
    pub session: Option<DragSession>,
}

impl WorkingSet {
    #[must_use]
    pub fn new() -> Self {
        Self { data: BoardData::Loading, session: None }
    }

    /// The working board list, if loaded.
    #[must_use]
    pub fn boards(&self) -> Option<&[Board]> {
        match &self.data {
            BoardData::Ready(boards) => Some(boards),
            BoardData::Loading | BoardData::Failed(_) => None,
        }
    }

    /// Mutable access to the working board list, if loaded.
    pub fn boards_mut(&mut self) -> Option<&mut Vec<Board>> {
        match &mut self.data {
            BoardData::Ready(boards) => Some(boards),
            BoardData::Loading | BoardData::Failed(_) => None,
        }
    }
}

impl Default for WorkingSet {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// VIEW
// =============================================================================

/// Read-only snapshot published to observers after every committed
/// mutation. This is the only state the presentation layer ever holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum BoardsView {
    Loading,
    Failed {
        error: String,
    },
    Ready {
        boards: Vec<Board>,
        active_task_id: Option<String>,
    },
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<WorkingSet>>,
    /// Carries the latest `BoardsView`; replaced on every committed mutation.
    pub changes: Arc<watch::Sender<BoardsView>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        let (changes, _rx) = watch::channel(BoardsView::Loading);
        Self { store: Arc::new(RwLock::new(WorkingSet::new())), changes: Arc::new(changes) }
    }

    /// Subscribe to view updates. The receiver always holds the most
    /// recently published view.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardsView> {
        self.changes.subscribe()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_set_starts_loading_with_no_session() {
        let set = WorkingSet::new();
        assert!(matches!(set.data, BoardData::Loading));
        assert!(set.session.is_none());
        assert!(set.boards().is_none());
    }

    #[test]
    fn boards_mut_is_none_until_ready() {
        let mut set = WorkingSet::new();
        assert!(set.boards_mut().is_none());
        set.data = BoardData::Failed("boom".into());
        assert!(set.boards_mut().is_none());
        set.data = BoardData::Ready(Vec::new());
        assert!(set.boards_mut().is_some());
    }

    #[test]
    fn app_state_publishes_loading_view_initially() {
        let state = AppState::new();
        let rx = state.subscribe();
        assert_eq!(*rx.borrow(), BoardsView::Loading);
    }

    #[test]
    fn boards_view_serializes_with_phase_tag() {
        let json = serde_json::to_value(BoardsView::Loading).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "loading"}));

        let json = serde_json::to_value(BoardsView::Failed { error: "timeout".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "failed", "error": "timeout"}));

        let json =
            serde_json::to_value(BoardsView::Ready { boards: Vec::new(), active_task_id: None }).unwrap();
        assert_eq!(json["phase"], "ready");
        assert!(json["boards"].as_array().unwrap().is_empty());
    }
}
