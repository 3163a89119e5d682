//! Board store service — working-copy lifecycle and observer publishing.
//!
//! DESIGN
//! ======
//! The working board list is seeded once, from the repository fetch or
//! the built-in mocks, and thereafter mutated only by the drag
//! controller. Every committed mutation republishes a read-only
//! `BoardsView` on the state's watch channel while the write lock is
//! still held, so observers see views in mutation order.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is terminal for that attempt. It surfaces as the
//! `Failed` view phase only while the store is still `Loading`; an
//! already-loaded working copy is never replaced by an error.

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::model::{Board, snapshot_boards};
use crate::repository::BoardRepository;
use crate::state::{AppState, BoardData, BoardsView, WorkingSet};

// =============================================================================
// VIEW
// =============================================================================

/// Rebuild the observer snapshot for the current working set.
#[must_use]
pub fn view_of(set: &WorkingSet) -> BoardsView {
    match &set.data {
        BoardData::Loading => BoardsView::Loading,
        BoardData::Failed(error) => BoardsView::Failed { error: error.clone() },
        BoardData::Ready(boards) => BoardsView::Ready {
            boards: snapshot_boards(boards),
            active_task_id: set.session.as_ref().map(|s| s.active_task_id.clone()),
        },
    }
}

/// Publish the current view to all observers. Callers hold the write
/// lock, which keeps published views in mutation order.
pub(crate) fn publish(state: &AppState, set: &WorkingSet) {
    state.changes.send_replace(view_of(set));
}

// =============================================================================
// SEED / FAIL
// =============================================================================

/// Install a freshly fetched board list as the working copy.
///
/// Any in-flight drag session is aborted and its snapshot discarded:
/// the snapshot describes a working copy that no longer exists.
pub async fn seed_boards(state: &AppState, boards: Vec<Board>) {
    let mut set = state.store.write().await;
    if let Some(session) = set.session.take() {
        warn!(task_id = %session.active_task_id, "drag session aborted by board reload");
    }
    let count = boards.len();
    set.data = BoardData::Ready(boards);
    publish(state, &set);
    info!(count, "seeded working board list");
}

/// Record a failed fetch. Transitions `Loading` (or a previous failure)
/// to `Failed`; a `Ready` working copy is left untouched.
pub async fn mark_load_failed(state: &AppState, error: String) {
    let mut set = state.store.write().await;
    match set.data {
        BoardData::Ready(_) => {
            warn!(%error, "board fetch failed after load; keeping working copy");
        }
        BoardData::Loading | BoardData::Failed(_) => {
            set.data = BoardData::Failed(error);
            publish(state, &set);
        }
    }
}

// =============================================================================
// LOAD TASK
// =============================================================================

/// Spawn the one-shot background fetch that seeds the working copy.
/// While it runs the store stays `Loading` and gesture events no-op.
pub fn spawn_load_task(state: AppState, repository: BoardRepository) -> JoinHandle<()> {
    tokio::spawn(async move {
        match repository.fetch_boards().await {
            Ok(boards) => seed_boards(&state, boards).await,
            Err(e) => {
                error!(error = %e, "board fetch failed");
                mark_load_failed(&state, e.to_string()).await;
            }
        }
    })
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod tests;
