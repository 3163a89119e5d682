//! Drag session service — optimistic preview with snapshot rollback.
//!
//! DESIGN
//! ======
//! A drag is a session over the working board list: drag start snapshots
//! the list and marks the active task, each hover over a different board
//! previews the move by mutating the list in place, and drag end either
//! keeps the previewed state, commits a final move, or restores the
//! snapshot. A session never outlives one drag-end call, and at most one
//! session is active: a second drag start rolls the prior session back
//! before opening its own.
//!
//! ERROR HANDLING
//! ==============
//! Gesture events arrive in pointer order but may carry stale ids — a
//! target consumed by an earlier preview, or a board reload racing the
//! gesture. Every anomaly is handled locally: unknown ids and
//! out-of-session events are no-ops, unresolvable drops restore the
//! snapshot. The worst observable symptom is a card snapping back to its
//! pre-drag position; task membership is never corrupted.

use tracing::{debug, info, warn};

use crate::model::{Board, board_index, locate_task, snapshot_boards};
use crate::services::boards::publish;
use crate::state::{AppState, BoardData, DragSession};

// =============================================================================
// TARGET RESOLUTION
// =============================================================================

/// Where a hovered target id points within the working list.
enum HoverTarget {
    /// The id names a board; the dragged task lands at its end.
    Board(usize),
    /// The id names a task; the dragged task lands just before it.
    Before { board: usize, task: usize },
}

fn resolve_hover_target(boards: &[Board], target_id: &str) -> Option<HoverTarget> {
    if let Some(board) = board_index(boards, target_id) {
        return Some(HoverTarget::Board(board));
    }
    locate_task(boards, target_id).map(|loc| HoverTarget::Before { board: loc.board, task: loc.task })
}

// =============================================================================
// GESTURES
// =============================================================================

/// Open a drag session for `task_id`.
///
/// A no-op when no working list is loaded or the task is unknown. The
/// working list itself is never changed by a successful start; only the
/// active-task marker and the rollback snapshot are recorded.
pub async fn begin_drag(state: &AppState, task_id: &str) {
    let mut set = state.store.write().await;
    let mut mutated = false;

    // A second drag start while dragging means the prior drag end was
    // lost. Roll the old session back before opening the new one.
    if let Some(prev) = set.session.take() {
        warn!(task_id = %prev.active_task_id, "drag start during active session; rolling back prior session");
        set.data = BoardData::Ready(prev.snapshot);
        mutated = true;
    }

    let snapshot = match set.boards() {
        None => {
            debug!(%task_id, "drag start ignored; no working board list");
            None
        }
        Some(boards) => {
            if locate_task(boards, task_id).is_some() {
                Some(snapshot_boards(boards))
            } else {
                debug!(%task_id, "drag start ignored; unknown task");
                None
            }
        }
    };

    if let Some(snapshot) = snapshot {
        set.session = Some(DragSession { active_task_id: task_id.to_owned(), snapshot });
        debug!(%task_id, "drag session opened");
        mutated = true;
    }

    if mutated {
        publish(state, &set);
    }
}

/// Optimistically preview the move of the active task over `target_id`.
///
/// `target_id` may name a board (append at its end) or a task (insert
/// just before it, in its board). Only moves between distinct boards
/// mutate the list: hovering the task itself, a same-board target, or an
/// unresolvable id leaves it unchanged. Called once per hover-target
/// change, so positions are re-resolved from current membership every
/// time; repeating the same hover is idempotent.
pub async fn preview_hover(state: &AppState, active_task_id: &str, target_id: &str) {
    if active_task_id == target_id {
        return;
    }

    let mut set = state.store.write().await;
    let in_session = set.session.as_ref().is_some_and(|s| s.active_task_id == active_task_id);
    if !in_session {
        debug!(task_id = %active_task_id, "hover ignored; no matching drag session");
        return;
    }
    let Some(boards) = set.boards_mut() else {
        return;
    };

    let Some(source) = locate_task(boards, active_task_id) else {
        debug!(task_id = %active_task_id, "hover ignored; active task not in working list");
        return;
    };
    let (target_board, insert_at) = match resolve_hover_target(boards, target_id) {
        Some(HoverTarget::Board(board)) => (board, None),
        Some(HoverTarget::Before { board, task }) => (board, Some(task)),
        None => {
            debug!(%target_id, "hover ignored; unresolved target");
            return;
        }
    };
    if target_board == source.board {
        // Same-board hovers never preview; prevents flicker.
        return;
    }

    // Source and target boards differ, so removing from the source does
    // not shift the target board's indices.
    let task = boards[source.board].tasks.remove(source.task);
    match insert_at {
        Some(index) => boards[target_board].tasks.insert(index, task),
        None => boards[target_board].tasks.push(task),
    }
    debug!(task_id = %active_task_id, %target_id, "previewed move");
    publish(state, &set);
}

/// Close the drag session for `active_task_id`, committing or rolling
/// back the move. The active-task marker is cleared and the snapshot
/// dropped in every branch; a session never survives a drag end.
///
/// - no target: the drop landed outside any valid target — restore the
///   snapshot, undoing every preview made during the session;
/// - target is the task itself: no net move was requested — the last
///   previewed state already is the result;
/// - target resolves to the task's current board: the previewed
///   position stands;
/// - target resolves to another board: move the task to its end;
/// - anything unresolvable (including a drag end for a task that is not
///   the session's): restore the snapshot.
pub async fn end_drag(state: &AppState, active_task_id: &str, target_id: Option<&str>) {
    let mut set = state.store.write().await;
    let Some(session) = set.session.take() else {
        debug!(task_id = %active_task_id, "drag end ignored; no active session");
        return;
    };

    if session.active_task_id != active_task_id {
        warn!(
            session_task = %session.active_task_id,
            task_id = %active_task_id,
            "drag end for a different task; rolling back"
        );
        set.data = BoardData::Ready(session.snapshot);
        publish(state, &set);
        return;
    }

    match target_id {
        None => {
            set.data = BoardData::Ready(session.snapshot);
            debug!(task_id = %active_task_id, "drag cancelled; snapshot restored");
        }
        Some(target) if target == active_task_id => {
            debug!(task_id = %active_task_id, "dropped on itself; keeping previewed state");
        }
        Some(target) => match commit_drop(set.boards_mut(), active_task_id, target) {
            DropOutcome::Committed => {
                info!(task_id = %active_task_id, board_id = %target, "drop committed");
            }
            DropOutcome::AlreadyThere => {
                debug!(task_id = %active_task_id, board_id = %target, "previewed position stands");
            }
            DropOutcome::Unresolved => {
                warn!(task_id = %active_task_id, %target, "drop target unresolved; rolling back");
                set.data = BoardData::Ready(session.snapshot);
            }
        },
    }

    publish(state, &set);
}

// =============================================================================
// COMMIT
// =============================================================================

enum DropOutcome {
    Committed,
    AlreadyThere,
    Unresolved,
}

/// Re-resolve the active task and the target board in the current
/// working list (not the snapshot) and apply the final move.
fn commit_drop(boards: Option<&mut Vec<Board>>, task_id: &str, board_id: &str) -> DropOutcome {
    let Some(boards) = boards else {
        return DropOutcome::Unresolved;
    };
    let Some(source) = locate_task(boards, task_id) else {
        return DropOutcome::Unresolved;
    };
    let Some(target_board) = board_index(boards, board_id) else {
        return DropOutcome::Unresolved;
    };
    if source.board == target_board {
        return DropOutcome::AlreadyThere;
    }

    let task = boards[source.board].tasks.remove(source.task);
    boards[target_board].tasks.push(task);
    DropOutcome::Committed
}

#[cfg(test)]
#[path = "drag_test.rs"]
mod tests;
