//! Board view and drag gesture routes.
//!
//! Gesture endpoints mirror the three pointer signals the UI raises:
//! drag start, drag over a hover target, and drag end with an optional
//! drop target. The controller is silent-safe, so stale or unknown ids
//! never produce an error response — at worst the card snaps back.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use crate::services::drag;
use crate::state::{AppState, BoardsView};

#[derive(Debug, Deserialize)]
pub struct DragStartBody {
    pub task_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DragTargetBody {
    pub task_id: String,
    #[serde(default)]
    pub target_id: Option<String>,
}

/// `GET /api/boards` — the current read-only view of the working board
/// list: `loading`, `failed`, or `ready` with boards and active task.
pub async fn get_boards(State(state): State<AppState>) -> Json<BoardsView> {
    Json(state.changes.borrow().clone())
}

/// `POST /api/drag/start` — drag-start gesture for one task.
pub async fn drag_start(
    State(state): State<AppState>,
    Json(body): Json<DragStartBody>,
) -> Json<serde_json::Value> {
    drag::begin_drag(&state, &body.task_id).await;
    Json(serde_json::json!({ "ok": true }))
}

/// `POST /api/drag/hover` — drag-over gesture. An absent target means
/// the pointer is over no valid target, which previews nothing.
pub async fn drag_hover(
    State(state): State<AppState>,
    Json(body): Json<DragTargetBody>,
) -> Json<serde_json::Value> {
    if let Some(target_id) = body.target_id.as_deref() {
        drag::preview_hover(&state, &body.task_id, target_id).await;
    }
    Json(serde_json::json!({ "ok": true }))
}

/// `POST /api/drag/end` — drag-end gesture. An absent target cancels
/// the drag and rolls the working list back to its pre-drag state.
pub async fn drag_end(
    State(state): State<AppState>,
    Json(body): Json<DragTargetBody>,
) -> Json<serde_json::Value> {
    drag::end_drag(&state, &body.task_id, body.target_id.as_deref()).await;
    Json(serde_json::json!({ "ok": true }))
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod tests;
