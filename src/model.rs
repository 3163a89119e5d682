//! Board and task model — plain data plus pure position helpers.
//!
//! DESIGN
//! ======
//! Tasks are immutable values: a drag moves a task between boards and
//! indices but never rewrites the task itself. Boards therefore hold
//! `Arc<Task>`, so copying a board list for a drag snapshot copies the
//! sequence containers while sharing the task leaves.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// A unit of work with a stable identity and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
}

/// A named, ordered collection of tasks. Task order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Arc<Task>>,
}

/// Position of a task within a board list: board index, then task index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLocation {
    pub board: usize,
    pub task: usize,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Structurally independent copy of a board list. The per-board task
/// sequences are fresh `Vec`s, so mutating the copy never affects the
/// source; the task values themselves are shared through their `Arc`s.
#[must_use]
pub fn snapshot_boards(boards: &[Board]) -> Vec<Board> {
    boards.to_vec()
}

/// Find the first board/index pair holding `task_id`. Linear scan over
/// boards, then tasks.
#[must_use]
pub fn locate_task(boards: &[Board], task_id: &str) -> Option<TaskLocation> {
    boards.iter().enumerate().find_map(|(board, b)| {
        b.tasks
            .iter()
            .position(|t| t.id == task_id)
            .map(|task| TaskLocation { board, task })
    })
}

/// Index of the board with `board_id`, if any.
#[must_use]
pub fn board_index(boards: &[Board], board_id: &str) -> Option<usize> {
    boards.iter().position(|b| b.id == board_id)
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
