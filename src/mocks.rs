//! Mock board data for local development.
//!
//! Used when no `BOARDS_URL` upstream is configured, so the server is
//! usable out of the box with a small fixed board set.

use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::model::{Board, Task};

const BOARD_NAMES: [&str; 6] = ["Backlog", "Ready", "In Progress", "Review", "Blocked", "Done"];
const TASK_VERBS: [&str; 8] = ["Fix", "Draft", "Review", "Ship", "Refactor", "Measure", "Document", "Triage"];
const TASK_NOUNS: [&str; 8] = [
    "login flow",
    "billing export",
    "search index",
    "onboarding copy",
    "cache layer",
    "error pages",
    "release notes",
    "board sync",
];

fn task(id: &str, name: &str) -> Arc<Task> {
    Arc::new(Task { id: id.into(), name: name.into() })
}

/// The deterministic development fixture: two boards, two tasks each.
#[must_use]
pub fn sample_boards() -> Vec<Board> {
    vec![
        Board {
            id: "1".into(),
            name: "Board 1".into(),
            tasks: vec![task("1", "Task 1"), task("2", "Task 2")],
        },
        Board {
            id: "2".into(),
            name: "Board 2".into(),
            tasks: vec![task("3", "Task 3"), task("4", "Task 4")],
        },
    ]
}

/// Randomly generated boards for larger local datasets. Ids are fresh
/// UUIDs, so the result always satisfies the uniqueness invariants.
#[must_use]
pub fn random_boards(board_count: usize, tasks_per_board: usize) -> Vec<Board> {
    let mut rng = rand::rng();
    (0..board_count)
        .map(|i| Board {
            id: Uuid::new_v4().to_string(),
            name: BOARD_NAMES[i % BOARD_NAMES.len()].to_string(),
            tasks: (0..tasks_per_board)
                .map(|_| {
                    let verb = TASK_VERBS[rng.random_range(0..TASK_VERBS.len())];
                    let noun = TASK_NOUNS[rng.random_range(0..TASK_NOUNS.len())];
                    Arc::new(Task { id: Uuid::new_v4().to_string(), name: format!("{verb} {noun}") })
                })
                .collect(),
        })
        .collect()
}
