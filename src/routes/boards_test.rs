use super::*;
use crate::services::boards::mark_load_failed;
use crate::state::test_helpers::{board, seeded_state, test_app_state, working_boards};

fn start_body(task_id: &str) -> Json<DragStartBody> {
    Json(DragStartBody { task_id: task_id.into() })
}

fn target_body(task_id: &str, target_id: Option<&str>) -> Json<DragTargetBody> {
    Json(DragTargetBody { task_id: task_id.into(), target_id: target_id.map(Into::into) })
}

#[tokio::test]
async fn get_boards_reports_loading_before_seed() {
    let state = test_app_state();
    let Json(view) = get_boards(State(state)).await;
    assert_eq!(view, BoardsView::Loading);
}

#[tokio::test]
async fn get_boards_reports_fetch_failure() {
    let state = test_app_state();
    mark_load_failed(&state, "connect timeout".into()).await;

    let Json(view) = get_boards(State(state)).await;
    assert_eq!(view, BoardsView::Failed { error: "connect timeout".into() });
}

#[tokio::test]
async fn drag_endpoints_drive_a_full_move() {
    let state = seeded_state(vec![board("b1", &["t1", "t2"]), board("b2", &[])]).await;

    drag_start(State(state.clone()), start_body("t1")).await;
    drag_hover(State(state.clone()), target_body("t1", Some("b2"))).await;
    drag_end(State(state.clone()), target_body("t1", Some("b2"))).await;

    let boards = working_boards(&state).await;
    assert_eq!(boards[0].tasks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["t2"]);
    assert_eq!(boards[1].tasks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["t1"]);
}

#[tokio::test]
async fn drag_end_without_target_cancels() {
    let state = seeded_state(vec![board("b1", &["t1", "t2"]), board("b2", &[])]).await;
    let original = working_boards(&state).await;

    drag_start(State(state.clone()), start_body("t1")).await;
    drag_hover(State(state.clone()), target_body("t1", Some("b2"))).await;
    drag_end(State(state.clone()), target_body("t1", None)).await;

    assert_eq!(working_boards(&state).await, original);
}

#[tokio::test]
async fn drag_hover_without_target_previews_nothing() {
    let state = seeded_state(vec![board("b1", &["t1", "t2"]), board("b2", &[])]).await;
    let original = working_boards(&state).await;

    drag_start(State(state.clone()), start_body("t1")).await;
    drag_hover(State(state.clone()), target_body("t1", None)).await;

    assert_eq!(working_boards(&state).await, original);
}

#[tokio::test]
async fn gestures_with_unknown_ids_still_answer_ok() {
    let state = seeded_state(vec![board("b1", &["t1"])]).await;

    let Json(value) = drag_start(State(state.clone()), start_body("nope")).await;
    assert_eq!(value["ok"], true);

    let Json(value) = drag_hover(State(state.clone()), target_body("nope", Some("b1"))).await;
    assert_eq!(value["ok"], true);

    let Json(value) = drag_end(State(state.clone()), target_body("nope", Some("b1"))).await;
    assert_eq!(value["ok"], true);
}

#[tokio::test]
async fn get_boards_shows_active_task_mid_drag() {
    let state = seeded_state(vec![board("b1", &["t1", "t2"]), board("b2", &[])]).await;
    drag_start(State(state.clone()), start_body("t1")).await;

    let Json(view) = get_boards(State(state)).await;
    match view {
        BoardsView::Ready { active_task_id, .. } => assert_eq!(active_task_id.as_deref(), Some("t1")),
        other => panic!("expected ready view, got {other:?}"),
    }
}

#[test]
fn drag_target_body_tolerates_missing_target() {
    let body: DragTargetBody = serde_json::from_str(r#"{"task_id":"t1"}"#).unwrap();
    assert_eq!(body.task_id, "t1");
    assert!(body.target_id.is_none());

    let body: DragTargetBody = serde_json::from_str(r#"{"task_id":"t1","target_id":"b2"}"#).unwrap();
    assert_eq!(body.target_id.as_deref(), Some("b2"));
}
