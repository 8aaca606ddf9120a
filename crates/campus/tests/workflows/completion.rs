use campus::{session::CourseSession, store::keys};

use super::*;

#[tokio::test]
async fn test_three_lesson_completion_scenario() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  let snapshot = test_snapshot("rust-101", &["l1", "l2", "l3"]);
  let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;

  assert!(session.mark_watched("l1").await?.is_none());
  assert!(session.mark_watched("l2").await?.is_none());
  assert_eq!(session.course_progress(), 67);

  let event = session.mark_watched("l3").await?;
  assert!(event.is_some());
  assert_eq!(session.course_progress(), 100);

  // The ledger received the course exactly once.
  let completed: Vec<String> = campus.storage.read_array(keys::COMPLETED_COURSES).await?;
  assert_eq!(completed, vec!["rust-101"]);
  assert!(campus.ledger().certificate_available("rust-101").await?);
  Ok(())
}

#[tokio::test]
async fn test_completion_edge_is_order_independent() -> TestResult<()> {
  let orders: [[&str; 3]; 3] = [["l1", "l2", "l3"], ["l3", "l1", "l2"], ["l2", "l3", "l1"]];

  for (i, order) in orders.iter().enumerate() {
    let (campus, _dir) = create_test_campus().await;
    let course_id = format!("course-{i}");
    let snapshot = test_snapshot(&course_id, &["l1", "l2", "l3"]);
    let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;

    let mut events = 0;
    for lesson in order {
      if session.mark_watched(lesson).await?.is_some() {
        events += 1;
      }
    }
    assert_eq!(events, 1, "one completion event for order {order:?}");

    let completed: Vec<String> = campus.storage.read_array(keys::COMPLETED_COURSES).await?;
    assert_eq!(completed, vec![course_id]);
  }
  Ok(())
}

#[tokio::test]
async fn test_certificate_requires_ledger_entry() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  let snapshot = test_snapshot("rust-101", &["l1", "l2"]);
  let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;

  session.mark_watched("l1").await?;
  assert!(campus.ledger().request_certificate("rust-101").await?.is_none());

  session.mark_watched("l2").await?;
  let request = campus.ledger().request_certificate("rust-101").await?.expect("completed");
  assert_eq!(request.course_id, "rust-101");
  Ok(())
}

#[tokio::test]
async fn test_manual_ledger_loss_is_repaired_idempotently() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  let snapshot = test_snapshot("rust-101", &["l1"]);
  let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;
  session.mark_watched("l1").await?;

  campus.storage.write_array::<String>(keys::COMPLETED_COURSES, &[]).await?;
  session.sync_completion_record().await?;
  session.sync_completion_record().await?;

  let completed: Vec<String> = campus.storage.read_array(keys::COMPLETED_COURSES).await?;
  assert_eq!(completed, vec!["rust-101"]);
  Ok(())
}

#[tokio::test]
async fn test_corrupt_watched_state_never_blocks_the_viewer() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  campus.storage.write_raw(&keys::watched_key("42"), "{not json").await?;

  let snapshot = test_snapshot("42", &["l1", "l2"]);
  let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;
  assert_eq!(session.course_progress(), 0);

  // The viewer keeps working: fresh marks overwrite the corrupt record.
  session.mark_watched("l1").await?;
  assert_eq!(session.course_progress(), 50);
  Ok(())
}

#[tokio::test]
async fn test_progress_survives_a_session_restart() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  {
    let snapshot = test_snapshot("rust-101", &["l1", "l2"]);
    let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;
    session.mark_watched("l1").await?;
  }
  let snapshot = test_snapshot("rust-101", &["l1", "l2"]);
  let session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;
  assert_eq!(session.course_progress(), 50);
  assert_eq!(session.lesson_progress("l1"), 100);
  assert_eq!(session.lesson_progress("l2"), 0);
  Ok(())
}
