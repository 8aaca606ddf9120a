use campus::{prelude::*, session::CourseSession, store::keys};

use super::*;

#[tokio::test]
async fn test_note_lifecycle_persists_across_sessions() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  {
    let snapshot = test_snapshot("rust-101", &["l1", "l2"]);
    let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;
    session.select_lesson("l1");
    session.save_note("ownership moves values").await?;
    session.select_lesson("l2");
    session.save_note("borrows don't").await?;
  }

  let snapshot = test_snapshot("rust-101", &["l1", "l2"]);
  let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;
  assert_eq!(session.notes().len(), 2);
  // Newest first.
  assert_eq!(session.notes()[0].content, "borrows don't");
  assert_eq!(session.notes()[0].lesson_id, "l2");

  let id = session.notes()[0].id;
  assert!(session.update_note(id, "borrows never move").await?);
  assert!(session.delete_note(session.notes()[1].id).await?);
  assert_eq!(session.notes().len(), 1);
  assert_eq!(session.notes()[0].content, "borrows never move");
  Ok(())
}

#[tokio::test]
async fn test_invalid_notes_change_nothing() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  let snapshot = test_snapshot("rust-101", &["l1"]);
  let mut session = CourseSession::open(&campus.storage, snapshot, Default::default()).await?;

  assert!(matches!(session.save_note("content").await, Err(CampusError::NoLessonSelected)));
  session.select_lesson("l1");
  assert!(matches!(session.save_note("   ").await, Err(CampusError::EmptyNote)));

  let stored: Vec<campus::notes::Note> =
    campus.storage.read_array(&keys::notes_key("rust-101")).await?;
  assert!(stored.is_empty());
  Ok(())
}

#[tokio::test]
async fn test_notes_are_namespaced_per_course() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;

  let mut rust =
    CourseSession::open(&campus.storage, test_snapshot("rust-101", &["l1"]), Default::default())
      .await?;
  rust.select_lesson("l1");
  rust.save_note("rust note").await?;

  let python =
    CourseSession::open(&campus.storage, test_snapshot("python-201", &["p1"]), Default::default())
      .await?;
  assert!(python.notes().is_empty());
  Ok(())
}

#[tokio::test]
async fn test_dangling_note_lesson_ids_are_tolerated() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  {
    let mut session =
      CourseSession::open(&campus.storage, test_snapshot("rust-101", &["l1"]), Default::default())
        .await?;
    session.select_lesson("l1");
    session.save_note("about a lesson that will vanish").await?;
  }

  // The lesson list changed server-side; the note's lesson id now dangles
  // but loading the course must keep working.
  let session =
    CourseSession::open(&campus.storage, test_snapshot("rust-101", &["l9"]), Default::default())
      .await?;
  assert_eq!(session.notes().len(), 1);
  assert_eq!(session.course_progress(), 0);
  Ok(())
}
