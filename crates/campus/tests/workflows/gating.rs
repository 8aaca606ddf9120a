use campus::{
  access::{resolve_subscription, AccessDecision, GatePrompt, Subscription, SubscriptionStatus},
  session::CourseSession,
};
use chrono::{Duration, Utc};

use super::*;

fn subscription(end_offset_days: i64, status: &str) -> Subscription {
  Subscription {
    id:       format!("sub-{status}"),
    plan:     Some("monthly".to_string()),
    end_date: Utc::now() + Duration::days(end_offset_days),
    status:   status.to_string(),
  }
}

#[test]
fn test_subscription_resolution_scenarios() {
  let now = Utc::now();

  // Expired yesterday.
  assert_eq!(
    resolve_subscription(&[subscription(-1, "expired")], now),
    SubscriptionStatus::Expired
  );

  // No history at all.
  assert_eq!(resolve_subscription(&[], now), SubscriptionStatus::None);

  // One valid entry outranks any number of expired ones.
  assert_eq!(
    resolve_subscription(
      &[subscription(1, "active"), subscription(-1, "expired"), subscription(-30, "expired")],
      now
    ),
    SubscriptionStatus::Active
  );
}

#[tokio::test]
async fn test_gating_is_exhaustive_in_a_session() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;

  for (status, expected) in [
    (SubscriptionStatus::Active, AccessDecision::Granted),
    (SubscriptionStatus::Expired, AccessDecision::Denied(GatePrompt::Renew)),
    (SubscriptionStatus::None, AccessDecision::Denied(GatePrompt::Subscribe)),
  ] {
    let snapshot = test_snapshot("rust-101", &["l1"]);
    let session = CourseSession::open(&campus.storage, snapshot, status).await?;
    assert_eq!(session.can_view_lesson(), expected, "status {status:?}");
  }
  Ok(())
}

#[tokio::test]
async fn test_late_subscription_resolution_updates_gating() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  let snapshot = test_snapshot("rust-101", &["l1"]);

  // The subscription fetch hasn't resolved yet: gate as unsubscribed.
  let mut session = CourseSession::open(&campus.storage, snapshot, SubscriptionStatus::None).await?;
  assert_eq!(session.can_view_lesson(), AccessDecision::Denied(GatePrompt::Subscribe));

  // The fetch resolves after the viewer already tried to open a lesson;
  // the next attempt sees the new status because gating is per call.
  session.set_subscription(SubscriptionStatus::Active);
  assert_eq!(session.can_view_lesson(), AccessDecision::Granted);
  Ok(())
}

#[tokio::test]
async fn test_signed_out_viewer_resolves_to_none() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  assert_eq!(campus.resolve_viewer(None).await, SubscriptionStatus::None);
  // No catalog configured behaves the same as a failed fetch.
  assert_eq!(campus.resolve_viewer(Some("viewer-7")).await, SubscriptionStatus::None);
  Ok(())
}

#[tokio::test]
async fn test_stale_snapshot_for_another_course_is_dropped() -> TestResult<()> {
  let (campus, _dir) = create_test_campus().await;
  let mut session =
    CourseSession::open(&campus.storage, test_snapshot("rust-101", &["l1"]), Default::default())
      .await?;

  // A lessons fetch for the previous course resolves after navigation.
  let stale = test_snapshot("python-201", &["p1", "p2", "p3"]);
  assert!(!session.apply_snapshot(stale));
  assert_eq!(session.course().id, "rust-101");
  assert_eq!(session.lessons().len(), 1);
  Ok(())
}
