//! Subscription resolution and lesson access gating.
//!
//! Video content is gated on the viewer's subscription standing, classified
//! once per session into a tri-state [`SubscriptionStatus`] by comparing each
//! remote subscription entry against "now". The status is never persisted:
//! it is recomputed from the network on every load, and anything unresolved
//! (fetch pending, fetch failed, signed-out viewer) gates like [`SubscriptionStatus::None`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subscription entry as served by the platform API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
  /// Subscription identifier
  pub id:       String,
  /// Plan name, informational only
  #[serde(default)]
  pub plan:     Option<String>,
  /// Instant the subscription ends
  pub end_date: DateTime<Utc>,
  /// Raw status field from the backend ("active", "expired", ...)
  pub status:   String,
}

impl Subscription {
  /// True if this entry is currently valid: it ends in the future and the
  /// backend hasn't flagged it expired.
  pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
    self.end_date > now && self.status != "expired"
  }
}

/// Tri-state classification of the viewer's subscription standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionStatus {
  /// At least one currently-valid subscription exists.
  Active,
  /// No valid subscription, but at least one expired entry exists.
  Expired,
  /// No subscription history at all, or status not yet resolved.
  #[default]
  None,
}

/// Outcome of a per-view access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
  /// The lesson's video content may be shown.
  Granted,
  /// The lesson is gated; the caller shows the given prompt.
  Denied(GatePrompt),
}

impl AccessDecision {
  /// True if content may be shown.
  pub fn is_granted(&self) -> bool { matches!(self, AccessDecision::Granted) }
}

/// Which upsell the gating UI should present.
///
/// An expired viewer already had a subscription, so they get a renewal prompt
/// instead of the first-time subscribe pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePrompt {
  /// Viewer had a subscription that lapsed.
  Renew,
  /// Viewer never subscribed.
  Subscribe,
}

/// Classifies a subscription list against `now`.
///
/// Presence of even one currently-valid entry wins over any number of expired
/// ones, so Active is checked across the whole list first.
///
/// # Examples
///
/// ```
/// use campus::access::{resolve_subscription, SubscriptionStatus};
/// use chrono::Utc;
///
/// assert_eq!(resolve_subscription(&[], Utc::now()), SubscriptionStatus::None);
/// ```
pub fn resolve_subscription(
  subscriptions: &[Subscription],
  now: DateTime<Utc>,
) -> SubscriptionStatus {
  if subscriptions.iter().any(|s| s.is_valid_at(now)) {
    SubscriptionStatus::Active
  } else if subscriptions.iter().any(|s| s.status == "expired") {
    SubscriptionStatus::Expired
  } else {
    SubscriptionStatus::None
  }
}

/// Decides whether video content may be shown under the given status.
///
/// Evaluated per view attempt, never cached, so a status update between two
/// attempts takes effect immediately.
pub fn can_view_lesson(status: SubscriptionStatus) -> AccessDecision {
  match status {
    SubscriptionStatus::Active => AccessDecision::Granted,
    SubscriptionStatus::Expired => AccessDecision::Denied(GatePrompt::Renew),
    SubscriptionStatus::None => AccessDecision::Denied(GatePrompt::Subscribe),
  }
}

#[cfg(test)]
mod tests {
  use chrono::Duration;

  use super::*;

  fn sub(end_offset_days: i64, status: &str) -> Subscription {
    Subscription {
      id:       format!("sub-{end_offset_days}-{status}"),
      plan:     None,
      end_date: Utc::now() + Duration::days(end_offset_days),
      status:   status.to_string(),
    }
  }

  #[test]
  fn empty_list_is_none() {
    assert_eq!(resolve_subscription(&[], Utc::now()), SubscriptionStatus::None);
  }

  #[test]
  fn expired_entry_is_expired() {
    let subs = [sub(-1, "expired")];
    assert_eq!(resolve_subscription(&subs, Utc::now()), SubscriptionStatus::Expired);
  }

  #[test]
  fn active_wins_over_expired() {
    let subs = [sub(1, "active"), sub(-1, "expired")];
    assert_eq!(resolve_subscription(&subs, Utc::now()), SubscriptionStatus::Active);
  }

  #[test]
  fn future_end_date_with_expired_status_is_not_active() {
    // Backend flag outranks the date.
    let subs = [sub(30, "expired")];
    assert_eq!(resolve_subscription(&subs, Utc::now()), SubscriptionStatus::Expired);
  }

  #[test]
  fn past_end_date_without_expired_flag_is_none() {
    let subs = [sub(-10, "active")];
    assert_eq!(resolve_subscription(&subs, Utc::now()), SubscriptionStatus::None);
  }

  #[test]
  fn gating_is_exhaustive_over_the_tri_state() {
    assert_eq!(can_view_lesson(SubscriptionStatus::Active), AccessDecision::Granted);
    assert_eq!(
      can_view_lesson(SubscriptionStatus::Expired),
      AccessDecision::Denied(GatePrompt::Renew)
    );
    assert_eq!(
      can_view_lesson(SubscriptionStatus::None),
      AccessDecision::Denied(GatePrompt::Subscribe)
    );
  }
}
