//! Module for displaying the viewer's subscription status.

use campus::access::{can_view_lesson, AccessDecision, GatePrompt, SubscriptionStatus};

use super::*;

/// Function for [`Commands::Subscription`] in the CLI.
pub async fn subscription(cli: &Cli, campus: Campus) -> errors::Result<()> {
  if cli.user.is_none() {
    warning("No viewer id given (--user); treating the session as signed out");
  }
  let status = cli.subscription_status(&campus).await;

  match status {
    SubscriptionStatus::Active => success("Subscription active: video content is unlocked"),
    SubscriptionStatus::Expired => warning("Subscription expired"),
    SubscriptionStatus::None => info("No subscription"),
  }

  if let AccessDecision::Denied(prompt) = can_view_lesson(status) {
    match prompt {
      GatePrompt::Renew => info("Renew your subscription to keep watching"),
      GatePrompt::Subscribe => info("Subscribe to unlock video content"),
    }
  }
  Ok(())
}
