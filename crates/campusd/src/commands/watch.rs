//! Module for marking lessons watched and rewinding them.

use super::*;

/// Arguments for [`Commands::Watch`] and [`Commands::Unwatch`].
#[derive(Args, Clone)]
pub struct WatchArgs {
  /// Course identifier
  pub course_id: String,

  /// Lesson identifier
  pub lesson_id: String,
}

/// Function for [`Commands::Watch`] in the CLI.
pub async fn watch(cli: &Cli, campus: Campus, args: &WatchArgs) -> errors::Result<()> {
  let status = cli.subscription_status(&campus).await;
  let mut session = campus.course_session(&args.course_id, status).await?;

  let event = session.mark_watched(&args.lesson_id).await?;
  success(&format!(
    "Marked {} watched ({}% of the course)",
    args.lesson_id,
    session.course_progress()
  ));

  if let Some(event) = event {
    success(&format!(
      "Congratulations, you completed {}! Run `campus certificate {}` to get your certificate.",
      event.course_id, event.course_id
    ));
  }
  Ok(())
}

/// Function for [`Commands::Unwatch`] in the CLI.
pub async fn unwatch(cli: &Cli, campus: Campus, args: &WatchArgs) -> errors::Result<()> {
  let status = cli.subscription_status(&campus).await;
  let mut session = campus.course_session(&args.course_id, status).await?;

  session.unmark_watched(&args.lesson_id).await?;
  success(&format!(
    "Removed {} from the watched set ({}% of the course)",
    args.lesson_id,
    session.course_progress()
  ));
  Ok(())
}
