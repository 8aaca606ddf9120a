//! Module for progress and completion display.

use super::*;

/// Function for [`Commands::Progress`] in the CLI.
pub async fn progress(cli: &Cli, campus: Campus, course_id: &str) -> errors::Result<()> {
  let status = cli.subscription_status(&campus).await;
  let session = campus.course_session(course_id, status).await?;

  info(&format!(
    "{}: {}% complete ({}/{} lessons)",
    display_text(&campus, &session.course().title),
    session.course_progress(),
    session.watched_count(),
    session.lessons().len()
  ));

  if session.evaluate_completion() {
    success("Course completed");
  }
  Ok(())
}

/// Function for [`Commands::Completed`] in the CLI.
pub async fn completed(_cli: &Cli, campus: Campus) -> errors::Result<()> {
  let completed = campus.ledger().all().await?;
  if completed.is_empty() {
    info("No completed courses yet");
    return Ok(());
  }

  info(&format!("{} completed course(s):", completed.len()));
  let total = completed.len();
  for (i, course_id) in completed.iter().enumerate() {
    println!("  {} {}", tree_prefix(i, total), course_id);
  }
  Ok(())
}
