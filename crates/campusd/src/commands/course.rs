//! Module for displaying a course with the viewer's progress.

use super::*;

/// Function for [`Commands::Course`] in the CLI.
pub async fn course(cli: &Cli, campus: Campus, course_id: &str) -> errors::Result<()> {
  let status = cli.subscription_status(&campus).await;
  let session = campus.course_session(course_id, status).await?;

  let course = session.course();
  println!(
    "{} {} ({})",
    style(INFO_PREFIX).blue(),
    style(display_text(&campus, &course.title)).bold(),
    if course.free { "free" } else { "subscription" }
  );
  if let Some(description) = campus.resolve_text(&course.description) {
    println!("  {description}");
  }
  if !course.instructors.is_empty() {
    info(&format!("Instructors: {}", course.instructors.join(", ")));
  }

  let total = session.lessons().len();
  info(&format!("{} lessons, {}% complete", total, session.course_progress()));
  for (i, lesson) in session.lessons().iter().enumerate() {
    let watched = if session.lesson_progress(&lesson.id) == 100 { "✓" } else { " " };
    let favorite = if session.is_favorite(&lesson.id).await? { "★" } else { " " };
    println!(
      "  {} [{}]{} {} ({} min)",
      tree_prefix(i, total),
      watched,
      favorite,
      display_text(&campus, &lesson.title),
      lesson.duration
    );
  }

  if session.is_saved().await? {
    info("Saved for later");
  }
  if let Some(stars) = session.rating().await? {
    info(&format!("Your rating: {stars}/5"));
  }
  if !session.can_view_lesson().is_granted() {
    warning("Video content is locked for your subscription status");
  }
  Ok(())
}
