//! Module for the global favorite-lesson set.

use super::*;

/// Function for [`Commands::Favorite`] in the CLI.
pub async fn favorite(
  cli: &Cli,
  campus: Campus,
  course_id: &str,
  lesson_id: &str,
) -> errors::Result<()> {
  let status = cli.subscription_status(&campus).await;
  let session = campus.course_session(course_id, status).await?;

  if session.toggle_favorite(lesson_id).await? {
    success(&format!("Added {lesson_id} to favorites"));
  } else {
    success(&format!("Removed {lesson_id} from favorites"));
  }
  Ok(())
}

/// Function for [`Commands::Favorites`] in the CLI.
pub async fn favorites(_cli: &Cli, campus: Campus) -> errors::Result<()> {
  let favorites = campus.favorites().await?;
  if favorites.is_empty() {
    info("No favorite lessons yet");
    return Ok(());
  }

  info(&format!("{} favorite lesson(s):", favorites.len()));
  let total = favorites.len();
  for (i, lesson_id) in favorites.iter().enumerate() {
    println!("  {} {}", tree_prefix(i, total), lesson_id);
  }
  Ok(())
}
