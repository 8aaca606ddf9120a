//! Module for saved courses and ratings.

use campus::error::CampusError;

use super::*;

/// Function for [`Commands::Save`] in the CLI.
pub async fn save(cli: &Cli, campus: Campus, course_id: &str) -> errors::Result<()> {
  let status = cli.subscription_status(&campus).await;
  let session = campus.course_session(course_id, status).await?;

  if session.toggle_saved().await? {
    success(&format!("Saved {course_id} for later"));
  } else {
    success(&format!("Removed {course_id} from saved courses"));
  }
  Ok(())
}

/// Function for [`Commands::Rate`] in the CLI.
pub async fn rate(cli: &Cli, campus: Campus, course_id: &str, stars: u8) -> errors::Result<()> {
  let status = cli.subscription_status(&campus).await;
  let session = campus.course_session(course_id, status).await?;

  match session.rate_course(stars).await {
    Ok(()) => success(&format!("Rated {course_id} {stars}/5")),
    Err(CampusError::InvalidRating(stars)) =>
      warning(&format!("Ratings go from 1 to 5 stars, got {stars}")),
    Err(e) => return Err(e.into()),
  }
  Ok(())
}
