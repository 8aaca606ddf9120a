//! Key namespace for the state store.
//!
//! Per-course state is namespaced by course id to avoid cross-course
//! interference; the three global collections keep the exact key names the
//! web client used so an exported browser profile maps over 1:1.

/// Global set of favorited lesson ids.
pub const FAVORITE_LESSONS: &str = "favoriteLessons";

/// Global set of completed course ids (the completion ledger).
pub const COMPLETED_COURSES: &str = "completedCourses";

/// Global set of saved course ids.
pub const SAVED_COURSES: &str = "savedCourses";

/// Key holding the watched-lesson set for a course.
pub fn watched_key(course_id: &str) -> String { format!("course_{course_id}_watched") }

/// Key holding the note list for a course.
pub fn notes_key(course_id: &str) -> String { format!("course_{course_id}_notes") }

/// Key holding the viewer's rating for a course.
pub fn rating_key(course_id: &str) -> String { format!("course_{course_id}_rating") }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keys_are_namespaced_per_course() {
    assert_eq!(watched_key("42"), "course_42_watched");
    assert_eq!(notes_key("rust-101"), "course_rust-101_notes");
    assert_eq!(rating_key("rust-101"), "course_rust-101_rating");
  }
}
