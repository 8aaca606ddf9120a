//! Core catalog types and snapshot handling.
//!
//! Courses, lessons, and instructors are read-only snapshots of remote catalog
//! data: the client never mutates them and refetches per page view. The only
//! client-owned wrinkle is [`CourseSnapshot`], which tags a fetched
//! course+lesson pair with the course id it was requested for so that
//! responses arriving after the viewer navigated away can be discarded.

use serde::{Deserialize, Serialize};

use crate::locale::LocalizedText;

/// A course as served by the catalog API.
///
/// Lessons are not embedded; they arrive through a separate lessons-by-course
/// fetch and travel alongside the course inside a [`CourseSnapshot`].
///
/// # Examples
///
/// ```
/// use campus::course::Course;
///
/// let course = Course {
///   id:            "rust-101".into(),
///   title:         [("en", "Intro to Rust")].into(),
///   description:   [("en", "Ownership from first principles")].into(),
///   thumbnail_url: None,
///   instructors:   vec!["ada".into()],
///   free:          false,
/// };
/// assert!(!course.free);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
  /// Catalog identifier, unique across the platform
  pub id:            String,
  /// Localized course title
  pub title:         LocalizedText,
  /// Localized course description
  pub description:   LocalizedText,
  /// Optional thumbnail image URL
  pub thumbnail_url: Option<String>,
  /// Instructor ids teaching this course
  pub instructors:   Vec<String>,
  /// Whether the course is free or requires a subscription
  pub free:          bool,
}

/// An individual playable unit belonging to a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
  /// Catalog identifier, unique across the platform
  pub id:          String,
  /// Owning course id
  pub course_id:   String,
  /// Localized lesson title
  pub title:       LocalizedText,
  /// Localized lesson description
  pub description: LocalizedText,
  /// Duration in minutes
  pub duration:    u32,
  /// Optional video URL; lessons without one are reading material
  pub video_url:   Option<String>,
  /// Ordered supplementary resources
  #[serde(default)]
  pub resources:   Vec<LessonResource>,
}

/// A supplementary resource attached to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonResource {
  /// Display label
  pub label: LocalizedText,
  /// Resource URL
  pub url:   String,
}

/// An instructor profile reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instructor {
  /// Catalog identifier
  pub id:         String,
  /// Localized display name
  pub name:       LocalizedText,
  /// Localized biography
  #[serde(default)]
  pub bio:        LocalizedText,
  /// Optional avatar image URL
  pub avatar_url: Option<String>,
}

/// A course and its lessons, tagged with the course id they were fetched for.
///
/// Sessions refuse snapshots whose tag doesn't match the active course, which
/// is how in-flight fetches for a course the viewer already left get dropped.
#[derive(Debug, Clone)]
pub struct CourseSnapshot {
  /// The course id this snapshot was requested for
  pub course_id: String,
  /// The fetched course
  pub course:    Course,
  /// The fetched lessons, in catalog order
  pub lessons:   Vec<Lesson>,
}

impl CourseSnapshot {
  /// True if this snapshot belongs to the given active course.
  pub fn is_for(&self, course_id: &str) -> bool { self.course_id == course_id }

  /// Total number of lessons in the snapshot.
  pub fn total_lessons(&self) -> usize { self.lessons.len() }
}
