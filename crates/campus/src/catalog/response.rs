//! Wire representations of catalog responses.
//!
//! The backend serves camelCase JSON with a looser shape than the domain
//! types want: optional fields come and go between deployments, and unknown
//! fields appear without notice. These DTOs absorb that looseness once, at
//! the edge, so the domain types stay strict.

#![allow(missing_docs, clippy::missing_docs_in_private_items)]

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
  access::Subscription,
  course::{Course, Instructor, Lesson, LessonResource},
  locale::LocalizedText,
};

/// A course as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
  pub id:            String,
  #[serde(default)]
  pub title:         LocalizedText,
  #[serde(default)]
  pub description:   LocalizedText,
  #[serde(default, alias = "thumbnail")]
  pub thumbnail_url: Option<String>,
  #[serde(default)]
  pub instructors:   Vec<String>,
  #[serde(default, alias = "isFree")]
  pub free:          bool,
}

impl CourseDto {
  /// Converts the wire course into the domain type.
  pub fn into_course(self) -> Course {
    Course {
      id:            self.id,
      title:         self.title,
      description:   self.description,
      thumbnail_url: self.thumbnail_url,
      instructors:   self.instructors,
      free:          self.free,
    }
  }
}

/// A lesson as it appears on the wire.
///
/// The lessons-by-course endpoint omits the owning course id on some
/// deployments, so the caller supplies the id it queried with.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto {
  pub id:          String,
  #[serde(default)]
  pub course_id:   Option<String>,
  #[serde(default)]
  pub title:       LocalizedText,
  #[serde(default)]
  pub description: LocalizedText,
  #[serde(default)]
  pub duration:    u32,
  #[serde(default)]
  pub video_url:   Option<String>,
  #[serde(default)]
  pub resources:   Vec<LessonResourceDto>,
}

impl LessonDto {
  /// Converts the wire lesson into the domain type, filling in the queried
  /// course id when the payload left it out.
  pub fn into_lesson(self, queried_course_id: &str) -> Lesson {
    Lesson {
      id:          self.id,
      course_id:   self.course_id.unwrap_or_else(|| queried_course_id.to_string()),
      title:       self.title,
      description: self.description,
      duration:    self.duration,
      video_url:   self.video_url,
      resources:   self.resources.into_iter().map(LessonResourceDto::into_resource).collect(),
    }
  }
}

/// A lesson resource as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonResourceDto {
  #[serde(default)]
  pub label: LocalizedText,
  pub url:   String,
}

impl LessonResourceDto {
  fn into_resource(self) -> LessonResource { LessonResource { label: self.label, url: self.url } }
}

/// An instructor profile as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDto {
  pub id:         String,
  #[serde(default)]
  pub name:       LocalizedText,
  #[serde(default)]
  pub bio:        LocalizedText,
  #[serde(default, alias = "avatar")]
  pub avatar_url: Option<String>,
}

impl InstructorDto {
  /// Converts the wire instructor into the domain type.
  pub fn into_instructor(self) -> Instructor {
    Instructor { id: self.id, name: self.name, bio: self.bio, avatar_url: self.avatar_url }
  }
}

/// A subscription entry as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
  pub id:       String,
  #[serde(default)]
  pub plan:     Option<String>,
  pub end_date: DateTime<Utc>,
  #[serde(default)]
  pub status:   String,
}

impl SubscriptionDto {
  /// Converts the wire subscription into the domain type.
  pub fn into_subscription(self) -> Subscription {
    Subscription { id: self.id, plan: self.plan, end_date: self.end_date, status: self.status }
  }
}
