use std::error::Error;

use campus::{
  course::{Course, CourseSnapshot, Lesson},
  Campus, Config,
};
use tempfile::{tempdir, TempDir};

mod workflows;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

/// Builds a campus handle over a throwaway state store, no catalog.
pub async fn create_test_campus() -> (Campus, TempDir) {
  let dir = tempdir().unwrap();
  let config = Config::default().with_database_path(dir.path().join("campus.db"));
  let campus = Campus::builder().with_config(config).build().await.unwrap();
  (campus, dir)
}

/// Builds a snapshot for `course_id` with one lesson per id in `lesson_ids`.
pub fn test_snapshot(course_id: &str, lesson_ids: &[&str]) -> CourseSnapshot {
  CourseSnapshot {
    course_id: course_id.to_string(),
    course:    Course {
      id:            course_id.to_string(),
      title:         [("en", "Test course"), ("ar", "دورة تجريبية")].into(),
      description:   [("en", "Integration test fixture")].into(),
      thumbnail_url: None,
      instructors:   vec!["instructor-1".to_string()],
      free:          false,
    },
    lessons:   lesson_ids
      .iter()
      .map(|id| Lesson {
        id:          id.to_string(),
        course_id:   course_id.to_string(),
        title:       [("en", *id)].into(),
        description: [("en", "fixture lesson")].into(),
        duration:    8,
        video_url:   Some(format!("https://cdn.campus.example.com/{id}.mp4")),
        resources:   vec![],
      })
      .collect(),
  }
}
