//! Per-lesson note taking.
//!
//! Notes are small, viewer-authored annotations persisted per course. Ids are
//! derived from the creation timestamp and bumped on collision so two notes
//! created within the same millisecond still get distinct ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CampusError, Result};

/// A single note attached to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
  /// Unique per creation, derived from the creation timestamp
  pub id:         i64,
  /// Lesson this note annotates; dangling ids are tolerated
  pub lesson_id:  String,
  /// Trimmed, non-empty content
  pub content:    String,
  /// Creation or last-edit instant
  pub created_at: DateTime<Utc>,
}

impl Note {
  /// Builds a note with trimmed content and an id unique among `existing`.
  ///
  /// Returns [`CampusError::EmptyNote`] when the trimmed content is empty;
  /// the caller leaves the note list untouched in that case.
  pub fn create(
    lesson_id: impl Into<String>,
    content: &str,
    now: DateTime<Utc>,
    existing: &[Note],
  ) -> Result<Self> {
    let content = content.trim();
    if content.is_empty() {
      return Err(CampusError::EmptyNote);
    }

    let mut id = now.timestamp_millis();
    while existing.iter().any(|n| n.id == id) {
      id += 1;
    }

    Ok(Self { id, lesson_id: lesson_id.into(), content: content.to_string(), created_at: now })
  }
}

/// Updates the note with `note_id` in place, refreshing its timestamp.
///
/// Empty content and unknown ids are silent no-ops; returns whether a note
/// actually changed.
pub fn update_note(notes: &mut [Note], note_id: i64, content: &str, now: DateTime<Utc>) -> bool {
  let content = content.trim();
  if content.is_empty() {
    return false;
  }
  match notes.iter_mut().find(|n| n.id == note_id) {
    Some(note) => {
      note.content = content.to_string();
      note.created_at = now;
      true
    },
    None => false,
  }
}

/// Removes the note with `note_id`; returns whether anything was removed.
pub fn delete_note(notes: &mut Vec<Note>, note_id: i64) -> bool {
  let before = notes.len();
  notes.retain(|n| n.id != note_id);
  notes.len() != before
}
