//! Module for managing per-lesson notes.

use campus::error::CampusError;

use super::*;

/// The set of commands for managing notes.
#[derive(Subcommand, Clone)]
pub enum NoteCommands {
  /// Add a note to a lesson
  Add {
    /// Course identifier
    course_id: String,
    /// Lesson identifier
    lesson_id: String,
    /// Note content
    content:   String,
  },

  /// List a course's notes, newest first
  List {
    /// Course identifier
    course_id: String,
  },

  /// Rewrite a note's content
  Edit {
    /// Course identifier
    course_id: String,
    /// Note identifier (see `note list`)
    note_id:   i64,
    /// Replacement content
    content:   String,
  },

  /// Delete a note
  Delete {
    /// Course identifier
    course_id: String,
    /// Note identifier (see `note list`)
    note_id:   i64,
  },
}

/// Function for [`Commands::Note`] in the CLI.
pub async fn note(cli: &Cli, campus: Campus, cmd: &NoteCommands) -> errors::Result<()> {
  let course_id = match cmd {
    NoteCommands::Add { course_id, .. }
    | NoteCommands::List { course_id }
    | NoteCommands::Edit { course_id, .. }
    | NoteCommands::Delete { course_id, .. } => course_id,
  };
  let status = cli.subscription_status(&campus).await;
  let mut session = campus.course_session(course_id, status).await?;

  match cmd {
    NoteCommands::Add { lesson_id, content, .. } => {
      if !session.select_lesson(lesson_id) {
        warning(&format!("Lesson {lesson_id} is not part of this course"));
        return Ok(());
      }
      match session.save_note(content).await {
        Ok(note) => success(&format!("Saved note {}", note.id)),
        Err(CampusError::EmptyNote) => warning("Note content is empty, nothing saved"),
        Err(e) => return Err(e.into()),
      }
    },

    NoteCommands::List { .. } => {
      if session.notes().is_empty() {
        info("No notes for this course yet");
        return Ok(());
      }
      let total = session.notes().len();
      info(&format!("{total} note(s):"));
      for (i, note) in session.notes().iter().enumerate() {
        println!(
          "  {} [{}] {} ({}, lesson {})",
          tree_prefix(i, total),
          note.id,
          note.content,
          note.created_at.format("%Y-%m-%d %H:%M"),
          note.lesson_id
        );
      }
    },

    NoteCommands::Edit { note_id, content, .. } =>
      if session.update_note(*note_id, content).await? {
        success(&format!("Updated note {note_id}"));
      } else {
        warning("Nothing updated: empty content or unknown note id");
      },

    NoteCommands::Delete { note_id, .. } => {
      if !confirm(cli, &format!("Delete note {note_id}?"), true)? {
        info("Keeping the note");
        return Ok(());
      }
      if session.delete_note(*note_id).await? {
        success(&format!("Deleted note {note_id}"));
      } else {
        warning("No note with that id");
      }
    },
  }
  Ok(())
}
