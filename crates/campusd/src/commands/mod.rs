use super::*;

pub mod certificate;
pub mod clean;
pub mod course;
pub mod favorite;
pub mod init;
pub mod note;
pub mod progress;
pub mod save;
pub mod subscription;
pub mod watch;

pub use certificate::certificate;
pub use clean::clean;
pub use course::course;
pub use favorite::{favorite, favorites};
pub use init::init;
pub use note::{note, NoteCommands};
pub use progress::{completed, progress};
pub use save::{rate, save};
pub use subscription::subscription;
pub use watch::{unwatch, watch, WatchArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Initialize local state and write a default configuration
  Init,

  /// Show a course, its lessons, and the viewer's progress
  Course {
    /// Course identifier
    course_id: String,
  },

  /// Mark a lesson watched
  Watch(WatchArgs),

  /// Remove a lesson from the watched set
  Unwatch(WatchArgs),

  /// Show completion progress for a course
  Progress {
    /// Course identifier
    course_id: String,
  },

  /// List completed courses
  Completed,

  /// Toggle a lesson in the favorite set
  Favorite {
    /// Course identifier
    course_id: String,
    /// Lesson identifier
    lesson_id: String,
  },

  /// List favorited lessons
  Favorites,

  /// Manage per-lesson notes
  Note {
    /// The set of commands for managing notes
    #[command(subcommand)]
    cmd: NoteCommands,
  },

  /// Toggle a course in the saved set
  Save {
    /// Course identifier
    course_id: String,
  },

  /// Rate a course from 1 to 5 stars
  Rate {
    /// Course identifier
    course_id: String,
    /// Stars, 1-5
    stars: u8,
  },

  /// Show the viewer's subscription status
  Subscription,

  /// Request a certificate for a completed course
  Certificate {
    /// Course identifier
    course_id: String,
  },

  /// Wipe all local state after confirmation
  Clean,
}
