//! Error types for the campusd CLI.

use thiserror::Error;

/// Error type alias used for the campusd crate.
pub type Result<T> = core::result::Result<T, CampusdError>;

/// Errors that can occur while running CLI commands.
#[derive(Error, Debug)]
pub enum CampusdError {
  /// An operation in the campus library failed.
  #[error(transparent)]
  Campus(#[from] campus::error::CampusError),

  /// An interactive prompt failed.
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
