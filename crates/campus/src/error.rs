//! Error types for the campus library.
//!
//! This module provides a comprehensive error type that encompasses all possible
//! failure modes when tracking course progress, including:
//! - Network and API errors
//! - Local state storage
//! - Input validation
//! - Configuration loading
//!
//! # Examples
//!
//! ```
//! use campus::{error::CampusError, prelude::*};
//!
//! # fn example(result: Result<()>) {
//! match result {
//!   Err(CampusError::EmptyNote) => println!("Nothing to save"),
//!   Err(CampusError::Network(e)) => println!("Network error: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(_) => println!("Success!"),
//! }
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`campus`](crate) crate.
pub type Result<T> = core::result::Result<T, CampusError>;

/// Errors that can occur when working with the campus library.
///
/// Most variants wrap an underlying error transparently; the domain-specific
/// variants cover local input validation, which per the platform's error
/// contract must reject invalid input without touching persisted state.
#[derive(Error, Debug)]
pub enum CampusError {
  /// The provided course or viewer identifier doesn't match the configured
  /// identifier pattern.
  ///
  /// Identifiers are validated before any network request is issued, so a
  /// malformed id never reaches the catalog API.
  #[error("Invalid identifier format")]
  InvalidIdentifier,

  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - The request times out
  /// - TLS/SSL errors occur
  ///
  /// Callers fall back to safe empty derived state (0% progress, no
  /// subscription) rather than propagating this into gating decisions.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The catalog API returned an error response.
  ///
  /// The string parameter contains the status and body excerpt for debugging.
  #[error("API error: {0}")]
  Api(String),

  /// A SQLite operation failed.
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// An async SQLite operation failed.
  ///
  /// This wraps errors from the `tokio-rusqlite` crate, covering
  /// async-specific failures in storage operations.
  #[error(transparent)]
  AsyncSqlite(#[from] tokio_rusqlite::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// JSON serialization of a value destined for the state store failed.
  ///
  /// Deserialization failures are NOT surfaced through this variant: corrupt
  /// persisted state degrades to an empty collection instead of an error.
  #[error(transparent)]
  Serialization(#[from] serde_json::Error),

  /// A note was submitted with empty or whitespace-only content.
  ///
  /// The note list is left unchanged; callers surface a user-visible no-op.
  #[error("Note content is empty")]
  EmptyNote,

  /// A note was submitted while no lesson is selected.
  #[error("No lesson is selected for this note")]
  NoLessonSelected,

  /// A course rating outside the accepted 1-5 range was submitted.
  #[error("Rating must be between 1 and 5, got {0}")]
  InvalidRating(u8),

  /// A snapshot for a different course was handed to an active session.
  ///
  /// This is the stale-response case: the viewer navigated to another course
  /// before the fetch resolved. The snapshot is discarded, never applied.
  #[error("Snapshot is for course \"{got}\" but the active course is \"{want}\"")]
  StaleSnapshot {
    /// Course id the session is tracking.
    want: String,
    /// Course id the snapshot was fetched for.
    got:  String,
  },

  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  #[error("{0}")]
  Config(String),
}
