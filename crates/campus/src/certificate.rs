//! Completion ledger and certificate gating.
//!
//! A course id enters the ledger exactly once, when its last lesson is
//! watched, and is never removed by normal flow. Certificate availability is
//! decided by the ledger rather than by live recomputation, so a certificate
//! stays retrievable even if watched state were later cleared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  error::Result,
  store::{keys, Storage},
};

/// Read/write view of the global completed-courses set.
pub struct CompletionLedger<'a> {
  store: &'a Storage,
}

impl<'a> CompletionLedger<'a> {
  /// Creates a ledger view over the given store.
  pub fn new(store: &'a Storage) -> Self { Self { store } }

  /// All completed course ids, in insertion order.
  pub async fn all(&self) -> Result<Vec<String>> {
    self.store.read_array(keys::COMPLETED_COURSES).await
  }

  /// True if the course has ever completed.
  pub async fn contains(&self, course_id: &str) -> Result<bool> {
    Ok(self.all().await?.iter().any(|id| id == course_id))
  }

  /// Appends the course id if absent. Idempotent: re-recording a completed
  /// course never duplicates the entry.
  pub async fn record(&self, course_id: &str) -> Result<()> {
    let mut completed = self.all().await?;
    if !completed.iter().any(|id| id == course_id) {
      completed.push(course_id.to_string());
      self.store.write_array(keys::COMPLETED_COURSES, &completed).await?;
    }
    Ok(())
  }

  /// Whether the certificate view may be opened for this course.
  pub async fn certificate_available(&self, course_id: &str) -> Result<bool> {
    self.contains(course_id).await
  }

  /// Builds the navigation contract for the certificate view.
  ///
  /// Returns `None` when the course never completed; rendering and sharing of
  /// the certificate itself is owned by the caller.
  pub async fn request_certificate(&self, course_id: &str) -> Result<Option<CertificateRequest>> {
    if !self.certificate_available(course_id).await? {
      return Ok(None);
    }
    Ok(Some(CertificateRequest { course_id: course_id.to_string(), issued_at: Utc::now() }))
  }
}

/// Parameters handed to the certificate view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificateRequest {
  /// Completed course id
  pub course_id: String,
  /// Instant the request was issued
  pub issued_at: DateTime<Utc>,
}
