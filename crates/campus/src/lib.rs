//! Client-side progress and access tracking for an online learning platform.
//!
//! `campus` is the data layer behind a course viewer, providing:
//!
//! - Catalog retrieval (courses, lessons, subscriptions) from a REST API
//! - Viewer-local state: watched lessons, favorites, notes, saved courses,
//!   ratings, and the completion ledger
//! - Derived progress: binary per-lesson progress, rounded course
//!   percentage, and the one-shot course-completion transition
//! - Subscription-based access gating and certificate gating
//!
//! # Getting Started
//!
//! ```no_run
//! use campus::{access::SubscriptionStatus, prelude::*, Campus, Config};
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!   let campus = Campus::builder().with_config(Config::default()).build().await?;
//!
//!   // Resolve the viewer's standing, then open a course.
//!   let status = campus.resolve_viewer(Some("viewer-7")).await;
//!   let mut session = campus.course_session("rust-101", status).await?;
//!
//!   // Mark a lesson watched; the completion event fires exactly once.
//!   if let Some(event) = session.mark_watched("rust-101-ownership").await? {
//!     println!("completed {}!", event.course_id);
//!   }
//!   println!("progress: {}%", session.course_progress());
//!
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`course`]: Catalog types and the tagged course snapshot
//! - [`catalog`]: Configuration-driven REST client
//! - [`session`]: The per-course progress & access tracker
//! - [`access`]: Subscription resolution and gating decisions
//! - [`store`]: Local key/value state persistence
//! - [`certificate`]: Completion ledger and certificate gating
//! - [`notes`]: Per-lesson note taking
//! - [`locale`]: Localized text resolution
//! - [`prelude`]: Common types for ergonomic imports
//!
//! # Design Notes
//!
//! Progress is viewer-local: the platform never writes watch state back to
//! the server, so two devices see independent progress. This mirrors the
//! shipped behavior; treat it as a known synchronization gap rather than a
//! guarantee worth relying on.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, warn};

pub mod access;
pub mod catalog;
pub mod certificate;
pub mod config;
pub mod course;
pub mod error;
pub mod locale;
pub mod notes;
pub mod session;
pub mod store;

pub use config::Config;

use crate::{
  access::{resolve_subscription, SubscriptionStatus},
  catalog::CatalogClient,
  certificate::CompletionLedger,
  error::{CampusError, Result},
  locale::LocalizedText,
  session::CourseSession,
  store::Storage,
};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use campus::{prelude::*, Campus};
///
/// async fn example() -> Result<()> {
///   let campus = Campus::builder().build().await?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    access::{AccessDecision, SubscriptionStatus},
    error::{CampusError, Result},
  };
}

/// Top-level handle tying configuration, storage, and the catalog together.
///
/// Constructed once per process via [`Campus::builder`]; per-course sessions
/// borrow from it.
pub struct Campus {
  /// Active configuration
  pub config:  Config,
  /// Viewer-local state store
  pub storage: Storage,
  /// Catalog client, absent when no catalog is configured
  pub catalog: Option<CatalogClient>,
}

impl Campus {
  /// Starts building a campus handle.
  pub fn builder() -> CampusBuilder { CampusBuilder::default() }

  /// Resolves the viewer's subscription status for this session.
  ///
  /// `None` (signed out), a missing catalog, and a failed fetch all resolve
  /// to [`SubscriptionStatus::None`]: gating fails closed while the status
  /// is unknown.
  pub async fn resolve_viewer(&self, user_id: Option<&str>) -> SubscriptionStatus {
    let Some(user_id) = user_id else {
      return SubscriptionStatus::None;
    };
    let Some(catalog) = &self.catalog else {
      return SubscriptionStatus::None;
    };
    match catalog.subscriptions(user_id).await {
      Ok(subs) => resolve_subscription(&subs, Utc::now()),
      Err(e) => {
        warn!(error = %e, "subscription fetch failed, gating as unsubscribed");
        SubscriptionStatus::None
      },
    }
  }

  /// Fetches a course snapshot and opens a tracking session for it.
  pub async fn course_session(
    &self,
    course_id: &str,
    subscription: SubscriptionStatus,
  ) -> Result<CourseSession<'_>> {
    let catalog = self
      .catalog
      .as_ref()
      .ok_or_else(|| CampusError::Config("No catalog configured.".to_string()))?;
    let snapshot = catalog.course_snapshot(course_id).await?;
    CourseSession::open(&self.storage, snapshot, subscription).await
  }

  /// A view of the global completion ledger.
  pub fn ledger(&self) -> CompletionLedger<'_> { CompletionLedger::new(&self.storage) }

  /// All favorited lesson ids, across courses.
  pub async fn favorites(&self) -> Result<Vec<String>> {
    self.storage.read_array(store::keys::FAVORITE_LESSONS).await
  }

  /// All saved course ids.
  pub async fn saved_courses(&self) -> Result<Vec<String>> {
    self.storage.read_array(store::keys::SAVED_COURSES).await
  }

  /// Resolves a localized value with the configured language preferences.
  pub fn resolve_text<'a>(&self, text: &'a LocalizedText) -> Option<&'a str> {
    text.resolve(&self.config.language, &self.config.fallback_chain())
  }
}

/// Builder for [`Campus`].
#[derive(Default)]
pub struct CampusBuilder {
  /// Explicit configuration, overriding any config file
  config: Option<Config>,
  /// Directory searched for `config.toml`
  path:   Option<PathBuf>,
}

impl CampusBuilder {
  /// Uses the given directory's `config.toml` when no explicit config is
  /// provided.
  pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.path = Some(path.into());
    self
  }

  /// Uses an explicit configuration.
  pub fn with_config(mut self, config: Config) -> Self {
    self.config = Some(config);
    self
  }

  /// Opens the state store and catalog client described by the configuration.
  pub async fn build(self) -> Result<Campus> {
    let config = match self.config {
      Some(config) => config,
      None => {
        let dir = self.path.unwrap_or_else(Config::default_path);
        let file = dir.join("config.toml");
        if file.is_file() {
          Config::from_file(&file)?
        } else {
          debug!(path = %file.display(), "no config file found, using defaults");
          Config::default()
        }
      },
    };

    let storage = Storage::open(&config.database_path).await?;
    let catalog = config.catalog.clone().map(CatalogClient::new);
    Ok(Campus { config, storage, catalog })
  }
}
