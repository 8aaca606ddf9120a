//! Catalog API client.
//!
//! The platform backend serves courses, lessons, and subscriptions over a
//! small REST surface. This module wraps it behind a configuration-driven
//! client: endpoint templates with an `{id}` placeholder, optional headers,
//! and a regex gate on identifiers so malformed ids never turn into requests.
//!
//! The catalog is read-only and eventually consistent; the client never
//! writes watch state back (progress is viewer-local by design).
//!
//! # Configuration
//!
//! ```toml
//! name = "campus"
//! base_url = "https://api.campus.example.com"
//! course_endpoint = "courses/{id}"
//! lessons_endpoint = "lessons/course/{id}"
//! subscriptions_endpoint = "user-subscriptions/user/{id}"
//! id_pattern = "^[A-Za-z0-9_-]+$"
//!
//! [headers]
//! Accept = "application/json"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use campus::catalog::CatalogClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::from_config_file("config/catalog.toml")?;
//! let snapshot = client.course_snapshot("rust-101").await?;
//! println!("{} lessons", snapshot.total_lessons());
//! # Ok(())
//! # }
//! ```

use std::{collections::HashMap, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::{
  access::Subscription,
  course::{Course, CourseSnapshot, Instructor, Lesson},
  error::{CampusError, Result},
};

mod response;

pub use response::{CourseDto, InstructorDto, LessonDto, SubscriptionDto};

lazy_static! {
  /// Identifier gate applied when a config doesn't provide its own.
  static ref DEFAULT_ID_PATTERN: Regex = Regex::new("^[A-Za-z0-9_-]+$").expect("valid pattern");
}

/// Configuration for the catalog API endpoints.
///
/// Endpoint templates contain a single `{id}` placeholder that is substituted
/// with a validated identifier before the request is issued.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
  /// Name of this catalog configuration
  #[serde(default = "default_name")]
  pub name:                   String,
  /// Base URL for API requests
  pub base_url:               String,
  /// Template for fetching a single course
  #[serde(default = "default_course_endpoint")]
  pub course_endpoint:        String,
  /// Template for fetching a course's lessons
  #[serde(default = "default_lessons_endpoint")]
  pub lessons_endpoint:       String,
  /// Template for fetching a viewer's subscriptions
  #[serde(default = "default_subscriptions_endpoint")]
  pub subscriptions_endpoint: String,
  /// Template for fetching an instructor profile
  #[serde(default = "default_instructor_endpoint")]
  pub instructor_endpoint:    String,
  /// Regex identifiers must match before a request is issued
  #[serde(default = "default_id_pattern", deserialize_with = "deserialize_regex")]
  pub id_pattern:             Regex,
  /// Optional HTTP headers for API requests
  #[serde(default)]
  pub headers:                HashMap<String, String>,
}

fn default_name() -> String { "campus".to_string() }
fn default_course_endpoint() -> String { "courses/{id}".to_string() }
fn default_lessons_endpoint() -> String { "lessons/course/{id}".to_string() }
fn default_subscriptions_endpoint() -> String { "user-subscriptions/user/{id}".to_string() }
fn default_instructor_endpoint() -> String { "instructors/{id}".to_string() }
fn default_id_pattern() -> Regex { DEFAULT_ID_PATTERN.clone() }

impl CatalogConfig {
  /// Builds a config with default endpoint templates for the given base URL.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      name:                   default_name(),
      base_url:               base_url.into(),
      course_endpoint:        default_course_endpoint(),
      lessons_endpoint:       default_lessons_endpoint(),
      subscriptions_endpoint: default_subscriptions_endpoint(),
      instructor_endpoint:    default_instructor_endpoint(),
      id_pattern:             default_id_pattern(),
      headers:                HashMap::new(),
    }
  }

  /// Validates an identifier against the configured pattern.
  pub fn validate_id<'a>(&self, id: &'a str) -> Result<&'a str> {
    if self.id_pattern.is_match(id) {
      Ok(id)
    } else {
      Err(CampusError::InvalidIdentifier)
    }
  }

  /// Substitutes a validated identifier into an endpoint template.
  pub fn endpoint_url(&self, template: &str, id: &str) -> String {
    format!("{}/{}", self.base_url.trim_end_matches('/'), template.replace("{id}", id))
  }
}

/// Client for the catalog API.
///
/// Cheap to clone per page view; holds a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
  /// Endpoint configuration
  config: CatalogConfig,
  /// Pooled HTTP client
  client: reqwest::Client,
}

impl CatalogClient {
  /// Creates a client from an in-memory configuration.
  pub fn new(config: CatalogConfig) -> Self { Self { config, client: reqwest::Client::new() } }

  /// Creates a client from a TOML configuration string.
  ///
  /// Fails fast on an unusable base URL instead of at the first request.
  pub fn from_config_str(toml_str: &str) -> Result<Self> {
    let config: CatalogConfig = toml::from_str(toml_str)?;
    url::Url::parse(&config.base_url)
      .map_err(|e| CampusError::Config(format!("Invalid catalog base_url: {e}")))?;
    Ok(Self::new(config))
  }

  /// Creates a client from a TOML configuration file.
  pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Self::from_config_str(&content)
  }

  /// The active configuration.
  pub fn config(&self) -> &CatalogConfig { &self.config }

  /// Fetches a single course.
  pub async fn course(&self, course_id: &str) -> Result<Course> {
    let dto: CourseDto = self.get(&self.config.course_endpoint, course_id).await?;
    Ok(dto.into_course())
  }

  /// Fetches a course's lessons, in catalog order.
  pub async fn lessons(&self, course_id: &str) -> Result<Vec<Lesson>> {
    let dtos: Vec<LessonDto> = self.get(&self.config.lessons_endpoint, course_id).await?;
    Ok(dtos.into_iter().map(|dto| dto.into_lesson(course_id)).collect())
  }

  /// Fetches an instructor profile.
  pub async fn instructor(&self, instructor_id: &str) -> Result<Instructor> {
    let dto: InstructorDto = self.get(&self.config.instructor_endpoint, instructor_id).await?;
    Ok(dto.into_instructor())
  }

  /// Fetches a viewer's subscription list.
  ///
  /// Callers resolve the list into a tri-state status with
  /// [`resolve_subscription`](crate::access::resolve_subscription); a failed
  /// fetch should resolve to no subscription, not an access grant.
  pub async fn subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>> {
    let dtos: Vec<SubscriptionDto> =
      self.get(&self.config.subscriptions_endpoint, user_id).await?;
    Ok(dtos.into_iter().map(SubscriptionDto::into_subscription).collect())
  }

  /// Fetches a course together with its lessons, tagged with the course id
  /// the caller asked for.
  ///
  /// The tag is what lets a session discard this snapshot if the viewer has
  /// navigated elsewhere by the time it resolves.
  pub async fn course_snapshot(&self, course_id: &str) -> Result<CourseSnapshot> {
    let course = self.course(course_id).await?;
    let lessons = self.lessons(course_id).await?;
    Ok(CourseSnapshot { course_id: course_id.to_string(), course, lessons })
  }

  /// Issues a GET for `template` with `id` substituted and decodes JSON.
  async fn get<T: serde::de::DeserializeOwned>(&self, template: &str, id: &str) -> Result<T> {
    let id = self.config.validate_id(id)?;
    let url = self.config.endpoint_url(template, id);

    debug!("Fetching from {} via: {}", self.config.name, url);

    let mut request = self.client.get(&url);
    for (key, value) in &self.config.headers {
      request = request.header(key, value);
    }

    let response = request.send().await?;
    let status = response.status();
    let data = response.bytes().await?;

    trace!("{} response: {}", self.config.name, String::from_utf8_lossy(&data));

    if !status.is_success() {
      return Err(CampusError::Api(format!(
        "{} returned {}: {}",
        url,
        status,
        String::from_utf8_lossy(&data[..data.len().min(200)])
      )));
    }

    Ok(serde_json::from_slice(&data)?)
  }
}

/// Custom deserializer for converting string patterns into Regex objects.
fn deserialize_regex<'de, D>(deserializer: D) -> std::result::Result<Regex, D::Error>
where D: serde::Deserializer<'de> {
  let s: String = String::deserialize(deserializer)?;
  Regex::new(&s).map_err(serde::de::Error::custom)
}
