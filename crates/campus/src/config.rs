//! Library configuration.
//!
//! A [`Config`] carries everything a [`Campus`](crate::Campus) handle needs:
//! where the local state store lives, which language the viewer prefers (and
//! the fallback chain used when a localized value lacks that variant), and
//! the catalog endpoint configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{catalog::CatalogConfig, error::Result, store::Storage};

/// Configuration for a campus client.
///
/// # Examples
///
/// ```
/// use campus::Config;
///
/// let config = Config::default()
///   .with_database_path("state/campus.db")
///   .with_language("ar")
///   .with_fallback_languages(["en"]);
/// assert_eq!(config.language, "ar");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Path of the local state store
  pub database_path:      PathBuf,
  /// Preferred display language code
  pub language:           String,
  /// Languages tried, in order, when the preferred variant is missing
  pub fallback_languages: Vec<String>,
  /// Catalog endpoint configuration, absent for offline/test use
  pub catalog:            Option<CatalogConfig>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_path:      Storage::default_path(),
      language:           "en".to_string(),
      fallback_languages: vec!["en".to_string(), "ar".to_string()],
      catalog:            None,
    }
  }
}

impl Config {
  /// Loads a configuration from a TOML file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Returns the default directory for configuration files.
  ///
  /// - On Unix: `~/.config/campus`
  /// - On macOS: `~/Library/Application Support/campus`
  /// - On Windows: `%APPDATA%\campus`
  /// - Fallback: `.` in the current directory
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("campus")
  }

  /// Sets the state store path.
  pub fn with_database_path(mut self, path: impl AsRef<Path>) -> Self {
    self.database_path = path.as_ref().to_path_buf();
    self
  }

  /// Sets the preferred display language.
  pub fn with_language(mut self, language: impl Into<String>) -> Self {
    self.language = language.into();
    self
  }

  /// Replaces the fallback language chain.
  pub fn with_fallback_languages<I, S>(mut self, languages: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    self.fallback_languages = languages.into_iter().map(Into::into).collect();
    self
  }

  /// Sets the catalog configuration.
  pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
    self.catalog = Some(catalog);
    self
  }

  /// The fallback chain as borrowed language codes, for
  /// [`LocalizedText::resolve`](crate::locale::LocalizedText::resolve).
  pub fn fallback_chain(&self) -> Vec<&str> {
    self.fallback_languages.iter().map(String::as_str).collect()
  }
}
