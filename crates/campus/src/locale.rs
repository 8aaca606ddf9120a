//! Localized text resolution.
//!
//! Catalog entities carry their display strings as a mapping from language
//! code to variant (`"en"`, `"ar"`, ...). This module centralizes the fallback
//! logic in a single [`LocalizedText::resolve`] so call sites never inline
//! their own fallback chains.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A display string carried in one or more language variants.
///
/// At least one variant is expected to be present for catalog data; an empty
/// map resolves to `None` and render-time callers fall back to a placeholder.
///
/// # Examples
///
/// ```
/// use campus::locale::LocalizedText;
///
/// let title = LocalizedText::from([("en", "Intro to Rust"), ("ar", "مقدمة في رست")]);
/// assert_eq!(title.resolve("ar", &["en"]), Some("مقدمة في رست"));
/// assert_eq!(title.resolve("fr", &["en"]), Some("Intro to Rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
  /// Creates a localized text with a single variant.
  pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
    Self(BTreeMap::from([(lang.into(), text.into())]))
  }

  /// Adds or replaces a variant.
  pub fn with_variant(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
    self.0.insert(lang.into(), text.into());
    self
  }

  /// True if no variant is present.
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Resolves to a single display string.
  ///
  /// Tries `preferred` first, then each language in `fallback_chain`, and
  /// finally any variant at all, so a non-empty value always renders
  /// something. Returns `None` only when no variant exists.
  pub fn resolve<'a>(&'a self, preferred: &str, fallback_chain: &[&str]) -> Option<&'a str> {
    std::iter::once(preferred)
      .chain(fallback_chain.iter().copied())
      .find_map(|lang| self.0.get(lang))
      .or_else(|| self.0.values().next())
      .map(String::as_str)
  }

  /// Iterates over `(language, text)` variants in language order.
  pub fn variants(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for LocalizedText {
  fn from(entries: [(K, V); N]) -> Self {
    Self(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}
