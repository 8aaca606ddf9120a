//! Local persistence for viewer state.
//!
//! This module stores the small amounts of state the platform keeps on the
//! client: watched lessons, favorites, notes, saved courses, ratings, and the
//! completion ledger. The persisted model is deliberately the same contract
//! the web client had with browser storage — a flat key space where every
//! value is a JSON array — carried on SQLite so it survives process restarts.
//!
//! Two rules govern every read:
//! - a missing key is an empty array
//! - a value that fails to parse is an empty array (logged, never an error)
//!
//! so a corrupted record degrades to "nothing watched yet" instead of
//! blocking the viewer.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use campus::store::{keys, Storage};
//!
//! let store = Storage::open(Storage::default_path()).await?;
//! let watched: Vec<String> = store.read_array(&keys::watched_key("rust-101")).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio_rusqlite::Connection;
use tracing::{debug, warn};

use crate::error::Result;

pub mod keys;

/// Handle for the viewer-local state store.
///
/// Wraps an async SQLite connection; the schema is initialized from the
/// bundled migration when the store is opened.
pub struct Storage {
  /// Async SQLite connection handle
  conn: Connection,
}

impl Storage {
  /// Opens an existing store or creates a new one at the specified path.
  ///
  /// Parent directories are created if needed, matching how the web client
  /// could always assume its storage medium exists.
  ///
  /// # Examples
  ///
  /// ```no_run
  /// # use campus::store::Storage;
  /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// let store = Storage::open("state.db").await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)?;
      }
    }
    let conn = Connection::open(path).await?;

    conn
      .call(|conn| {
        conn.execute_batch(include_str!(concat!(
          env!("CARGO_MANIFEST_DIR"),
          "/migrations/init.sql"
        )))?;
        Ok(())
      })
      .await?;

    Ok(Self { conn })
  }

  /// Returns the default path for the state store file.
  ///
  /// - On Unix: `~/.local/share/campus/campus.db`
  /// - On macOS: `~/Library/Application Support/campus/campus.db`
  /// - On Windows: `%APPDATA%\campus\campus.db`
  /// - Fallback: `./campus.db` in the current directory
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("campus").join("campus.db")
  }

  /// Reads the JSON array stored under `key`.
  ///
  /// Absence and parse failure both yield an empty vector; parse failures are
  /// logged so corruption is visible without being fatal.
  pub async fn read_array<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
    let key_owned = key.to_string();
    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached("SELECT value FROM state WHERE key = ?1")?;
        let mut rows = stmt.query([key_owned])?;
        Ok(match rows.next()? {
          Some(row) => Some(row.get::<_, String>(0)?),
          None => None,
        })
      })
      .await?;

    match raw {
      None => Ok(Vec::new()),
      Some(json) => match serde_json::from_str(&json) {
        Ok(items) => Ok(items),
        Err(e) => {
          warn!(key, error = %e, "discarding corrupt state value");
          Ok(Vec::new())
        },
      },
    }
  }

  /// Replaces the JSON array stored under `key`.
  ///
  /// Callers hold the latest array and apply read-merge-write themselves;
  /// this is a plain upsert.
  pub async fn write_array<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
    let key_owned = key.to_string();
    let json = serde_json::to_string(items)?;
    debug!(key, "writing state value");
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO state (key, value) VALUES (?1, ?2)
           ON CONFLICT(key) DO UPDATE SET value = excluded.value",
          rusqlite::params![key_owned, json],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Writes a raw string under `key`, bypassing serialization.
  ///
  /// Exists so tests can plant corrupt values; the CLI also uses it for its
  /// storage doctor command.
  pub async fn write_raw(&self, key: &str, value: &str) -> Result<()> {
    let key_owned = key.to_string();
    let value_owned = value.to_string();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO state (key, value) VALUES (?1, ?2)
           ON CONFLICT(key) DO UPDATE SET value = excluded.value",
          rusqlite::params![key_owned, value_owned],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Removes the value stored under `key`, if any.
  pub async fn remove(&self, key: &str) -> Result<()> {
    let key_owned = key.to_string();
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM state WHERE key = ?1", [key_owned])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Lists all stored keys, sorted.
  pub async fn keys(&self) -> Result<Vec<String>> {
    let keys = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare_cached("SELECT key FROM state ORDER BY key")?;
        let keys = stmt
          .query_map([], |row| row.get::<_, String>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(keys)
      })
      .await?;
    Ok(keys)
  }

  /// Wipes the entire store.
  pub async fn clear(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM state", [])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;
  use tracing_test::traced_test;

  use super::*;

  async fn setup_test_store() -> (Storage, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let store = Storage::open(dir.path().join("test.db")).await.unwrap();
    (store, dir)
  }

  #[tokio::test]
  async fn missing_key_reads_as_empty() {
    let (store, _dir) = setup_test_store().await;
    let items: Vec<String> = store.read_array("course_1_watched").await.unwrap();
    assert!(items.is_empty());
  }

  #[tokio::test]
  async fn round_trips_an_array() {
    let (store, _dir) = setup_test_store().await;
    store.write_array("favoriteLessons", &["l1".to_string(), "l2".to_string()]).await.unwrap();
    let items: Vec<String> = store.read_array("favoriteLessons").await.unwrap();
    assert_eq!(items, vec!["l1", "l2"]);
  }

  #[tokio::test]
  async fn overwrite_replaces_the_whole_array() {
    let (store, _dir) = setup_test_store().await;
    store.write_array("savedCourses", &["a".to_string()]).await.unwrap();
    store.write_array("savedCourses", &["b".to_string()]).await.unwrap();
    let items: Vec<String> = store.read_array("savedCourses").await.unwrap();
    assert_eq!(items, vec!["b"]);
  }

  #[traced_test]
  #[tokio::test]
  async fn corrupt_value_reads_as_empty() {
    let (store, _dir) = setup_test_store().await;
    store.write_raw("course_42_watched", "{not json").await.unwrap();
    let items: Vec<String> = store.read_array("course_42_watched").await.unwrap();
    assert!(items.is_empty());
    assert!(logs_contain("discarding corrupt state value"));
  }

  #[tokio::test]
  async fn state_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    {
      let store = Storage::open(&path).await.unwrap();
      store.write_array("completedCourses", &["rust-101".to_string()]).await.unwrap();
    }
    let store = Storage::open(&path).await.unwrap();
    let items: Vec<String> = store.read_array("completedCourses").await.unwrap();
    assert_eq!(items, vec!["rust-101"]);
  }

  #[tokio::test]
  async fn clear_wipes_everything() {
    let (store, _dir) = setup_test_store().await;
    store.write_array("savedCourses", &["a".to_string()]).await.unwrap();
    store.clear().await.unwrap();
    assert!(store.keys().await.unwrap().is_empty());
  }

  #[test]
  fn default_path_is_under_the_data_dir() {
    let path = Storage::default_path();
    assert!(path.ends_with("campus/campus.db") || path.ends_with("campus\\campus.db"));
  }
}
