use std::fs::read_to_string;

use campus::catalog::{CatalogClient, CatalogConfig};

use super::*;

mod completion;
mod gating;
mod notes;

#[test]
fn test_catalog_config_deserialization() {
  let config_str =
    read_to_string("tests/.config/catalog.toml").expect("Failed to read config file");

  let config: CatalogConfig = toml::from_str(&config_str).expect("Failed to parse config");

  // Verify basic fields
  assert_eq!(config.name, "campus-staging");
  assert_eq!(config.base_url, "https://staging.api.campus.example.com");

  // Test identifier gating
  assert!(config.validate_id("rust-101").is_ok());
  assert!(config.validate_id("RUST-101").is_err());
  assert!(config.validate_id("rust 101").is_err());

  // Endpoint templates resolve against the base URL
  assert_eq!(
    config.endpoint_url(&config.course_endpoint, "rust-101"),
    "https://staging.api.campus.example.com/courses/rust-101"
  );
  assert_eq!(
    config.endpoint_url(&config.subscriptions_endpoint, "viewer-7"),
    "https://staging.api.campus.example.com/user-subscriptions/user/viewer-7"
  );

  // Verify headers
  assert_eq!(config.headers.get("Accept").unwrap(), "application/json");
  assert_eq!(config.headers.get("X-Client").unwrap(), "campusd");
}

#[test]
fn test_catalog_client_from_config_file() {
  let client = CatalogClient::from_config_file("tests/.config/catalog.toml")
    .expect("Failed to build client");
  assert_eq!(client.config().name, "campus-staging");
}
