//! Module for initializing local state and configuration.

use super::*;

/// Default configuration written by `campus init`.
const DEFAULT_CONFIG: &str = r#"# campus configuration
language = "en"
fallback_languages = ["en", "ar"]

[catalog]
base_url = "https://api.campus.example.com"
course_endpoint = "courses/{id}"
lessons_endpoint = "lessons/course/{id}"
subscriptions_endpoint = "user-subscriptions/user/{id}"
"#;

/// Function for [`Commands::Init`] in the CLI.
pub async fn init(cli: &Cli, campus: Campus) -> errors::Result<()> {
  let config_dir = Config::default_path();
  let config_file = config_dir.join("config.toml");

  if config_file.is_file() {
    if !confirm(cli, "A configuration already exists. Overwrite it?", false)? {
      info("Keeping the existing configuration");
    } else {
      std::fs::write(&config_file, DEFAULT_CONFIG)?;
      success(&format!("Wrote default configuration to {}", config_file.display()));
    }
  } else {
    std::fs::create_dir_all(&config_dir)?;
    std::fs::write(&config_file, DEFAULT_CONFIG)?;
    success(&format!("Wrote default configuration to {}", config_file.display()));
  }

  // The state store was opened (and created) while building the handle.
  success(&format!(
    "Local state initialized successfully at {}",
    campus.config.database_path.display()
  ));
  Ok(())
}
