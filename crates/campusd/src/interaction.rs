//! Terminal output helpers and interactive prompts.

use campus::locale::LocalizedText;
use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Branch character for tree structure
pub static ITEM_PREFIX: &str = "├─";
/// Leaf character for tree structure (end of branch)
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Prints an information line.
pub fn info(message: &str) {
  println!("{} {}", style(INFO_PREFIX).blue(), message);
}

/// Prints a success line.
pub fn success(message: &str) {
  println!("{} {}", style(SUCCESS_PREFIX).green(), message);
}

/// Prints a warning line.
pub fn warning(message: &str) {
  println!("{} {}", style(WARNING_PREFIX).yellow(), message);
}

/// Asks for confirmation, honoring `--accept-defaults`.
pub fn confirm(cli: &Cli, message: &str, default: bool) -> errors::Result<bool> {
  if cli.accept_defaults {
    return Ok(default);
  }
  Ok(
    Confirm::new()
      .with_prompt(format!("{PROMPT_PREFIX}{message}"))
      .default(default)
      .interact()?,
  )
}

/// Resolves a localized value for display, with a placeholder for values the
/// catalog left empty.
pub fn display_text<'a>(campus: &Campus, text: &'a LocalizedText) -> &'a str {
  campus.resolve_text(text).unwrap_or("(untitled)")
}

/// The tree prefix for entry `index` of `total`.
pub fn tree_prefix(index: usize, total: usize) -> &'static str {
  if index + 1 == total {
    LAST_ITEM_PREFIX
  } else {
    ITEM_PREFIX
  }
}
