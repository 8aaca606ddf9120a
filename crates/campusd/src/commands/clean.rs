//! Module for wiping local state.

use super::*;

/// Function for [`Commands::Clean`] in the CLI.
///
/// Clears every stored key: watched sets, notes, favorites, saved courses,
/// ratings, and the completion ledger.
pub async fn clean(cli: &Cli, campus: Campus) -> errors::Result<()> {
  if !confirm(cli, "This removes all watched progress, notes, and certificates. Continue?", true)?
  {
    info("Keeping local state");
    return Ok(());
  }

  campus.storage.clear().await?;
  success("Local state cleaned");
  Ok(())
}
