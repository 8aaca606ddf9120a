//! Module for certificate requests.

use super::*;

/// Function for [`Commands::Certificate`] in the CLI.
///
/// Certificates are gated by the completion ledger rather than live
/// recomputation, so a certificate stays available even after local watched
/// state is gone.
pub async fn certificate(_cli: &Cli, campus: Campus, course_id: &str) -> errors::Result<()> {
  match campus.ledger().request_certificate(course_id).await? {
    Some(request) => {
      success(&format!("Certificate for {} issued", request.course_id));
      info(&format!("Issued at {}", request.issued_at.format("%Y-%m-%d %H:%M UTC")));
    },
    None => {
      warning(&format!("{course_id} is not completed yet; finish all lessons first"));
    },
  }
  Ok(())
}
