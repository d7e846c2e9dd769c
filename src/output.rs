use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::discovery::aggregate::DiscoveryOutcome;
use crate::errors::ImageMatrixMgrError;

/// Render the outcome as CI output lines, one `key=value` per field with the
/// value JSON-compact-encoded.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn render_lines(outcome: &DiscoveryOutcome) -> Result<String, ImageMatrixMgrError> {
    let mut lines = String::new();
    lines.push_str(&format!(
        "matrix={}\n",
        serde_json::to_string(&outcome.matrix)?
    ));
    lines.push_str(&format!(
        "missing_dockerfile={}\n",
        serde_json::to_string(&outcome.missing_dockerfile)?
    ));
    lines.push_str(&format!(
        "missing_tags={}\n",
        serde_json::to_string(&outcome.missing_tags)?
    ));
    lines.push_str(&format!(
        "missing_context={}\n",
        serde_json::to_string(&outcome.missing_context)?
    ));
    Ok(lines)
}

/// Emit the outcome to the CI output channel when one is configured, else
/// to stdout.
///
/// The channel file is appended to, not truncated, so several steps of one
/// CI job can share it.
///
/// # Errors
///
/// Returns an error if encoding fails or the channel file cannot be written.
pub fn emit(
    outcome: &DiscoveryOutcome,
    channel: Option<&Path>,
) -> Result<(), ImageMatrixMgrError> {
    let lines = render_lines(outcome)?;
    match channel {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ImageMatrixMgrError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            file.write_all(lines.as_bytes())
                .map_err(|source| ImageMatrixMgrError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        None => print!("{lines}"),
    }
    Ok(())
}

/// Print the human-readable side of a strict-mode failure: every offending
/// image and tag, one per line, on stderr.
pub fn print_failure_summary(outcome: &DiscoveryOutcome) {
    eprintln!("Discovery found incomplete images:");
    for image in &outcome.missing_tags {
        eprintln!("  {image}: missing tags.txt");
    }
    for image_tag in &outcome.missing_context {
        eprintln!("  {image_tag}: resolved Dockerfile does not exist");
    }
}
