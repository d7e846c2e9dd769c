use crate::Args;
use crate::discovery::aggregate::{self, DiscoveryOutcome};
use crate::errors::ImageMatrixMgrError;
use crate::output;
use crate::utils::log_utils::Logger;

/// Run discovery over the configured root and emit the result.
///
/// Strict-mode evaluation is left to the caller so the binary can pick the
/// exit code after the output has been emitted.
///
/// # Errors
///
/// Returns an error on any fatal precondition: missing root, unreadable
/// manifest, or a failure writing the output channel.
pub fn run_app(args: &Args, logger: &Logger) -> Result<DiscoveryOutcome, ImageMatrixMgrError> {
    logger.info(&format!("Discovering images under {}", args.root.display()));

    let outcome = aggregate::discover(&args.root, logger)?;

    logger.info(&format!(
        "{} matrix entries, {} missing tags, {} missing contexts",
        outcome.matrix.include.len(),
        outcome.missing_tags.len(),
        outcome.missing_context.len()
    ));

    output::emit(&outcome, args.output.as_deref())?;
    Ok(outcome)
}
