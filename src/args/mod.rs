// Public modules
pub mod types;

// Re-export everything from the submodules
pub use types::*;

use clap::Parser;

/// Parse command line arguments
///
/// Root-directory existence is checked at runtime by the enumerator rather
/// than at parse time, so a missing default root reports as a discovery
/// error instead of a usage error.
#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
