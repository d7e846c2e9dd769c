use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "containers/openami";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root directory containing one subdirectory per image
    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        default_value = DEFAULT_ROOT,
        env = "IMAGE_MATRIX_ROOT"
    )]
    pub root: PathBuf,

    /// Don't fail the run when tags or contexts are missing
    #[arg(long, env = "IMAGE_MATRIX_NO_STRICT")]
    pub no_strict: bool,

    /// File to append key=value output lines to; stdout when unset
    #[arg(short = 'o', long, value_name = "PATH", env = "GITHUB_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Strict mode is the default; `--no-strict` turns it off.
    #[must_use]
    pub fn strict(&self) -> bool {
        !self.no_strict
    }
}
