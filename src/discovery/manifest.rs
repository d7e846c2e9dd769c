use std::fs;
use std::path::Path;

use crate::errors::ImageMatrixMgrError;

/// File name of the per-image tag manifest.
pub const TAG_MANIFEST: &str = "tags.txt";

/// One manifest line: a tag plus an optional explicit build context,
/// relative to the image directory. `None` means "infer from the tag".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: String,
    pub relative_context: Option<String>,
}

/// Read a tag manifest into its ordered entries.
///
/// Line order is preserved; lines dropped by [`parse_line`] leave no trace.
/// Callers are expected to have checked the file exists — an absent manifest
/// is a diagnostic, not a parse job.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn parse_manifest(path: &Path) -> Result<Vec<TagEntry>, ImageMatrixMgrError> {
    let contents = fs::read_to_string(path).map_err(|source| ImageMatrixMgrError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents.lines().filter_map(parse_line).collect())
}

/// Parse a single manifest line.
///
/// Returns `None` for lines that carry no entry: blank after trimming,
/// `#`-prefixed comments, or an empty tag token. At most two
/// whitespace-separated tokens are consumed; anything after the second is
/// ignored. No tag syntax validation happens here.
#[must_use]
pub fn parse_line(line: &str) -> Option<TagEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut tokens = trimmed.split_whitespace();
    let tag = tokens.next()?.to_string();
    let relative_context = tokens.next().map(str::to_string);

    Some(TagEntry {
        tag,
        relative_context,
    })
}
