use std::fs;
use std::path::Path;

use crate::errors::ImageMatrixMgrError;

/// List the immediate subdirectory names of the image root, sorted.
///
/// One name per image. The scan is non-recursive at this level; nested
/// layout inside each image directory is the resolver's concern. Entries
/// whose names are not valid UTF-8 are skipped, matching how path handling
/// works everywhere else in this crate.
///
/// # Errors
///
/// Returns `RootMissing` if the root does not exist or is not a directory,
/// and an I/O error if the directory listing itself fails.
pub fn list_image_dirs(root: &Path) -> Result<Vec<String>, ImageMatrixMgrError> {
    if !root.is_dir() {
        return Err(ImageMatrixMgrError::RootMissing(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|source| ImageMatrixMgrError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();

    // Sorted listing is what makes matrix ordering reproducible across runs.
    names.sort();
    Ok(names)
}
