use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::discovery::enumerate::list_image_dirs;
use crate::discovery::manifest::{self, TAG_MANIFEST};
use crate::discovery::resolve::{ContextInferrer, resolve_entry};
use crate::errors::ImageMatrixMgrError;
use crate::utils::log_utils::Logger;

/// One fully resolved build, as it appears in the emitted matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBuildTarget {
    pub name: String,
    pub tag: String,
    pub context: String,
    pub dockerfile: String,
}

/// The matrix shape CI fans out over: `{"include": [...]}`.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Matrix {
    pub include: Vec<ResolvedBuildTarget>,
}

/// Terminal result of a discovery run: the matrix plus the three diagnostic
/// buckets, each insertion-ordered and never de-duplicated.
///
/// `missing_dockerfile` is part of the output contract but stays empty:
/// image directories without any Dockerfile are skipped before
/// classification and appear in no bucket.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiscoveryOutcome {
    pub matrix: Matrix,
    pub missing_dockerfile: Vec<String>,
    pub missing_tags: Vec<String>,
    pub missing_context: Vec<String>,
}

impl DiscoveryOutcome {
    /// Whether strict mode should fail the run. Only tags and contexts
    /// count; `missing_dockerfile` never affects the outcome.
    #[must_use]
    pub fn strict_failures(&self) -> bool {
        !self.missing_tags.is_empty() || !self.missing_context.is_empty()
    }
}

/// Run the whole discovery pipeline over the image root.
///
/// A single linear pass per image directory, in sorted directory order then
/// manifest line order, so the matrix comes out identically for identical
/// filesystem snapshots. Per-entry and per-image anomalies land in the
/// diagnostic buckets and never abort the scan.
///
/// # Errors
///
/// Returns an error if the root is missing, a present manifest cannot be
/// read, or an inference rule fails to compile.
pub fn discover(root: &Path, logger: &Logger) -> Result<DiscoveryOutcome, ImageMatrixMgrError> {
    let inferrer = ContextInferrer::new()?;
    let mut outcome = DiscoveryOutcome::default();

    for name in list_image_dirs(root)? {
        let image_dir = root.join(&name);

        if !has_dockerfile(&image_dir) {
            logger.debug(&format!("{name}: no Dockerfile anywhere, skipping"));
            continue;
        }

        let manifest_path = image_dir.join(TAG_MANIFEST);
        if !manifest_path.is_file() {
            logger.info(&format!("{name}: no {TAG_MANIFEST}"));
            outcome.missing_tags.push(name);
            continue;
        }

        for entry in manifest::parse_manifest(&manifest_path)? {
            match resolve_entry(&image_dir, &name, &entry, &inferrer) {
                Some(target) => {
                    logger.debug(&format!("{name}:{} -> {}", target.tag, target.context));
                    outcome.matrix.include.push(target);
                }
                None => {
                    logger.info(&format!("{name}:{}: no Dockerfile at resolved context", entry.tag));
                    outcome.missing_context.push(format!("{name}:{}", entry.tag));
                }
            }
        }
    }

    Ok(outcome)
}

/// Whether any file named `Dockerfile` exists anywhere under the directory.
fn has_dockerfile(dir: &Path) -> bool {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file() && e.file_name() == "Dockerfile")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_dockerfile_nested_arbitrarily_deep() {
        let tmp = tempfile::tempdir().unwrap();
        let deep = tmp.path().join("a/b/c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("Dockerfile"), "FROM scratch\n").unwrap();
        assert!(has_dockerfile(tmp.path()));
    }

    #[test]
    fn similarly_named_files_do_not_count() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Dockerfile.template"), "").unwrap();
        fs::write(tmp.path().join("dockerfile"), "").unwrap();
        assert!(!has_dockerfile(tmp.path()));
    }
}
