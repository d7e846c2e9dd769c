use std::path::Path;

use regex::Regex;

use crate::discovery::aggregate::ResolvedBuildTarget;
use crate::discovery::manifest::TagEntry;
use crate::errors::ImageMatrixMgrError;

/// Context inference for tags without an explicit context in the manifest.
///
/// The distro rules form an ordered list tried first-match-wins, so a new
/// distro marker is one appended rule rather than another branch.
pub struct ContextInferrer {
    version: Regex,
    rules: Vec<DistroRule>,
}

struct DistroRule {
    pattern: Regex,
    /// Expansion template; `$1` refers to the pattern's first capture.
    template: &'static str,
}

impl DistroRule {
    fn new(pattern: &str, template: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            template,
        })
    }

    fn apply(&self, tag: &str) -> Option<String> {
        let caps = self.pattern.captures(tag)?;
        let mut distro = String::new();
        caps.expand(self.template, &mut distro);
        Some(distro)
    }
}

impl ContextInferrer {
    /// # Errors
    ///
    /// Returns an error if a rule pattern fails to compile.
    pub fn new() -> Result<Self, ImageMatrixMgrError> {
        let rules = vec![
            DistroRule::new(r"-debian-12", "debian-12")?,
            DistroRule::new(r"-ubuntu-22\.04", "ubuntu-22.04")?,
            DistroRule::new(r"-alpine-([0-9]+\.[0-9]+)", "alpine-$1")?,
            DistroRule::new(r"-alpine", "alpine")?,
        ];
        Ok(Self {
            version: Regex::new(r"^[0-9]+\.[0-9]+")?,
            rules,
        })
    }

    /// Infer the relative context `<version>/<distro>` from the tag alone.
    ///
    /// Version is the leading `MAJOR.MINOR` of the tag, falling back to
    /// `latest`. Distro falls back to `debian-12` when no marker matches.
    #[must_use]
    pub fn infer(&self, tag: &str) -> String {
        let version = self
            .version
            .find(tag)
            .map_or("latest", |m| m.as_str());
        let distro = self
            .rules
            .iter()
            .find_map(|rule| rule.apply(tag))
            .unwrap_or_else(|| "debian-12".to_string());
        format!("{version}/{distro}")
    }
}

/// Resolve one tag entry to a concrete build target.
///
/// The explicit manifest context wins over inference. The Dockerfile path is
/// checked for existence exactly once; `None` means the caller should record
/// the entry as a missing context. A filesystem error during the check is
/// indistinguishable from absence and excludes the entry the same way.
#[must_use]
pub fn resolve_entry(
    image_dir: &Path,
    image: &str,
    entry: &TagEntry,
    inferrer: &ContextInferrer,
) -> Option<ResolvedBuildTarget> {
    let relative = match &entry.relative_context {
        Some(explicit) => explicit.clone(),
        None => inferrer.infer(&entry.tag),
    };

    let context = image_dir.join(&relative);
    let dockerfile = context.join("Dockerfile");
    if !dockerfile.is_file() {
        return None;
    }

    Some(ResolvedBuildTarget {
        name: image.to_string(),
        tag: entry.tag.clone(),
        context: context.display().to_string(),
        dockerfile: dockerfile.display().to_string(),
    })
}
