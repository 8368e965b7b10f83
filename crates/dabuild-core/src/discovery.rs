//! Package checkout discovery.
//!
//! Each search pattern is expanded against the checkout home. A match's last
//! path segment is its package name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dabuild_schema::PackageName;
use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Checkouts found under the checkout home at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredPackages {
    /// Every match, in pattern order and then sorted within each pattern.
    pub paths: Vec<PathBuf>,
    /// Package name to checkout path. Later matches replace earlier ones.
    pub map: BTreeMap<PackageName, PathBuf>,
}

/// Expand `patterns` under `root` and index the matches by name.
///
/// Names with a leading dot are ignored. Entries whose names are not valid
/// UTF-8 are never matched by the glob walk. Entries that cannot be read
/// while walking are logged and skipped; a pattern with no matches
/// contributes nothing.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedPackageRoot`] if `root` is not valid
/// UTF-8, and [`ConfigError::InvalidSearchPattern`] if a pattern is not a
/// valid glob.
pub fn discover_packages<S: AsRef<str>>(
    root: &Path,
    patterns: &[S],
) -> Result<DiscoveredPackages, ConfigError> {
    // glob panics on non-UTF-8 names when asked to skip dot-names, so that
    // filter lives in `insert` instead.
    let options = MatchOptions::new();
    let Some(root_str) = root.to_str() else {
        return Err(ConfigError::UnsupportedPackageRoot(root.to_path_buf()));
    };
    // The root is taken literally; only the pattern part is a glob.
    let root = PathBuf::from(Pattern::escape(root_str));

    let mut found = DiscoveredPackages::default();
    for pattern in patterns {
        let pattern: &str = pattern.as_ref();
        let full = root.join(pattern);
        let entries = glob::glob_with(&full.to_string_lossy(), options).map_err(|source| {
            ConfigError::InvalidSearchPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        for entry in entries {
            match entry {
                Ok(path) => found.insert(path),
                Err(err) => warn!(
                    path = %err.path().display(),
                    error = %err.error(),
                    "skipping unreadable entry"
                ),
            }
        }
    }

    Ok(found)
}

impl DiscoveredPackages {
    fn insert(&mut self, path: PathBuf) {
        let Some(name) = path.file_name() else {
            return;
        };
        if name.as_encoded_bytes().starts_with(b".") {
            return;
        }
        let name = PackageName::new(name.to_string_lossy().into_owned());
        debug!(package = %name, path = %path.display(), "found package");

        if let Some(previous) = self.map.insert(name.clone(), path.clone()) {
            debug!(
                package = %name,
                replaced = %previous.display(),
                by = %path.display(),
                "duplicate package name, later match wins"
            );
        }
        self.paths.push(path);
    }
}
