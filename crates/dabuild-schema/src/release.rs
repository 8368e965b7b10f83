//! Distribution releases and the families they belong to.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// The distribution a release codename belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseFamily {
    /// Debian releases (e.g. `squeeze`).
    Debian,
    /// Ubuntu releases (e.g. `precise`).
    Ubuntu,
}

impl ReleaseFamily {
    /// Lowercase name of the family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debian => "debian",
            Self::Ubuntu => "ubuntu",
        }
    }
}

impl std::fmt::Display for ReleaseFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A release codename such as `wheezy` or `saucy`.
///
/// The codename is stored as given. Whether a codename is a release we build
/// for is a question for the build configuration, not for this type: tag
/// tables may name codenames that are not (yet) build targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Release(String);

impl Release {
    /// Create a release from its codename.
    pub fn new(codename: impl Into<String>) -> Self {
        Self(codename.into())
    }

    /// Return the codename as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for Release {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Release {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Release {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Release {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Release {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Release {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Release {
    fn from(s: String) -> Self {
        Self(s)
    }
}
