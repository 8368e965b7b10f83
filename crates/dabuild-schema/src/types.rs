//! Builder hosts and package names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Sentinel builder name meaning "build on this machine".
pub const LOCAL_BUILDER: &str = "local";

/// The machine responsible for building a given architecture.
///
/// Serialized as a plain string: [`LOCAL_BUILDER`] for local builds,
/// otherwise the remote hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuilderHost {
    /// Build on the host running the pipeline.
    Local,
    /// Build on a remote machine reachable at this hostname.
    Remote(String),
}

impl BuilderHost {
    /// Parse a builder name, mapping the `local` sentinel to [`BuilderHost::Local`].
    pub fn new(name: &str) -> Self {
        if name == LOCAL_BUILDER {
            Self::Local
        } else {
            Self::Remote(name.to_string())
        }
    }

    /// Whether builds run on this machine.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    /// The builder name: `local` or the remote hostname.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => LOCAL_BUILDER,
            Self::Remote(host) => host,
        }
    }
}

impl std::fmt::Display for BuilderHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for BuilderHost {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BuilderHost {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<BuilderHost> for String {
    fn from(host: BuilderHost) -> Self {
        match host {
            BuilderHost::Local => LOCAL_BUILDER.to_string(),
            BuilderHost::Remote(name) => name,
        }
    }
}

/// A source package name, taken from the last segment of its checkout path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    /// Create a package name. The name is kept exactly as given.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for PackageName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for PackageName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PackageName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackageName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_host_sentinel() {
        assert_eq!(BuilderHost::new("local"), BuilderHost::Local);
        assert!(BuilderHost::new("local").is_local());

        let remote = BuilderHost::new("hecatoncheires.mit.edu");
        assert!(!remote.is_local());
        assert_eq!(remote.as_str(), "hecatoncheires.mit.edu");
    }

    #[test]
    fn test_builder_host_serde_roundtrip_as_string() {
        let json = serde_json::to_string(&BuilderHost::Local).unwrap();
        assert_eq!(json, "\"local\"");

        let host: BuilderHost = serde_json::from_str("\"package-fusion.mit.edu\"").unwrap();
        assert_eq!(
            host,
            BuilderHost::Remote("package-fusion.mit.edu".to_string())
        );
    }

    #[test]
    fn test_package_name_is_case_preserving() {
        let name = PackageName::new("Debathena-Config");
        assert_eq!(name.as_str(), "Debathena-Config");
        assert_ne!(name, "debathena-config");
    }
}
