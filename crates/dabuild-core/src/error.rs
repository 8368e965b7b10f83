//! Errors raised while loading the build configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to construct a [`BuildConfig`](crate::BuildConfig).
///
/// Loading is the only fallible step; once built, the configuration never
/// errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Required environment variable {0} is not set")]
    MissingEnvironmentVariable(&'static str),

    /// The checkout home is not valid UTF-8, so it cannot be globbed.
    #[error("Package root {} is not valid UTF-8 and cannot be searched", .0.display())]
    UnsupportedPackageRoot(PathBuf),

    /// A package search pattern is not a valid glob.
    #[error("Invalid package search pattern '{pattern}': {source}")]
    InvalidSearchPattern {
        /// The pattern as supplied, relative to the checkout home.
        pattern: String,
        /// Parser error from the glob crate.
        #[source]
        source: glob::PatternError,
    },
}

impl ConfigError {
    /// Name of the missing environment variable, if that is what failed.
    pub fn missing_variable(&self) -> Option<&'static str> {
        match self {
            Self::MissingEnvironmentVariable(name) => Some(*name),
            Self::UnsupportedPackageRoot(_) | Self::InvalidSearchPattern { .. } => None,
        }
    }
}
