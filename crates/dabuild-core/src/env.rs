//! Environment variables read at the configuration boundary.
//!
//! | Variable | Value |
//! |---|---|
//! | `DEBATHENA_CHECKOUT_HOME` | Root under which package checkouts are searched |
//! | `DEBATHENA_SOURCE_DIR` | Where built source packages are placed |
//! | `DEBATHENA_ORIG_DIR` | Where upstream `.orig` tarballs live |
//!
//! All three are required. Library code never reads the process environment
//! directly; it goes through an [`Environment`], which tests build from a
//! fixed map.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Checkout home: root of the package source checkouts.
pub const CHECKOUT_HOME_VAR: &str = "DEBATHENA_CHECKOUT_HOME";

/// Output directory for generated source packages.
pub const SOURCE_DIR_VAR: &str = "DEBATHENA_SOURCE_DIR";

/// Directory holding upstream original tarballs.
pub const ORIG_DIR_VAR: &str = "DEBATHENA_ORIG_DIR";

/// A source of environment variables.
///
/// Overrides take precedence over the process environment. An isolated
/// environment sees only its overrides.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    overrides: BTreeMap<String, OsString>,
    inherit: bool,
}

impl Environment {
    /// The real process environment.
    pub fn process() -> Self {
        Self {
            overrides: BTreeMap::new(),
            inherit: true,
        }
    }

    /// An empty environment that never consults the process.
    pub fn isolated() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, shadowing any inherited value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<OsString> {
        if let Some(value) = self.overrides.get(key) {
            return Some(value.clone());
        }
        if self.inherit {
            std::env::var_os(key)
        } else {
            None
        }
    }

    /// Look up a required directory variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if the variable is
    /// unset or set to the empty string.
    pub fn require_path(&self, key: &'static str) -> Result<PathBuf, ConfigError> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
            _ => Err(ConfigError::MissingEnvironmentVariable(key)),
        }
    }
}
