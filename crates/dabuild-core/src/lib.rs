//! Build configuration for the Debathena package pipeline.
//!
//! The pipeline needs to know which releases and architectures it builds
//! for, which machine builds each architecture, where package checkouts live
//! and where its outputs go. [`BuildConfig`] gathers all of that once, at
//! startup, from [`ConfigInputs`]:
//!
//! ```no_run
//! use dabuild_core::BuildConfig;
//!
//! let config = BuildConfig::from_env()?;
//! for release in config.releases() {
//!     println!("{release}: {:?}", config.supported_arches(release));
//! }
//! # Ok::<(), dabuild_core::ConfigError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;

pub use catalog::arch_supported_for_release;
pub use config::{BuildConfig, ConfigInputs};
pub use discovery::{DiscoveredPackages, discover_packages};
pub use env::Environment;
pub use error::ConfigError;
