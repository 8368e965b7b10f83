//! dabuild-config - inspect the Debathena build configuration
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Loads the same [`BuildConfig`] the build pipeline uses and prints it, so
//! a misconfigured checkout home or a shadowed package shows up before a
//! build does.
//!
//! Directory flags override the corresponding environment variables:
//!
//! | Flag | Variable |
//! |---|---|
//! | `--checkout-home` | `DEBATHENA_CHECKOUT_HOME` |
//! | `--source-dir` | `DEBATHENA_SOURCE_DIR` |
//! | `--orig-dir` | `DEBATHENA_ORIG_DIR` |

pub mod cmd;
pub mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dabuild_core::env::{CHECKOUT_HOME_VAR, ORIG_DIR_VAR, SOURCE_DIR_VAR};
use dabuild_core::{BuildConfig, ConfigInputs, Environment};
use dabuild_schema::Release;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dabuild-config")]
#[command(author, version, about = "Inspect the Debathena build configuration")]
pub struct Cli {
    /// Root of the package checkouts [default: $DEBATHENA_CHECKOUT_HOME]
    #[arg(long, global = true)]
    pub checkout_home: Option<PathBuf>,

    /// Source package output directory [default: $DEBATHENA_SOURCE_DIR]
    #[arg(long, global = true)]
    pub source_dir: Option<PathBuf>,

    /// Original tarball directory [default: $DEBATHENA_ORIG_DIR]
    #[arg(long, global = true)]
    pub orig_dir: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List releases with their family and version tag
    Releases,
    /// List architectures, their builders and whether they are built
    Arches {
        /// Release to check support against
        #[arg(long, default_value = "wheezy")]
        release: Release,
    },
    /// List discovered package checkouts, or show one
    Packages {
        /// Package to look up
        name: Option<String>,
    },
    /// Show configured directories and the release signing key
    Paths,
    /// Print the whole configuration as JSON
    Dump,
}

impl Cli {
    /// The process environment with any directory flags applied on top.
    pub fn environment(&self) -> Environment {
        let mut env = Environment::process();
        let flags = [
            (CHECKOUT_HOME_VAR, &self.checkout_home),
            (SOURCE_DIR_VAR, &self.source_dir),
            (ORIG_DIR_VAR, &self.orig_dir),
        ];
        for (key, value) in flags {
            if let Some(path) = value {
                env = env.set(key, path.clone());
            }
        }
        env
    }

    /// Load the build configuration this invocation refers to.
    pub fn load_config(&self) -> Result<BuildConfig> {
        let inputs = ConfigInputs::from_environment(&self.environment())
            .context("Failed to read build configuration")?;
        BuildConfig::load(inputs).context("Failed to load build configuration")
    }
}
