//! The build configuration registry.
//!
//! A [`BuildConfig`] is built once, from explicit [`ConfigInputs`], and then
//! handed by reference to everything that needs it. Nothing in it changes
//! after [`BuildConfig::load`] returns, so a shared `&BuildConfig` (or an
//! `Arc<BuildConfig>`) may be read from any number of threads.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dabuild_schema::{Arch, BuilderHost, PackageName, RELEASE_TAG_KEY, Release, ReleaseFamily};
use serde::Serialize;
use tracing::info;

use crate::catalog;
use crate::discovery::discover_packages;
use crate::env::{CHECKOUT_HOME_VAR, Environment, ORIG_DIR_VAR, SOURCE_DIR_VAR};
use crate::error::ConfigError;

/// Everything a [`BuildConfig`] is computed from, apart from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigInputs {
    /// Checkout home: package checkouts are searched for under here.
    pub package_root: PathBuf,
    /// Output directory for source packages.
    pub source_package_dir: PathBuf,
    /// Directory holding upstream original tarballs.
    pub orig_tarball_dir: PathBuf,
    /// Globs relative to `package_root`, in priority order (last wins).
    pub package_search_paths: Vec<String>,
}

impl ConfigInputs {
    /// Inputs with the default package search paths.
    pub fn new(
        package_root: impl Into<PathBuf>,
        source_package_dir: impl Into<PathBuf>,
        orig_tarball_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            package_root: package_root.into(),
            source_package_dir: source_package_dir.into(),
            orig_tarball_dir: orig_tarball_dir.into(),
            package_search_paths: catalog::PACKAGE_SEARCH_PATHS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Replace the package search paths.
    pub fn with_search_paths<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.package_search_paths = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Read the three directories from `env`.
    ///
    /// Variables are checked in the order checkout home, source dir, orig
    /// dir; the first one missing is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] naming the first
    /// variable that is unset or empty.
    pub fn from_environment(env: &Environment) -> Result<Self, ConfigError> {
        Ok(Self::new(
            env.require_path(CHECKOUT_HOME_VAR)?,
            env.require_path(SOURCE_DIR_VAR)?,
            env.require_path(ORIG_DIR_VAR)?,
        ))
    }
}

/// Read-only catalogue of build settings.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    debian_releases: Vec<Release>,
    ubuntu_releases: Vec<Release>,
    releases: Vec<Release>,
    debian_tags: BTreeMap<Release, String>,
    ubuntu_tags: BTreeMap<Release, String>,
    arches: Vec<Arch>,
    builders: BTreeMap<Arch, BuilderHost>,
    package_search_paths: Vec<String>,
    package_root: PathBuf,
    package_paths: Vec<PathBuf>,
    package_map: BTreeMap<PackageName, PathBuf>,
    source_package_dir: PathBuf,
    orig_tarball_dir: PathBuf,
    apt_root_dir: PathBuf,
    release_tag_key: &'static str,
}

impl BuildConfig {
    /// Build the configuration, scanning the checkout home for packages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedPackageRoot`] if the checkout home
    /// is not valid UTF-8, and [`ConfigError::InvalidSearchPattern`] if one
    /// of the search paths is not a valid glob.
    pub fn load(inputs: ConfigInputs) -> Result<Self, ConfigError> {
        let ConfigInputs {
            package_root,
            source_package_dir,
            orig_tarball_dir,
            package_search_paths,
        } = inputs;

        let discovered = discover_packages(&package_root, &package_search_paths)?;

        let debian_releases = releases_of(catalog::DEBIAN_RELEASES);
        let ubuntu_releases = releases_of(catalog::UBUNTU_RELEASES);
        let releases = debian_releases
            .iter()
            .chain(&ubuntu_releases)
            .cloned()
            .collect();

        let config = Self {
            debian_releases,
            ubuntu_releases,
            releases,
            debian_tags: tags_of(catalog::DEBIAN_TAGS),
            ubuntu_tags: tags_of(catalog::UBUNTU_TAGS),
            arches: Arch::ALL.to_vec(),
            builders: catalog::BUILDERS
                .iter()
                .map(|&(arch, host)| (arch, BuilderHost::new(host)))
                .collect(),
            package_search_paths,
            package_root,
            package_paths: discovered.paths,
            package_map: discovered.map,
            source_package_dir,
            orig_tarball_dir,
            apt_root_dir: PathBuf::from(catalog::APT_ROOT_DIR),
            release_tag_key: RELEASE_TAG_KEY,
        };

        info!(
            package_root = %config.package_root.display(),
            packages = config.package_map.len(),
            "loaded build configuration"
        );
        Ok(config)
    }

    /// Load from the process environment.
    ///
    /// This is the only place the process environment is consulted; call it
    /// at program start and pass the result down.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if a required
    /// variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(ConfigInputs::from_environment(&Environment::process())?)
    }

    /// All releases: Debian first, then Ubuntu, each oldest first.
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Debian releases we build for.
    pub fn debian_releases(&self) -> &[Release] {
        &self.debian_releases
    }

    /// Ubuntu releases we build for.
    pub fn ubuntu_releases(&self) -> &[Release] {
        &self.ubuntu_releases
    }

    /// Debian version tags by release codename.
    pub fn debian_tags(&self) -> &BTreeMap<Release, String> {
        &self.debian_tags
    }

    /// Ubuntu version tags by release codename.
    pub fn ubuntu_tags(&self) -> &BTreeMap<Release, String> {
        &self.ubuntu_tags
    }

    /// Known architectures in catalogue order.
    pub fn arches(&self) -> &[Arch] {
        &self.arches
    }

    /// Builder host for each architecture.
    pub fn builders(&self) -> &BTreeMap<Arch, BuilderHost> {
        &self.builders
    }

    /// Globs searched for package checkouts.
    pub fn package_search_paths(&self) -> &[String] {
        &self.package_search_paths
    }

    /// Every checkout path matched at load time, in discovery order.
    pub fn package_paths(&self) -> &[PathBuf] {
        &self.package_paths
    }

    /// Package name to checkout path.
    pub fn package_map(&self) -> &BTreeMap<PackageName, PathBuf> {
        &self.package_map
    }

    /// Checkout home.
    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    /// Output directory for source packages.
    pub fn source_package_dir(&self) -> &Path {
        &self.source_package_dir
    }

    /// Directory holding upstream original tarballs.
    pub fn orig_tarball_dir(&self) -> &Path {
        &self.orig_tarball_dir
    }

    /// Root of the apt repository.
    pub fn apt_root_dir(&self) -> &Path {
        &self.apt_root_dir
    }

    /// Identifier of the release tag signing key.
    pub fn release_tag_key(&self) -> &'static str {
        self.release_tag_key
    }

    /// Whether `arch` is built for `release`. See
    /// [`catalog::arch_supported_for_release`].
    #[allow(clippy::unused_self)]
    pub fn arch_supported_for_release(&self, arch: Arch, release: &Release) -> bool {
        catalog::arch_supported_for_release(arch, release)
    }

    /// Architectures built for `release`, in catalogue order.
    pub fn supported_arches(&self, release: &Release) -> Vec<Arch> {
        self.arches
            .iter()
            .copied()
            .filter(|&arch| self.arch_supported_for_release(arch, release))
            .collect()
    }

    /// Family of a release we build for, or `None` for unknown codenames.
    pub fn release_family(&self, release: &str) -> Option<ReleaseFamily> {
        if self.debian_releases.iter().any(|r| r == release) {
            Some(ReleaseFamily::Debian)
        } else if self.ubuntu_releases.iter().any(|r| r == release) {
            Some(ReleaseFamily::Ubuntu)
        } else {
            None
        }
    }

    /// Version tag for a codename, looked up in the Debian table first.
    ///
    /// This also answers for codenames that have a tag but are not build
    /// targets.
    pub fn release_tag(&self, release: &str) -> Option<&str> {
        self.debian_tags
            .get(release)
            .or_else(|| self.ubuntu_tags.get(release))
            .map(String::as_str)
    }

    /// Builder host for `arch`.
    pub fn builder_for(&self, arch: Arch) -> Option<&BuilderHost> {
        self.builders.get(&arch)
    }

    /// Checkout path of a package.
    pub fn package_path(&self, name: &str) -> Option<&Path> {
        self.package_map.get(name).map(PathBuf::as_path)
    }
}

fn releases_of(codenames: &[&str]) -> Vec<Release> {
    codenames.iter().map(|&c| Release::new(c)).collect()
}

fn tags_of(table: &[(&str, &str)]) -> BTreeMap<Release, String> {
    table
        .iter()
        .map(|&(release, tag)| (Release::new(release), tag.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn empty_config() -> (tempfile::TempDir, BuildConfig) {
        let tmp = tempdir().unwrap();
        let inputs = ConfigInputs::new(tmp.path(), "/srv/source", "/srv/orig");
        let config = BuildConfig::load(inputs).unwrap();
        (tmp, config)
    }

    #[test]
    fn test_releases_are_debian_then_ubuntu() {
        let (_tmp, config) = empty_config();
        let names: Vec<&str> = config.releases().iter().map(Release::as_str).collect();
        assert_eq!(
            names,
            vec!["squeeze", "wheezy", "precise", "quantal", "raring", "saucy"]
        );
        assert_eq!(
            config.releases().len(),
            config.debian_releases().len() + config.ubuntu_releases().len()
        );
    }

    #[test]
    fn test_release_lookups() {
        let (_tmp, config) = empty_config();
        assert_eq!(config.release_family("wheezy"), Some(ReleaseFamily::Debian));
        assert_eq!(config.release_family("raring"), Some(ReleaseFamily::Ubuntu));
        assert_eq!(config.release_family("jessie"), None);

        assert_eq!(config.release_tag("squeeze"), Some("6.0"));
        assert_eq!(config.release_tag("saucy"), Some("13.10"));
        assert_eq!(config.release_tag("jessie"), Some("8.0~0.1"));
        assert_eq!(config.release_tag("hardy"), None);
    }

    #[test]
    fn test_builders_cover_every_arch() {
        let (_tmp, config) = empty_config();
        assert_eq!(config.builders().len(), config.arches().len());
        for arch in config.arches() {
            assert!(config.builder_for(*arch).is_some(), "{arch}");
        }
        assert!(config.builder_for(Arch::Amd64).unwrap().is_local());
        assert_eq!(
            config.builder_for(Arch::Sparc).unwrap().as_str(),
            "package-fusion.mit.edu"
        );
    }

    #[test]
    fn test_supported_arches() {
        let (_tmp, config) = empty_config();
        for release in config.releases() {
            assert_eq!(
                config.supported_arches(release),
                vec![Arch::I386, Arch::Amd64]
            );
        }
    }

    #[test]
    fn test_fixed_paths() {
        let (tmp, config) = empty_config();
        assert_eq!(config.package_root(), tmp.path());
        assert_eq!(config.source_package_dir(), Path::new("/srv/source"));
        assert_eq!(config.orig_tarball_dir(), Path::new("/srv/orig"));
        assert_eq!(config.apt_root_dir(), Path::new("/mit/debathena/apt"));
        assert_eq!(config.release_tag_key(), "0D8A9E8F");
        assert!(config.package_map().is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let (_tmp, config) = empty_config();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["builders"]["armel"], "hecatoncheires.mit.edu");
        assert_eq!(value["debian_tags"]["jessie"], "8.0~0.1");
        assert_eq!(value["release_tag_key"], "0D8A9E8F");
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BuildConfig>();
    }
}
