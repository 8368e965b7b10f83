//! Compiled-in build tables.
//!
//! These are the releases we build for, their version tags, the
//! architectures we know about and the machines that build them.

use dabuild_schema::{Arch, Release};

/// Debian releases we build for, oldest first.
pub const DEBIAN_RELEASES: &[&str] = &["squeeze", "wheezy"];

/// Ubuntu releases we build for, oldest first.
pub const UBUNTU_RELEASES: &[&str] = &["precise", "quantal", "raring", "saucy"];

/// Version tag appended to packages built for each Debian release.
///
/// `jessie` has a tag but is not in [`DEBIAN_RELEASES`].
pub const DEBIAN_TAGS: &[(&str, &str)] =
    &[("squeeze", "6.0"), ("wheezy", "7.0"), ("jessie", "8.0~0.1")];

/// Version tag appended to packages built for each Ubuntu release.
pub const UBUNTU_TAGS: &[(&str, &str)] = &[
    ("precise", "12.04"),
    ("quantal", "12.10"),
    ("raring", "13.04"),
    ("saucy", "13.10"),
];

/// Builder host for each architecture. `local` builds on this machine.
pub const BUILDERS: &[(Arch, &str)] = &[
    (Arch::I386, "local"),
    (Arch::Amd64, "local"),
    (Arch::Armel, "hecatoncheires.mit.edu"),
    (Arch::Armhf, "hecatoncheires.mit.edu"),
    (Arch::Sparc, "package-fusion.mit.edu"),
];

/// Globs, relative to the checkout home, whose matches are package checkouts.
///
/// Order matters: when two matches share a name, the later pattern wins.
pub const PACKAGE_SEARCH_PATHS: &[&str] = &["athena/*", "debathena/*", "third/*"];

/// Root of the apt repository packages are published into.
pub const APT_ROOT_DIR: &str = "/mit/debathena/apt";

/// Architectures with working build infrastructure.
const BUILDABLE_ARCHES: [Arch; 2] = [Arch::I386, Arch::Amd64];

/// Whether `arch` is built for `release`.
///
/// Only i386 and amd64 have build infrastructure right now, so the release
/// does not affect the answer. This will change once the remote builders in
/// [`BUILDERS`] are brought up.
pub fn arch_supported_for_release(arch: Arch, _release: &Release) -> bool {
    BUILDABLE_ARCHES.contains(&arch)
}
