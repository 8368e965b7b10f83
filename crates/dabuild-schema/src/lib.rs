//! Shared vocabulary for the Debathena build tools.
//!
//! These types carry no policy: which releases are built, and on which
//! machines, lives in `dabuild-core`.

pub mod arch;
pub mod release;
pub mod types;

// Re-exports
pub use arch::*;
pub use release::*;
pub use types::*;

/// Identifier of the key used to sign release tags.
pub const RELEASE_TAG_KEY: &str = "0D8A9E8F";
