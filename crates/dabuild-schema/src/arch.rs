//! Debian architecture identifiers.

/// Target CPU architecture for a binary package build.
///
/// Variants are declared in catalogue order, which is also the `Ord` order.
///
/// # Example
///
/// ```
/// use dabuild_schema::Arch;
///
/// let arch: Arch = "amd64".parse().unwrap();
/// assert_eq!(arch, Arch::Amd64);
/// assert_eq!(arch.to_string(), "amd64");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// 32-bit x86
    I386,
    /// 64-bit x86
    Amd64,
    /// ARM EABI, soft float
    Armel,
    /// ARM EABI, hard float
    Armhf,
    /// SPARC
    Sparc,
}

/// Error returned when a string does not name a known [`Arch`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown architecture: {0}")]
pub struct ArchParseError(pub String);

impl Arch {
    /// Every architecture, in catalogue order.
    pub const ALL: [Self; 5] = [
        Self::I386,
        Self::Amd64,
        Self::Armel,
        Self::Armhf,
        Self::Sparc,
    ];

    /// Debian name of the architecture (`dpkg --print-architecture` form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I386 => "i386",
            Self::Amd64 => "amd64",
            Self::Armel => "armel",
            Self::Armhf => "armhf",
            Self::Sparc => "sparc",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Arch {
    type Err = ArchParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.as_str() == s)
            .ok_or_else(|| ArchParseError(s.to_string()))
    }
}
