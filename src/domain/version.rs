use std::fmt;
use std::str::FromStr;

use crate::domain::parser;
use crate::domain::precedence::Precedence;
use crate::error::{Result, SemanVerError};

/// Semantic version of the form `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
///
/// Equality is field-exact, so `1.0.0+build` and `1.0.0` are not equal even
/// though neither is older than the other. Ordering lives on [`Precedence`].
///
/// Values only come from [`Version::parse`]; there is no way to assemble one
/// from parts.
///
/// ```compile_fail
/// let v = semanver::Version::new(1, 0, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    core: [u64; 3],
    pre_release: String,
    build_metadata: String,
}

impl Version {
    #[cfg(test)]
    pub(crate) fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            core: [major, minor, patch],
            pre_release: String::new(),
            build_metadata: String::new(),
        }
    }

    /// Parse a version string (e.g., "1.0.0-alpha1+234F234D").
    pub fn parse(input: &str) -> Result<Self> {
        let raw = parser::parse_components::<3>(input)?;
        Ok(Version {
            core: raw.numbers,
            pre_release: raw.pre_release.to_string(),
            build_metadata: raw.build_metadata.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_pre_release(self, pre_release: impl Into<String>) -> Self {
        Version {
            pre_release: pre_release.into(),
            ..self
        }
    }

    #[cfg(test)]
    pub(crate) fn with_build_metadata(self, build_metadata: impl Into<String>) -> Self {
        Version {
            build_metadata: build_metadata.into(),
            ..self
        }
    }

    pub fn major(&self) -> u64 {
        self.core[0]
    }

    pub fn minor(&self) -> u64 {
        self.core[1]
    }

    pub fn patch(&self) -> u64 {
        self.core[2]
    }

    /// Pre-release text, empty for a release.
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// Build metadata text, empty when absent.
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }
}

impl Precedence for Version {
    fn numeric_core(&self) -> &[u64] {
        &self.core
    }

    fn pre_release(&self) -> &str {
        &self.pre_release
    }
}

impl FromStr for Version {
    type Err = SemanVerError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())?;
        write_suffixes(f, &self.pre_release, &self.build_metadata)
    }
}

/// Semantic version with a fourth component:
/// `MAJOR.MINOR.PATCH.REVISION[-PRE][+BUILD]`.
///
/// A separate type from [`Version`]; the two shapes never compare with each
/// other.
///
/// ```compile_fail
/// let v = semanver::VersionWithRevision::parse("1.0.0.5")
///     .unwrap()
///     .with_pre_release("rc+7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionWithRevision {
    core: [u64; 4],
    pre_release: String,
    build_metadata: String,
}

impl VersionWithRevision {
    #[cfg(test)]
    pub(crate) fn new(major: u64, minor: u64, patch: u64, revision: u64) -> Self {
        VersionWithRevision {
            core: [major, minor, patch, revision],
            pre_release: String::new(),
            build_metadata: String::new(),
        }
    }

    /// Parse a version string (e.g., "1.0.0.5-alpha1+234F234D").
    pub fn parse(input: &str) -> Result<Self> {
        let raw = parser::parse_components::<4>(input)?;
        Ok(VersionWithRevision {
            core: raw.numbers,
            pre_release: raw.pre_release.to_string(),
            build_metadata: raw.build_metadata.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_pre_release(self, pre_release: impl Into<String>) -> Self {
        VersionWithRevision {
            pre_release: pre_release.into(),
            ..self
        }
    }

    #[cfg(test)]
    pub(crate) fn with_build_metadata(self, build_metadata: impl Into<String>) -> Self {
        VersionWithRevision {
            build_metadata: build_metadata.into(),
            ..self
        }
    }

    pub fn major(&self) -> u64 {
        self.core[0]
    }

    pub fn minor(&self) -> u64 {
        self.core[1]
    }

    pub fn patch(&self) -> u64 {
        self.core[2]
    }

    pub fn revision(&self) -> u64 {
        self.core[3]
    }

    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }
}

impl Precedence for VersionWithRevision {
    fn numeric_core(&self) -> &[u64] {
        &self.core
    }

    fn pre_release(&self) -> &str {
        &self.pre_release
    }
}

impl FromStr for VersionWithRevision {
    type Err = SemanVerError;

    fn from_str(s: &str) -> Result<Self> {
        VersionWithRevision::parse(s)
    }
}

impl fmt::Display for VersionWithRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major(),
            self.minor(),
            self.patch(),
            self.revision()
        )?;
        write_suffixes(f, &self.pre_release, &self.build_metadata)
    }
}

fn write_suffixes(f: &mut fmt::Formatter<'_>, pre_release: &str, build_metadata: &str) -> fmt::Result {
    if !pre_release.is_empty() {
        write!(f, "-{}", pre_release)?;
    }
    if !build_metadata.is_empty() {
        write!(f, "+{}", build_metadata)?;
    }
    Ok(())
}
