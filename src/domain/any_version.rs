//! Runtime choice between the two version shapes.
//!
//! Library callers should prefer [`Version`] and [`VersionWithRevision`]
//! directly; this wrapper exists for inputs whose shape is only known at
//! runtime, such as command-line arguments.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::precedence::Precedence;
use crate::domain::version::{Version, VersionWithRevision};
use crate::error::{Result, SemanVerError};

/// Number of numeric components a version carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// `MAJOR.MINOR.PATCH`
    #[default]
    Standard,
    /// `MAJOR.MINOR.PATCH.REVISION`
    #[serde(rename = "revision")]
    WithRevision,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Standard => write!(f, "standard"),
            Shape::WithRevision => write!(f, "revision"),
        }
    }
}

/// A parsed version of either shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyVersion {
    Standard(Version),
    WithRevision(VersionWithRevision),
}

impl AnyVersion {
    pub fn parse(input: &str, shape: Shape) -> Result<Self> {
        match shape {
            Shape::Standard => Version::parse(input).map(AnyVersion::Standard),
            Shape::WithRevision => VersionWithRevision::parse(input).map(AnyVersion::WithRevision),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            AnyVersion::Standard(_) => Shape::Standard,
            AnyVersion::WithRevision(_) => Shape::WithRevision,
        }
    }

    pub fn numeric_core(&self) -> &[u64] {
        match self {
            AnyVersion::Standard(v) => v.numeric_core(),
            AnyVersion::WithRevision(v) => v.numeric_core(),
        }
    }

    pub fn pre_release(&self) -> &str {
        match self {
            AnyVersion::Standard(v) => v.pre_release(),
            AnyVersion::WithRevision(v) => v.pre_release(),
        }
    }

    pub fn build_metadata(&self) -> &str {
        match self {
            AnyVersion::Standard(v) => v.build_metadata(),
            AnyVersion::WithRevision(v) => v.build_metadata(),
        }
    }

    /// Order two versions of the same shape.
    ///
    /// Mixed shapes are rejected with [`SemanVerError::ShapeMismatch`]; the
    /// shorter core is never padded.
    pub fn compare_order(&self, other: &AnyVersion) -> Result<Ordering> {
        match (self, other) {
            (AnyVersion::Standard(a), AnyVersion::Standard(b)) => Ok(a.compare_order(b)),
            (AnyVersion::WithRevision(a), AnyVersion::WithRevision(b)) => Ok(a.compare_order(b)),
            _ => Err(SemanVerError::ShapeMismatch {
                left: self.to_string(),
                right: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyVersion::Standard(v) => fmt::Display::fmt(v, f),
            AnyVersion::WithRevision(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<Version> for AnyVersion {
    fn from(version: Version) -> Self {
        AnyVersion::Standard(version)
    }
}

impl From<VersionWithRevision> for AnyVersion {
    fn from(version: VersionWithRevision) -> Self {
        AnyVersion::WithRevision(version)
    }
}
