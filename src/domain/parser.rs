//! Tokenizer shared by both version shapes.
//!
//! A version string is decomposed left to right: the first `+` splits off
//! build metadata, the first `-` in what remains splits off the pre-release
//! text, and the rest is the dot-separated numeric core.

use tracing::{debug, trace};

use crate::error::{Result, SemanVerError};

/// Field names of the numeric core, in positional order.
pub(crate) const COMPONENT_NAMES: [&str; 4] = ["major", "minor", "patch", "revision"];

/// The three textual sections of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VersionParts<'a> {
    pub core: &'a str,
    pub pre_release: &'a str,
    pub build_metadata: &'a str,
}

/// A fully validated version string with `N` numeric components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawVersion<'a, const N: usize> {
    pub numbers: [u64; N],
    pub pre_release: &'a str,
    pub build_metadata: &'a str,
}

/// Split a version string into core, pre-release and build metadata.
///
/// Absent sections come back as empty strings. Only the first `+` and the
/// first `-` act as separators; later occurrences belong to the section text.
pub(crate) fn split_version(input: &str) -> VersionParts<'_> {
    let (rest, build_metadata) = input.split_once('+').unwrap_or((input, ""));
    let (numeric_core, pre_release) = rest.split_once('-').unwrap_or((rest, ""));

    trace!(
        input,
        numeric_core,
        pre_release,
        build_metadata,
        "Split version string"
    );

    VersionParts {
        core: numeric_core,
        pre_release,
        build_metadata,
    }
}

/// Parse a version string whose numeric core has exactly `N` components.
/// `N` is 3 or 4.
pub(crate) fn parse_components<const N: usize>(input: &str) -> Result<RawVersion<'_, N>> {
    if input.trim().is_empty() {
        debug!("Rejected empty version string");
        return Err(SemanVerError::EmptyInput);
    }

    let parts = split_version(input);
    let segments: Vec<&str> = parts.core.split('.').collect();
    if segments.len() != N {
        debug!(
            input,
            expected = N,
            found = segments.len(),
            "Rejected version string with wrong component count"
        );
        return Err(SemanVerError::InvalidFormat {
            input: input.to_string(),
            expected: N,
            found: segments.len(),
        });
    }

    let mut numbers = [0u64; N];
    for (index, (slot, segment)) in numbers.iter_mut().zip(&segments).enumerate() {
        *slot = parse_number(input, COMPONENT_NAMES[index], segment)?;
    }

    Ok(RawVersion {
        numbers,
        pre_release: parts.pre_release,
        build_metadata: parts.build_metadata,
    })
}

/// Parse one numeric component. Only ASCII digits are accepted, so signs and
/// whitespace that `str::parse` would tolerate are rejected here.
fn parse_number(input: &str, component: &'static str, segment: &str) -> Result<u64> {
    let invalid = || {
        debug!(input, component, segment, "Rejected numeric component");
        SemanVerError::InvalidNumber {
            input: input.to_string(),
            component,
            value: segment.to_string(),
        }
    };

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    segment.parse::<u64>().map_err(|_| invalid())
}
