use regex::Regex;
use tracing::debug;

use crate::error::{Result, SemanVerError};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    regex: Regex,
}

impl TagPattern {
    /// Compile a tag pattern. The pattern must contain exactly one
    /// `{version}` placeholder; everything else is matched literally.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        match pattern.matches(PLACEHOLDER).count() {
            1 => {}
            0 => {
                return Err(SemanVerError::tag(format!(
                    "Pattern '{}' must contain {} placeholder",
                    pattern, PLACEHOLDER
                )))
            }
            _ => {
                return Err(SemanVerError::tag(format!(
                    "Pattern '{}' contains more than one {} placeholder",
                    pattern, PLACEHOLDER
                )))
            }
        }

        // Escape everything, then let the placeholder capture the rest.
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", "(.+)");
        let regex = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| SemanVerError::tag(format!("Invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, regex })
    }

    /// The text standing in for `{version}`, if `tag` matches.
    pub fn extract<'t>(&self, tag: &'t str) -> Option<&'t str> {
        self.regex
            .captures(tag)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

/// Strip a tag down to its version text using the first matching pattern.
/// Tags that match no pattern are returned unchanged.
pub fn extract_version<'t>(tag: &'t str, patterns: &[TagPattern]) -> &'t str {
    patterns
        .iter()
        .find_map(|pattern| {
            let version = pattern.extract(tag)?;
            debug!(tag, pattern = %pattern.pattern, version, "Matched tag pattern");
            Some(version)
        })
        .unwrap_or(tag)
}
