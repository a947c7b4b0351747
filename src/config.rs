use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{Shape, TagPattern};
use crate::error::Result;

const LOCAL_CONFIG: &str = "./semanver.toml";
const USER_CONFIG: &str = ".semanver.toml";

/// Represents the complete configuration for semanver.
///
/// Contains parsing options (version shape, tag patterns) and output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub parsing: ParsingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default list of tag patterns.
fn default_tag_patterns() -> Vec<String> {
    vec!["v{version}".to_string(), "{version}".to_string()]
}

/// Configuration for how input strings become versions.
///
/// Each input is matched against `tag_patterns` in order; the first match
/// supplies the version text handed to the parser.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParsingConfig {
    #[serde(default)]
    pub shape: Shape,

    #[serde(default = "default_tag_patterns")]
    pub tag_patterns: Vec<String>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        ParsingConfig {
            shape: Shape::default(),
            tag_patterns: default_tag_patterns(),
        }
    }
}

impl ParsingConfig {
    /// Compile the configured tag patterns.
    pub fn compiled_patterns(&self) -> Result<Vec<TagPattern>> {
        self.tag_patterns.iter().map(TagPattern::new).collect()
    }
}

fn default_color() -> bool {
    true
}

/// Configuration for terminal output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: default_color(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semanver.toml` in current directory
/// 3. `.semanver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            let config_str = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&config_str)?;
            Ok(config)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    if Path::new(LOCAL_CONFIG).exists() {
        return Some(PathBuf::from(LOCAL_CONFIG));
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG))
        .filter(|path| path.exists())
}
