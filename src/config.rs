//! Configuration system for the portrait generator
//!
//! All settings are compiled-in defaults; an optional TOML file can override
//! them. Precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Configuration file (TOML)
//! 3. Default values

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::render::font::FONT_CANDIDATES;

/// File name searched for in the working directory when no explicit path is
/// given.
const DEFAULT_CONFIG_FILE: &str = "coach-portraits.toml";

/// Main generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output location settings
    pub output: OutputSettings,

    /// Canvas geometry settings
    pub canvas: CanvasSettings,

    /// Font lookup settings
    pub font: FontSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Output location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the PNGs are written to, relative to the working directory
    pub dir: String,
}

/// Canvas geometry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Edge length of the square canvas in pixels
    pub size: u32,
}

/// Font lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Candidate font paths, tried in order; an empty list disables initials
    pub candidates: Vec<String>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: OutputSettings::default(),
            canvas: CanvasSettings::default(),
            font: FontSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: "assets/images".to_string(),
        }
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self { size: 200 }
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            candidates: FONT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration, merging an optional TOML file over the defaults.
    ///
    /// An explicit path must exist; with no explicit path, a
    /// `coach-portraits.toml` in the working directory is picked up if
    /// present, otherwise defaults are used.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config_file = Self::find_config_file(config_path)?;

        let config = if let Some(path) = config_file {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.clone(),
                source: e,
            })?
        } else {
            debug!("No configuration file found, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        // If an explicit path is provided, use it (error if not found)
        if let Some(path) = explicit_path {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(Some(path));
            }
            return Err(Error::ConfigNotFound { path });
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(None)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.dir.is_empty() {
            return Err(Error::ConfigValidation {
                message: "Output directory cannot be empty".to_string(),
                field: Some("output.dir".to_string()),
            });
        }

        // The circle margin and indicator dot geometry need room to fit.
        if self.canvas.size < 32 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "Canvas size must be at least 32 pixels, got {}",
                    self.canvas.size
                ),
                field: Some("canvas.size".to_string()),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
                field: Some("logging.level".to_string()),
            });
        }

        Ok(())
    }

    /// Get the output directory as a PathBuf
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.dir)
    }
}

/// Initialize a new configuration file
pub fn init_config(path: Option<&str>, force: bool) -> Result<()> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if config_path.exists() && !force {
        return Err(Error::ConfigValidation {
            message: format!(
                "Configuration file already exists: {}. Use --force to overwrite.",
                config_path.display()
            ),
            field: None,
        });
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&config_path, generate_default_config())?;

    println!("Configuration file created: {}", config_path.display());
    Ok(())
}

/// Generate default configuration content with comments
fn generate_default_config() -> String {
    r#"# Coach Portraits configuration

[output]
# Directory the PNGs are written to, relative to the working directory
dir = "assets/images"

[canvas]
# Edge length of the square canvas in pixels
size = 200

[font]
# Candidate font paths, tried in order. Leave empty to skip initials.
# candidates = ["/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}
