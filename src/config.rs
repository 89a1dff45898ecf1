//! Editor configuration.
//!
//! Visual constants (anchor sizes, line thickness, colors), the square-making
//! policy inputs and the log level. Stored as JSON next to the user's other
//! settings.

use labelkit_ui::{Color, Key, Size};
use serde::{Deserialize, Serialize};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Settings consumed by the editing engines, renderer and feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Force new and resized rectangles to be squares
    #[serde(default)]
    pub make_square: bool,

    /// Holding this key inverts `make_square` for the current gesture and
    /// squares the active rectangle on click
    #[serde(default = "default_square_modifier")]
    pub square_modifier: Key,

    /// Drawn size of resize handles
    #[serde(default = "default_anchor_size")]
    pub anchor_size: Size,

    /// Hit area of resize handles and of rectangle edges
    #[serde(default = "default_anchor_hover_size")]
    pub anchor_hover_size: Size,

    /// Outline thickness of rectangles
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f32,

    #[serde(default)]
    pub colors: ColorSettings,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_square_modifier() -> Key {
    Key::Control
}

fn default_anchor_size() -> Size {
    Size::new(8.0, 8.0)
}

fn default_anchor_hover_size() -> Size {
    Size::new(20.0, 20.0)
}

fn default_line_thickness() -> f32 {
    2.0
}

/// Colors used when drawing labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Outline of active and highlighted labels and of the creation preview
    pub active_line: Color,
    /// Outline of labels without a known class
    pub default_line: Color,
    /// Fill of the resize handles
    pub active_anchor: Color,
    /// Tooltip text
    pub indicator_text: Color,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            active_line: Color::rgb(0.0, 1.0, 0.59),
            default_line: Color::rgb(1.0, 1.0, 1.0),
            active_anchor: Color::rgb(0.09, 0.09, 0.09),
            indicator_text: Color::WHITE,
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            make_square: false,
            square_modifier: default_square_modifier(),
            anchor_size: default_anchor_size(),
            anchor_hover_size: default_anchor_hover_size(),
            line_thickness: default_line_thickness(),
            colors: ColorSettings::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        if !(config.line_thickness.is_finite() && config.line_thickness > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "line_thickness must be positive, got {}",
                config.line_thickness
            )));
        }
        for (name, size) in [
            ("anchor_size", config.anchor_size),
            ("anchor_hover_size", config.anchor_hover_size),
        ] {
            if !(size.width >= 0.0 && size.height >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {}x{}",
                    size.width, size.height
                )));
            }
        }

        Ok(config)
    }

    /// Read configuration from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write configuration to a file, creating parent directories if needed.
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "labelkit-config.json"
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("labelkit").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("labelkit")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A value is outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
