//! Startup configuration
//!
//! Window title/size and asset paths, read from a RON file. Every field has
//! a default, so the file may be partial or missing altogether.

use std::fs;
use std::path::Path;
use serde::Deserialize;

/// Default location of the config file, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dapper Dasher".into(),
            width: 800,
            height: 600,
        }
    }
}

/// Where each texture and sound lives
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub scarfy: String,
    pub nebula: String,
    pub background: String,
    pub midground: String,
    pub foreground: String,
    pub music: String,
    pub jump: String,
    pub grunt: String,
    pub impact: String,
    pub lose: String,
    pub win: String,
    /// Background music volume (0.0-1.0)
    pub music_volume: f32,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            scarfy: "assets/textures/scarfy.png".into(),
            nebula: "assets/textures/12_nebula_spritesheet.png".into(),
            background: "assets/textures/far-buildings.png".into(),
            midground: "assets/textures/back-buildings.png".into(),
            foreground: "assets/textures/foreground.png".into(),
            music: "assets/sounds/main.wav".into(),
            jump: "assets/sounds/jump.wav".into(),
            grunt: "assets/sounds/grunt.wav".into(),
            impact: "assets/sounds/impact.wav".into(),
            lose: "assets/sounds/lose.wav".into(),
            win: "assets/sounds/win.wav".into(),
            music_volume: 0.5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetPaths,
}

impl GameConfig {
    /// Parse and validate a RON document
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load `path`, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.assets.scarfy.is_empty() || self.assets.nebula.is_empty() {
            return Err(ConfigError::ValidationError("sprite sheet paths must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.assets.music_volume) {
            return Err(ConfigError::ValidationError(format!(
                "music_volume must be within 0.0..=1.0, got {}",
                self.assets.music_volume
            )));
        }
        Ok(())
    }
}
