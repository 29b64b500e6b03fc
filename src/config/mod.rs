//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml` (or the path in `SKETCHBOARD_CONFIG`).
//! Settings include the starting tool and brush, text defaults, grid, board colors,
//! canvas size, history limits and export location.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{
    ArrowConfig, BoardConfig, CanvasConfig, DrawingConfig, ExportConfig, GridConfig,
    HistoryConfig, TextConfig,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SKETCHBOARD_CONFIG";

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "rectangle"
/// stroke_color = "#1e88e5"
/// brush_size = 4
///
/// [grid]
/// show = true
/// size = 25
///
/// [board]
/// default_mode = "dark"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting tool and brush
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Text insertion defaults
    #[serde(default)]
    pub text: TextConfig,

    /// Arrowhead appearance
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Grid overlay and snapping
    #[serde(default)]
    pub grid: GridConfig,

    /// Light/dark board colors
    #[serde(default)]
    pub board: BoardConfig,

    /// Surface dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Undo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// PNG export location
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `drawing.brush_size`: 1 - 10
    /// - `drawing.opacity`: 0.1 - 1.0
    /// - `text.size`: 10 - 50
    /// - `grid.size`: 10 - 50
    /// - `arrow.length`: 5.0 - 50.0
    /// - `arrow.angle_degrees`: 15.0 - 60.0
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    pub fn validate_and_clamp(&mut self) {
        clamp_f64("drawing.brush_size", &mut self.drawing.brush_size, 1.0, 10.0);
        clamp_f64("drawing.opacity", &mut self.drawing.opacity, 0.1, 1.0);
        clamp_f64("text.size", &mut self.text.size, 10.0, 50.0);
        clamp_f64("grid.size", &mut self.grid.size, 10.0, 50.0);
        clamp_f64("arrow.length", &mut self.arrow.length, 5.0, 50.0);
        clamp_f64("arrow.angle_degrees", &mut self.arrow.angle_degrees, 15.0, 60.0);

        for (name, value) in [
            ("canvas.width", &mut self.canvas.width),
            ("canvas.height", &mut self.canvas.height),
        ] {
            if !(16..=8192).contains(&*value) {
                warn!("Invalid {name} {value}, clamping to 16-8192 range");
                *value = (*value).clamp(16, 8192);
            }
        }

        if self.board.default_mode.parse::<crate::input::BoardMode>().is_err() {
            warn!(
                "Invalid board default_mode '{}', falling back to 'light'",
                self.board.default_mode
            );
            self.board.default_mode = "light".to_string();
        }

        for (name, spec) in [
            ("drawing.stroke_color", &self.drawing.stroke_color),
            ("drawing.fill_color", &self.drawing.fill_color),
            ("grid.color", &self.grid.color),
            ("board.light_color", &self.board.light_color),
            ("board.dark_color", &self.board.dark_color),
        ] {
            if !spec.is_valid() {
                warn!("Unrecognised color for {name}: {spec:?}");
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// `SKETCHBOARD_CONFIG` wins when set; otherwise the file lives at
    /// `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the configuration to `config_path`, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists there or it cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editor integration.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(&*value) {
        warn!("Invalid {name} {value:.1}, clamping to {min}-{max} range");
        *value = if value.is_nan() { min } else { (*value).clamp(min, max) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::input::Tool;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_whiteboard_controls() {
        let config = Config::default();
        assert_eq!(config.drawing.default_tool, Tool::Pencil);
        assert_eq!(config.drawing.brush_size, 3.0);
        assert_eq!(config.text.size, 16.0);
        assert_eq!(config.grid.size, 20.0);
        assert_eq!((config.canvas.width, config.canvas.height), (800, 500));

        let style = config.drawing.stroke_style();
        assert_eq!(style.color, BLACK);
        assert_eq!(style.fill, None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            brush_size = 40
            opacity = 0.0

            [text]
            size = 4

            [grid]
            size = 100

            [canvas]
            width = 2

            [board]
            default_mode = "sepia"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.brush_size, 10.0);
        assert_eq!(config.drawing.opacity, 0.1);
        assert_eq!(config.text.size, 10.0);
        assert_eq!(config.grid.size, 50.0);
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.board.default_mode, "light");
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.history.max_snapshots, 50);
    }

    #[test]
    fn save_and_reload_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.drawing.default_tool = Tool::Star;
        config.grid.show = true;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.drawing.default_tool, Tool::Star);
        assert!(reloaded.grid.show);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\nbrush_size = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn example_file_parses_and_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        Config::create_default_file(&path).unwrap();
        assert!(Config::load_from(&path).is_ok());
        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("history"));
    }
}
