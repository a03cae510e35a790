use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::metrics::FontMetrics;
use crate::ui::theme::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color for theme.{field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_fps: f64,
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: Option<String>,
    #[serde(default = "default_note_placeholder")]
    pub note_placeholder: Option<String>,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub metrics: FontMetrics,
}

/// Color names as accepted by ratatui's `Color::from_str`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_text_color")]
    pub text: String,
    #[serde(default = "default_disabled_text_color")]
    pub disabled_text: String,
    #[serde(default = "default_border_color")]
    pub border: String,
    #[serde(default = "default_focused_border_color")]
    pub focused_border: String,
}

fn default_tick_rate() -> f64 {
    30.0
}

fn default_search_placeholder() -> Option<String> {
    Some("Search...".to_string())
}

fn default_note_placeholder() -> Option<String> {
    Some("Write a note".to_string())
}

fn default_text_color() -> String {
    "white".to_string()
}

fn default_disabled_text_color() -> String {
    "darkgray".to_string()
}

fn default_border_color() -> String {
    "darkgray".to_string()
}

fn default_focused_border_color() -> String {
    "cyan".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text: default_text_color(),
            disabled_text: default_disabled_text_color(),
            border: default_border_color(),
            focused_border: default_focused_border_color(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_fps: default_tick_rate(),
            search_placeholder: default_search_placeholder(),
            note_placeholder: default_note_placeholder(),
            theme: ThemeConfig::default(),
            metrics: FontMetrics::default(),
        }
    }
}

impl ThemeConfig {
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        let fg = |field: &'static str, value: &str| {
            Color::from_str(value)
                .map(|color| Style::default().fg(color))
                .map_err(|_| ConfigError::InvalidColor {
                    field,
                    value: value.to_string(),
                })
        };

        Ok(Theme {
            text: fg("text", &self.text)?,
            disabled_text: fg("disabled_text", &self.disabled_text)?,
            border: fg("border", &self.border)?,
            focused_border: fg("focused_border", &self.focused_border)?,
        })
    }
}

impl AppConfig {
    /// Resolved theme, falling back to the default on invalid colors.
    pub fn theme(&self) -> Theme {
        self.theme.resolve().unwrap_or_else(|e| {
            tracing::warn!("{e}; using default theme");
            Theme::default()
        })
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/placeholder-field/config.toml"))
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Loads the user config, falling back to defaults when it is missing or invalid.
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    if !path.exists() {
        return AppConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}; using default config");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.tick_rate_fps, 30.0);
        assert_eq!(config.search_placeholder.as_deref(), Some("Search..."));
        assert_eq!(config.metrics, FontMetrics::default());
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn partial_theme_and_metrics_override() {
        let config = parse_config(
            r##"
            search_placeholder = "Find"

            [theme]
            disabled_text = "#808080"

            [metrics]
            descent = 1
            "##,
        )
        .unwrap();

        assert_eq!(config.search_placeholder.as_deref(), Some("Find"));
        assert_eq!(config.metrics, FontMetrics::new(1, 1));
        let theme = config.theme.resolve().unwrap();
        assert_eq!(theme.disabled_text.fg, Some(Color::Rgb(0x80, 0x80, 0x80)));
        assert_eq!(theme.text.fg, Some(Color::White));
    }

    #[test]
    fn invalid_color_is_reported_with_field() {
        let config = parse_config("[theme]\nborder = \"not-a-color\"").unwrap();
        let err = config.theme.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { field: "border", .. }));
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            parse_config("tick_rate_fps = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config_from(Path::new("/nonexistent/placeholder-field.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
