// src/config/config_load.rs
//
// loading config.toml and turning it into a ready animator

use nannou::color::Rgb;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::{AnimationConfig, PalettePreset, StyleConfig, WindowConfig};
use crate::animation::HoneycombAnimator;
use crate::error::HoneycombError;
use crate::models::{parse_hex_color, LayoutTable, Palette};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] HoneycombError),
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try the executable's directory, then the working directory
        let path = Self::exe_dir_config()
            .filter(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn exe_dir_config() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let palette = match self.style.palette {
            PalettePreset::Rainbow => Palette::rainbow(),
            PalettePreset::Mono => Palette::default(),
            PalettePreset::Custom => Palette::from_hex(self.style.colors.as_slice())?,
        };
        Ok(palette)
    }

    pub fn background(&self) -> Result<Rgb<f32>, ConfigError> {
        Ok(parse_hex_color(&self.style.background)?)
    }

    /// Validates every section and builds an animator sized to the window.
    /// The animator is returned detached.
    pub fn build_animator(&self) -> Result<HoneycombAnimator, ConfigError> {
        let mut animator =
            HoneycombAnimator::new(self.animation.mode, LayoutTable::default(), self.palette()?);

        animator.set_speed_coefficient(self.animation.speed_coefficient)?;
        if let Some(millis) = self.animation.tick_interval_ms {
            animator.set_tick_interval_ms(millis)?;
        }
        animator.on_viewport_changed(self.window.width as f32, self.window.height as f32)?;
        // fail early on a bad background too
        self.background()?;

        Ok(animator)
    }
}
