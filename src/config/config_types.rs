// src/config/config_types.rs
//
// Config types for the app

use crate::animation::{AnimationMode, DEFAULT_SPEED_COEFFICIENT};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    #[serde(default)]
    pub mode: AnimationMode,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>, // falls back to the mode's default
    #[serde(default = "default_speed_coefficient")]
    pub speed_coefficient: u32, // ticks for one hexagon to fully grow
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            mode: AnimationMode::default(),
            tick_interval_ms: None,
            speed_coefficient: DEFAULT_SPEED_COEFFICIENT,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PalettePreset {
    #[default]
    Rainbow,
    Mono,
    Custom,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub palette: PalettePreset,
    #[serde(default)]
    pub colors: Vec<String>, // only read for the custom palette
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            palette: PalettePreset::default(),
            colors: Vec::new(),
        }
    }
}

fn default_speed_coefficient() -> u32 {
    DEFAULT_SPEED_COEFFICIENT
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}
