// src/models/palette.rs
//
// Fill colors for the seven slots.

use nannou::prelude::*;

use crate::error::{HoneycombError, Result};
use crate::models::honeycomb::{Slot, SLOT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Rgb<f32>; SLOT_COUNT],
}

/// An unconfigured palette paints every hexagon black.
impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [rgb(0.0, 0.0, 0.0); SLOT_COUNT],
        }
    }
}

impl Palette {
    /// Colors are given in `Slot::ALL` order.
    pub fn new(colors: Vec<Rgb<f32>>) -> Result<Self> {
        let count = colors.len();
        let colors: [Rgb<f32>; SLOT_COUNT] = colors
            .try_into()
            .map_err(|_| HoneycombError::InvalidPalette(count))?;
        Ok(Self { colors })
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|c| parse_hex_color(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    pub fn rainbow() -> Self {
        let mut palette = Self::default();
        palette.set(Slot::UpperRight, rgb8(0xFF, 0x00, 0x00));
        palette.set(Slot::MiddleRight, rgb8(0xFF, 0xA5, 0x00));
        palette.set(Slot::LowerRight, rgb8(0xFF, 0xFF, 0x00));
        palette.set(Slot::LowerLeft, rgb8(0x00, 0xFF, 0x00));
        palette.set(Slot::MiddleLeft, rgb8(0x00, 0x00, 0xFF));
        palette.set(Slot::UpperLeft, rgb8(0x4B, 0x00, 0x82));
        palette.set(Slot::MiddleMiddle, rgb8(0xEE, 0x82, 0xEE));
        palette
    }

    pub fn color(&self, slot: Slot) -> Rgb<f32> {
        self.colors[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, color: Rgb<f32>) {
        self.colors[slot.index()] = color;
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> Rgb<f32> {
    rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Parses `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(text: &str) -> Result<Rgb<f32>> {
    let invalid = || HoneycombError::InvalidColor(text.to_string());
    let digits = text.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(rgb8(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFA500").unwrap(), rgb8(255, 165, 0));
        assert_eq!(parse_hex_color("4b0082").unwrap(), rgb8(0x4B, 0x00, 0x82));
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
        assert_eq!(
            parse_hex_color("red"),
            Err(HoneycombError::InvalidColor("red".to_string()))
        );
    }

    #[test]
    fn test_palette_requires_seven_colors() {
        assert_eq!(
            Palette::new(Vec::new()),
            Err(HoneycombError::InvalidPalette(0))
        );
        assert_eq!(
            Palette::new(vec![rgb(1.0, 1.0, 1.0); 6]),
            Err(HoneycombError::InvalidPalette(6))
        );
        assert!(Palette::new(vec![rgb(1.0, 1.0, 1.0); 7]).is_ok());
    }

    #[test]
    fn test_rainbow_palette_slots() {
        let palette = Palette::rainbow();
        assert_eq!(palette.color(Slot::UpperRight), rgb(1.0, 0.0, 0.0));
        assert_eq!(palette.color(Slot::MiddleLeft), rgb(0.0, 0.0, 1.0));
        assert_eq!(palette.color(Slot::MiddleMiddle), rgb8(0xEE, 0x82, 0xEE));
    }

    #[test]
    fn test_from_hex_keeps_slot_order() {
        let palette = Palette::from_hex(&[
            "#000001", "#000002", "#000003", "#000004", "#000005", "#000006", "#000007",
        ])
        .unwrap();
        assert_eq!(palette.color(Slot::UpperLeft), rgb8(0, 0, 1));
        assert_eq!(palette.color(Slot::MiddleMiddle), rgb8(0, 0, 7));
    }
}
