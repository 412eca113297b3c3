pub mod animator;
pub mod filter_toggle;
pub mod radius_growth;
pub mod scheduler;

pub use animator::{DrawCommand, HexagonFill, HoneycombAnimator};
pub use filter_toggle::FilterToggle;
pub use radius_growth::RadiusGrowth;
pub use scheduler::{TickRequest, TickTimer};

use serde::Deserialize;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::models::{Slot, SLOT_COUNT};

pub const DEFAULT_SPEED_COEFFICIENT: u32 = 20;

/// Whether the honeycomb is currently filling up or emptying out.
/// Shared by all seven slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Appearing,
    Disappearing,
}

impl CycleDirection {
    pub fn flipped(self) -> Self {
        match self {
            CycleDirection::Appearing => CycleDirection::Disappearing,
            CycleDirection::Disappearing => CycleDirection::Appearing,
        }
    }
}

/// How a slot should look this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotAppearance {
    pub scale: f32,     // fraction of the base radius, 0.0..=1.0
    pub filtered: bool, // drawn in the background color
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// Slots flip between their own color and the background.
    Binary,
    /// Slots grow and shrink one after another.
    #[default]
    Continuous,
}

impl AnimationMode {
    pub fn default_tick_interval(self) -> Duration {
        match self {
            AnimationMode::Binary => Duration::from_millis(300),
            AnimationMode::Continuous => Duration::from_millis(16),
        }
    }

    pub fn build(self, speed_coefficient: NonZeroU32) -> Box<dyn HoneycombAnimation> {
        match self {
            AnimationMode::Binary => Box::new(FilterToggle::new()),
            AnimationMode::Continuous => Box::new(RadiusGrowth::new(speed_coefficient)),
        }
    }
}

pub trait HoneycombAnimation {
    fn reset(&mut self); // Back to the all-hidden starting frame
    fn advance(&mut self, rank_order: &[Slot; SLOT_COUNT]) -> Option<Slot>; // One tick, returns the slot that changed
    fn direction(&self) -> CycleDirection;
    fn appearance(&self, slot: Slot) -> SlotAppearance;
}
