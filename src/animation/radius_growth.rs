// src/animation/radius_growth.rs
//
// Continuous honeycomb animation.
//
// The lowest-ranked slot that has not reached its target grows (or shrinks)
// by one step per tick. Progress is kept as whole steps so a slot lands
// exactly on zero or the full base radius.

use std::num::NonZeroU32;
use tracing::debug;

use super::{CycleDirection, HoneycombAnimation, SlotAppearance};
use crate::models::{Slot, SLOT_COUNT};

#[derive(Debug, Clone)]
pub struct RadiusGrowth {
    steps: [u32; SLOT_COUNT],
    speed_coefficient: u32, // steps from empty to full radius
    direction: CycleDirection,
}

impl RadiusGrowth {
    pub fn new(speed_coefficient: NonZeroU32) -> Self {
        Self {
            steps: [0; SLOT_COUNT],
            speed_coefficient: speed_coefficient.get(),
            direction: CycleDirection::Appearing,
        }
    }

    pub fn speed_coefficient(&self) -> u32 {
        self.speed_coefficient
    }

    pub fn steps(&self, slot: Slot) -> u32 {
        self.steps[slot.index()]
    }
}

impl HoneycombAnimation for RadiusGrowth {
    fn reset(&mut self) {
        self.steps = [0; SLOT_COUNT];
        self.direction = CycleDirection::Appearing;
    }

    fn advance(&mut self, rank_order: &[Slot; SLOT_COUNT]) -> Option<Slot> {
        let mut completed = 0;
        let mut changed = None;

        for slot in rank_order {
            let steps = &mut self.steps[slot.index()];
            match self.direction {
                CycleDirection::Appearing if *steps < self.speed_coefficient => *steps += 1,
                CycleDirection::Disappearing if *steps > 0 => *steps -= 1,
                _ => {
                    completed += 1;
                    continue;
                }
            }
            changed = Some(*slot);
            break;
        }

        if completed == SLOT_COUNT {
            self.direction = self.direction.flipped();
            debug!("honeycomb complete, now {:?}", self.direction);
        }

        changed
    }

    fn direction(&self) -> CycleDirection {
        self.direction
    }

    fn appearance(&self, slot: Slot) -> SlotAppearance {
        SlotAppearance {
            scale: self.steps(slot) as f32 / self.speed_coefficient as f32,
            filtered: false,
        }
    }
}
