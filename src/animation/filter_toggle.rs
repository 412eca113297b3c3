// src/animation/filter_toggle.rs
//
// Binary honeycomb animation.
//
// Every slot is either shown in its own color or filtered to the
// background color. Each tick flips one slot, walking the rank order,
// until all seven agree; then the walk turns around.

use tracing::debug;

use super::{CycleDirection, HoneycombAnimation, SlotAppearance};
use crate::models::{Slot, SLOT_COUNT};

#[derive(Debug, Clone)]
pub struct FilterToggle {
    filtered: [bool; SLOT_COUNT],
    filtered_count: usize,
    direction: CycleDirection,
    first_tick: bool,
}

impl Default for FilterToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterToggle {
    pub fn new() -> Self {
        Self {
            filtered: [true; SLOT_COUNT],
            filtered_count: SLOT_COUNT,
            direction: CycleDirection::Appearing,
            first_tick: true,
        }
    }

    pub fn is_filtered(&self, slot: Slot) -> bool {
        self.filtered[slot.index()]
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }
}

impl HoneycombAnimation for FilterToggle {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn advance(&mut self, rank_order: &[Slot; SLOT_COUNT]) -> Option<Slot> {
        // the very first frame stays blank
        if self.first_tick {
            self.first_tick = false;
            return None;
        }

        let hide = self.direction == CycleDirection::Disappearing;
        let changed = rank_order
            .iter()
            .copied()
            .find(|slot| self.filtered[slot.index()] != hide);

        if let Some(slot) = changed {
            self.filtered[slot.index()] = hide;
            if hide {
                self.filtered_count += 1;
            } else {
                self.filtered_count -= 1;
            }
        }

        // Once everything is hidden the frame is shown blank for one tick;
        // the next tick un-filters the rank-0 slot first.
        if self.filtered_count == SLOT_COUNT && hide {
            self.direction = CycleDirection::Appearing;
            debug!("all hexagons hidden, {:?} snaps back next", rank_order[0]);
        } else if self.filtered_count == 0 && !hide {
            self.direction = CycleDirection::Disappearing;
            debug!("all hexagons shown, hiding again");
        }

        changed
    }

    fn direction(&self) -> CycleDirection {
        self.direction
    }

    fn appearance(&self, slot: Slot) -> SlotAppearance {
        SlotAppearance {
            scale: 1.0,
            filtered: self.is_filtered(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks() -> [Slot; SLOT_COUNT] {
        Slot::ALL
    }

    fn visible_slots(anim: &FilterToggle) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|s| !anim.is_filtered(*s))
            .collect()
    }

    #[test]
    fn test_first_tick_is_blank() {
        let mut anim = FilterToggle::new();
        assert_eq!(anim.advance(&ranks()), None);
        assert!(visible_slots(&anim).is_empty());
        assert_eq!(anim.filtered_count(), SLOT_COUNT);
    }

    #[test]
    fn test_slots_appear_one_per_tick_in_rank_order() {
        let mut anim = FilterToggle::new();
        anim.advance(&ranks());

        for (i, expected) in Slot::ALL.into_iter().enumerate() {
            assert_eq!(anim.advance(&ranks()), Some(expected));
            assert_eq!(visible_slots(&anim).len(), i + 1);
        }
        assert_eq!(anim.filtered_count(), 0);
        assert_eq!(anim.direction(), CycleDirection::Disappearing);
    }

    #[test]
    fn test_slots_hide_in_the_same_order_they_appeared() {
        let mut anim = FilterToggle::new();
        for _ in 0..8 {
            anim.advance(&ranks());
        }

        for expected in Slot::ALL {
            assert_eq!(anim.advance(&ranks()), Some(expected));
            assert!(anim.is_filtered(expected));
        }
        assert_eq!(anim.filtered_count(), SLOT_COUNT);
        assert!(visible_slots(&anim).is_empty());
        assert_eq!(anim.direction(), CycleDirection::Appearing);
    }

    #[test]
    fn test_snap_back_slot_is_rank_zero() {
        let mut anim = FilterToggle::new();
        for _ in 0..15 {
            anim.advance(&ranks());
        }
        assert!(visible_slots(&anim).is_empty());

        assert_eq!(anim.advance(&ranks()), Some(Slot::UpperLeft));
        assert_eq!(visible_slots(&anim), vec![Slot::UpperLeft]);

        // a different rank table moves the snap back with it
        let mut custom = ranks();
        custom.swap(0, 6);
        let mut anim = FilterToggle::new();
        anim.advance(&custom);
        assert_eq!(anim.advance(&custom), Some(Slot::MiddleMiddle));
    }

    #[test]
    fn test_direction_flips_every_seven_ticks() {
        let mut anim = FilterToggle::new();
        anim.advance(&ranks());

        let mut flips = Vec::new();
        let mut last = anim.direction();
        for tick in 1..=42 {
            anim.advance(&ranks());
            if anim.direction() != last {
                flips.push(tick);
                last = anim.direction();
            }
        }
        assert_eq!(flips, vec![7, 14, 21, 28, 35, 42]);
    }

    #[test]
    fn test_reset_returns_to_blank_start() {
        let mut anim = FilterToggle::new();
        for _ in 0..5 {
            anim.advance(&ranks());
        }
        anim.reset();
        assert_eq!(anim.advance(&ranks()), None);
        assert!(visible_slots(&anim).is_empty());
    }
}
