// src/models/honeycomb.rs
//
// The seven hexagon slots of the honeycomb and their layout table.

use nannou::prelude::*;

use crate::error::{HoneycombError, Result};
use crate::models::geometry::Viewport;

pub const SLOT_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    UpperLeft,
    UpperRight,
    MiddleRight,
    LowerRight,
    LowerLeft,
    MiddleLeft,
    MiddleMiddle,
}

impl Slot {
    /// Every slot, in the order they are drawn.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::UpperLeft,
        Slot::UpperRight,
        Slot::MiddleRight,
        Slot::LowerRight,
        Slot::LowerLeft,
        Slot::MiddleLeft,
        Slot::MiddleMiddle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Where a slot sits relative to the viewport center (in multiples of the
/// base radius) and when it takes its turn in the appear/disappear cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    pub offset: (f32, f32),
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    entries: [SlotLayout; SLOT_COUNT],
    rank_order: [Slot; SLOT_COUNT],
}

impl Default for LayoutTable {
    fn default() -> Self {
        let entry = |x, y, rank| SlotLayout {
            offset: (x, y),
            rank,
        };
        // indexed by Slot
        let entries = [
            entry(-1.0, -1.7, 0),
            entry(1.0, -1.7, 1),
            entry(1.95, 0.0, 2),
            entry(1.0, 1.7, 3),
            entry(-1.0, 1.7, 4),
            entry(-1.95, 0.0, 5),
            entry(0.0, 0.0, 6),
        ];
        Self {
            entries,
            rank_order: Slot::ALL,
        }
    }
}

impl LayoutTable {
    /// Builds a table from per-slot entries (indexed like `Slot::ALL`).
    /// Ranks must cover 0..7 exactly once.
    pub fn new(entries: [SlotLayout; SLOT_COUNT]) -> Result<Self> {
        let ranks = entries.map(|e| e.rank);
        let mut rank_order: [Option<Slot>; SLOT_COUNT] = [None; SLOT_COUNT];

        for (slot, entry) in Slot::ALL.into_iter().zip(entries.iter()) {
            let place = rank_order
                .get_mut(entry.rank)
                .ok_or(HoneycombError::InvalidRanks(ranks))?;
            if place.is_some() {
                return Err(HoneycombError::InvalidRanks(ranks));
            }
            *place = Some(slot);
        }

        let mut ordered = Slot::ALL;
        for (target, slot) in ordered.iter_mut().zip(rank_order) {
            *target = slot.ok_or(HoneycombError::InvalidRanks(ranks))?;
        }

        Ok(Self {
            entries,
            rank_order: ordered,
        })
    }

    pub fn get(&self, slot: Slot) -> &SlotLayout {
        &self.entries[slot.index()]
    }

    pub fn rank(&self, slot: Slot) -> usize {
        self.get(slot).rank
    }

    /// Slots sorted by appearance rank, lowest first.
    pub fn rank_order(&self) -> &[Slot; SLOT_COUNT] {
        &self.rank_order
    }

    pub fn slot_center(&self, slot: Slot, viewport: &Viewport) -> Point2 {
        let (mx, my) = self.get(slot).offset;
        let radius = viewport.base_radius();
        viewport.center() + vec2(mx * radius, my * radius)
    }
}
