// src/animation/animator.rs
//
// The HoneycombAnimator is the surface a host talks to.
//
// The host reports its size, calls on_tick once per scheduled frame and
// draws whatever comes back. The animator owns the seven slot states
// (through the active strategy), the layout and palette, and a cache of
// hexagon outlines that is rebuilt whenever a radius or the viewport
// changes.

use nannou::prelude::*;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use super::{
    AnimationMode, CycleDirection, HoneycombAnimation, SlotAppearance, TickRequest,
    DEFAULT_SPEED_COEFFICIENT,
};
use crate::error::{HoneycombError, Result};
use crate::models::{
    hexagon_outline, HexagonOutline, LayoutTable, Palette, Slot, Viewport, SLOT_COUNT,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HexagonFill {
    Own(Rgb<f32>),
    Background,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub slot: Slot,
    pub outline: HexagonOutline,
    pub fill: HexagonFill,
}

#[derive(Debug, Clone, Copy)]
struct CachedOutline {
    radius: f32,
    outline: HexagonOutline,
}

pub struct HoneycombAnimator {
    layout: LayoutTable,
    palette: Palette,

    // animation state
    mode: AnimationMode,
    speed_coefficient: NonZeroU32,
    strategy: Box<dyn HoneycombAnimation>,
    tick_count: u64,

    // geometry
    viewport: Option<Viewport>,
    geometry: [Option<CachedOutline>; SLOT_COUNT],
    warned_no_viewport: bool,

    // scheduling
    tick_interval: Duration,
    custom_interval: bool,
    attached: bool,
    generation: u64,
}

impl HoneycombAnimator {
    pub fn new(mode: AnimationMode, layout: LayoutTable, palette: Palette) -> Self {
        let speed_coefficient =
            NonZeroU32::new(DEFAULT_SPEED_COEFFICIENT).unwrap_or(NonZeroU32::MIN);
        Self {
            layout,
            palette,

            mode,
            speed_coefficient,
            strategy: mode.build(speed_coefficient),
            tick_count: 0,

            viewport: None,
            geometry: [None; SLOT_COUNT],
            warned_no_viewport: false,

            tick_interval: mode.default_tick_interval(),
            custom_interval: false,
            attached: false,
            generation: 0,
        }
    }

    /************************** Lifecycle ********************************** */

    /// Starts (or restarts) the animation from the all-hidden frame.
    pub fn attach(&mut self) {
        self.strategy.reset();
        self.tick_count = 0;
        self.generation += 1;
        self.attached = true;
        info!("honeycomb attached ({:?} mode)", self.mode);
    }

    /// Stops ticking; pending tick requests become no-ops.
    pub fn detach(&mut self) {
        self.attached = false;
        self.generation += 1;
        info!("honeycomb detached after {} ticks", self.tick_count);
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /************************** Host callbacks ***************************** */

    /// Leaves the animation phase alone and only invalidates geometry.
    pub fn on_viewport_changed(&mut self, width: f32, height: f32) -> Result<()> {
        let viewport = Viewport::new(width, height)?;
        if self.viewport != Some(viewport) {
            debug!("viewport changed to {}x{}", width, height);
        }
        self.viewport = Some(viewport);
        self.geometry = [None; SLOT_COUNT];
        self.warned_no_viewport = false;
        Ok(())
    }

    /// Advances one tick and returns the frame to draw, in draw order.
    pub fn on_tick(&mut self) -> Vec<DrawCommand> {
        if !self.attached {
            return Vec::new();
        }

        let changed = self.strategy.advance(self.layout.rank_order());
        self.tick_count += 1;
        trace!(
            tick = self.tick_count,
            ?changed,
            direction = ?self.strategy.direction(),
            "honeycomb tick"
        );

        self.current_frame()
    }

    /// The frame for the current state, without advancing.
    pub fn current_frame(&mut self) -> Vec<DrawCommand> {
        match self.build_frame() {
            Ok(commands) => commands,
            Err(e) => {
                warn!("dropping honeycomb frame: {}", e);
                Vec::new()
            }
        }
    }

    pub fn schedule_next(&self) -> Option<TickRequest> {
        self.attached.then_some(TickRequest {
            generation: self.generation,
            delay: self.tick_interval,
        })
    }

    /// Runs a previously scheduled tick, unless it was issued before the
    /// last attach or detach.
    pub fn fire(&mut self, request: TickRequest) -> Option<Vec<DrawCommand>> {
        if !self.attached || request.generation != self.generation {
            trace!("ignoring stale tick request");
            return None;
        }
        Some(self.on_tick())
    }

    /************************** Configuration ****************************** */

    pub fn set_tick_interval_ms(&mut self, millis: u64) -> Result<()> {
        if millis == 0 {
            return Err(HoneycombError::InvalidTickInterval);
        }
        self.tick_interval = Duration::from_millis(millis);
        self.custom_interval = true;
        Ok(())
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Switching modes restarts the cycle.
    pub fn set_mode(&mut self, mode: AnimationMode) {
        self.mode = mode;
        self.strategy = mode.build(self.speed_coefficient);
        self.tick_count = 0;
        if !self.custom_interval {
            self.tick_interval = mode.default_tick_interval();
        }
        info!("honeycomb mode set to {:?}", mode);
    }

    pub fn set_speed_coefficient(&mut self, coefficient: u32) -> Result<()> {
        self.speed_coefficient =
            NonZeroU32::new(coefficient).ok_or(HoneycombError::InvalidSpeed)?;
        if self.mode == AnimationMode::Continuous {
            self.strategy = self.mode.build(self.speed_coefficient);
        }
        Ok(())
    }

    /************************** Accessors ********************************** */

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn direction(&self) -> CycleDirection {
        self.strategy.direction()
    }

    pub fn appearance(&self, slot: Slot) -> SlotAppearance {
        self.strategy.appearance(slot)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /************************** Frame building ***************************** */

    fn build_frame(&mut self) -> Result<Vec<DrawCommand>> {
        let Some(viewport) = self.viewport else {
            if !self.warned_no_viewport {
                warn!("no viewport yet, honeycomb frame left empty");
                self.warned_no_viewport = true;
            }
            return Ok(Vec::new());
        };

        let base_radius = viewport.base_radius();
        let mut commands = Vec::with_capacity(SLOT_COUNT);

        for slot in Slot::ALL {
            let appearance = self.strategy.appearance(slot);
            let outline = self.outline_for(slot, base_radius * appearance.scale, &viewport)?;
            let fill = if appearance.filtered {
                HexagonFill::Background
            } else {
                HexagonFill::Own(self.palette.color(slot))
            };
            commands.push(DrawCommand {
                slot,
                outline,
                fill,
            });
        }

        Ok(commands)
    }

    fn outline_for(
        &mut self,
        slot: Slot,
        radius: f32,
        viewport: &Viewport,
    ) -> Result<HexagonOutline> {
        let cached = &mut self.geometry[slot.index()];
        if let Some(entry) = *cached {
            if entry.radius == radius {
                return Ok(entry.outline);
            }
        }

        let outline = hexagon_outline(self.layout.slot_center(slot, viewport), radius)?;
        *cached = Some(CachedOutline { radius, outline });
        Ok(outline)
    }
}
