//! Animation system with a closed set of behaviors
//!
//! Behaviors are stored in an enum to avoid heap allocations. Each behavior
//! implements the [`Behavior`] trait and knows only how to draw one frame;
//! [`Animation`] wraps it with rate limiting, the phase counter and the
//! one-shot bookkeeping.

mod color_cycle;
mod comet;
mod solid;
mod sparkle;

pub use color_cycle::ColorCycleBehavior;
pub use comet::CometBehavior;
pub use solid::SolidBehavior;
pub use sparkle::SparkleBehavior;

use embassy_time::{Duration, Instant};

use crate::{
    Error,
    color::Rgb,
    error::ConfigError,
    surface::{Surface, SurfaceId, SurfaceSet},
};

/// Outcome of drawing a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More frames follow within the current cycle
    Continue,
    /// This frame finished one full cycle of the behavior
    CycleComplete,
}

pub trait Behavior {
    /// Draw frame number `phase` onto the surface
    fn step(&mut self, phase: usize, surface: &mut dyn Surface) -> Step;

    /// Reset behavior state
    fn reset(&mut self) {}

    /// Check the behavior against the surface it will draw on
    fn validate(&self, _target: SurfaceId, _surface: &dyn Surface) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Behavior slot - enum containing all possible behaviors
#[derive(Debug, Clone)]
pub enum BehaviorSlot {
    Solid(SolidBehavior),
    ColorCycle(ColorCycleBehavior),
    Comet(CometBehavior),
    Sparkle(SparkleBehavior),
}

impl BehaviorSlot {
    fn step(&mut self, phase: usize, surface: &mut dyn Surface) -> Step {
        match self {
            Self::Solid(behavior) => behavior.step(phase, surface),
            Self::ColorCycle(behavior) => behavior.step(phase, surface),
            Self::Comet(behavior) => behavior.step(phase, surface),
            Self::Sparkle(behavior) => behavior.step(phase, surface),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Solid(behavior) => behavior.reset(),
            Self::ColorCycle(behavior) => behavior.reset(),
            Self::Comet(behavior) => behavior.reset(),
            Self::Sparkle(behavior) => behavior.reset(),
        }
    }

    fn validate(&self, target: SurfaceId, surface: &dyn Surface) -> Result<(), ConfigError> {
        match self {
            Self::Solid(behavior) => behavior.validate(target, surface),
            Self::ColorCycle(behavior) => behavior.validate(target, surface),
            Self::Comet(behavior) => behavior.validate(target, surface),
            Self::Sparkle(behavior) => behavior.validate(target, surface),
        }
    }
}

/// Whether an animation repeats forever or stops after one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Loop,
    Once,
}

/// A behavior bound to one surface and advanced at a fixed speed
#[derive(Debug, Clone)]
pub struct Animation {
    target: SurfaceId,
    speed: Duration,
    playback: Playback,
    behavior: BehaviorSlot,
    /// Frames drawn since the last reset
    phase: usize,
    next_step: Option<Instant>,
    complete: bool,
}

impl Animation {
    const fn new(target: SurfaceId, speed: Duration, behavior: BehaviorSlot) -> Self {
        Self {
            target,
            speed,
            playback: Playback::Loop,
            behavior,
            phase: 0,
            next_step: None,
            complete: false,
        }
    }

    /// Fill the surface with one color, once per activation
    pub const fn solid(target: SurfaceId, color: Rgb) -> Self {
        let mut animation = Self::new(
            target,
            Duration::from_millis(0),
            BehaviorSlot::Solid(SolidBehavior::new(color)),
        );
        animation.playback = Playback::Once;
        animation
    }

    /// Step through `palette`, one color per `speed`
    pub const fn color_cycle(target: SurfaceId, speed: Duration, palette: &'static [Rgb]) -> Self {
        Self::new(
            target,
            speed,
            BehaviorSlot::ColorCycle(ColorCycleBehavior::new(palette)),
        )
    }

    /// Move a head pixel with a fading tail one cell per `speed`
    pub const fn comet(target: SurfaceId, speed: Duration, color: Rgb, tail_length: usize) -> Self {
        Self::new(
            target,
            speed,
            BehaviorSlot::Comet(CometBehavior::new(color, tail_length)),
        )
    }

    /// Light `count` random cells per `speed`, fading the previous ones
    pub const fn sparkle(target: SurfaceId, speed: Duration, color: Rgb, count: usize) -> Self {
        Self::new(
            target,
            speed,
            BehaviorSlot::Sparkle(SparkleBehavior::new(color, count)),
        )
    }

    /// Stop after one full cycle and hold the last frame
    #[must_use]
    pub const fn once(mut self) -> Self {
        self.playback = Playback::Once;
        self
    }

    pub const fn target(&self) -> SurfaceId {
        self.target
    }

    pub const fn is_finite(&self) -> bool {
        matches!(self.playback, Playback::Once)
    }

    /// Frames drawn since the last reset
    pub const fn phase(&self) -> usize {
        self.phase
    }

    /// True once a one-shot animation has finished its cycle
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Restart from phase zero; the next advance draws immediately
    pub fn reset(&mut self) {
        self.phase = 0;
        self.next_step = None;
        self.complete = false;
        self.behavior.reset();
    }

    /// Keep the phase but draw on the next advance
    pub fn resume(&mut self) {
        self.next_step = None;
    }

    /// Draw the next frame if it is due
    ///
    /// Returns `true` if a frame was drawn and flushed.
    pub fn advance(&mut self, now: Instant, surfaces: &mut dyn SurfaceSet) -> Result<bool, Error> {
        if self.complete {
            return Ok(false);
        }
        if let Some(next_step) = self.next_step {
            if now < next_step {
                return Ok(false);
            }
        }

        let step = self
            .behavior
            .step(self.phase, surfaces.surface_mut(self.target));
        self.phase += 1;
        self.next_step = Some(now + self.speed);
        if step == Step::CycleComplete && self.is_finite() {
            self.complete = true;
        }

        surfaces.flush(self.target)?;
        Ok(true)
    }

    pub fn validate(&self, surfaces: &dyn SurfaceSet) -> Result<(), ConfigError> {
        self.behavior
            .validate(self.target, surfaces.surface(self.target))
    }
}
