//! Comet with a fading tail
//!
//! The head moves one cell per frame and wraps circularly at the end of the
//! surface. Frame `n` puts the head on cell `n % len`, so one traversal takes
//! exactly `len` frames. Tail cells are drawn only once the head has actually
//! passed them, which keeps a one-shot comet from wrapping its tail around
//! the far end on its first frames.

use super::{Behavior, Step};
use crate::{
    color::{OFF, Rgb, dim},
    error::ConfigError,
    math8::fraction8,
    surface::{Surface, SurfaceId},
};

#[derive(Debug, Clone)]
pub struct CometBehavior {
    color: Rgb,
    tail_length: usize,
}

impl CometBehavior {
    pub const fn new(color: Rgb, tail_length: usize) -> Self {
        Self { color, tail_length }
    }

    /// Brightness of the tail cell `distance` cells behind the head
    const fn tail_level(&self, distance: usize) -> u8 {
        let span = self.tail_length + 1;
        fraction8(span - distance, span)
    }
}

impl Behavior for CometBehavior {
    fn step(&mut self, phase: usize, surface: &mut dyn Surface) -> Step {
        let len = surface.len();
        if len == 0 {
            return Step::CycleComplete;
        }

        let head = phase % len;
        surface.fill(OFF);

        for distance in (1..=self.tail_length).filter(|distance| *distance <= phase) {
            let index = (head + len - distance) % len;
            surface.set_cell(index, dim(self.color, self.tail_level(distance)));
        }
        surface.set_cell(head, self.color);

        if head + 1 == len {
            Step::CycleComplete
        } else {
            Step::Continue
        }
    }

    fn validate(&self, target: SurfaceId, surface: &dyn Surface) -> Result<(), ConfigError> {
        let len = surface.len();
        if self.tail_length >= len {
            return Err(ConfigError::TailTooLong {
                surface: target,
                tail_length: self.tail_length,
                len,
            });
        }
        Ok(())
    }
}
