//! Whole-surface color cycling
//!
//! Every frame replaces all cells with the next palette color, wrapping at
//! the end. One cycle is one pass over the palette.

use super::{Behavior, Step};
use crate::{
    color::Rgb,
    error::ConfigError,
    surface::{Surface, SurfaceId},
};

#[derive(Debug, Clone)]
pub struct ColorCycleBehavior {
    palette: &'static [Rgb],
}

impl ColorCycleBehavior {
    pub const fn new(palette: &'static [Rgb]) -> Self {
        Self { palette }
    }
}

impl Behavior for ColorCycleBehavior {
    fn step(&mut self, phase: usize, surface: &mut dyn Surface) -> Step {
        let len = self.palette.len();
        if len == 0 {
            return Step::Continue;
        }

        surface.fill(self.palette[phase % len]);

        if (phase + 1) % len == 0 {
            Step::CycleComplete
        } else {
            Step::Continue
        }
    }

    fn validate(&self, _target: SurfaceId, _surface: &dyn Surface) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}
