use super::{Behavior, Step};
use crate::{color::Rgb, surface::Surface};

/// Fills every cell with one color
#[derive(Debug, Clone)]
pub struct SolidBehavior {
    color: Rgb,
}

impl SolidBehavior {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Behavior for SolidBehavior {
    fn step(&mut self, _phase: usize, surface: &mut dyn Surface) -> Step {
        surface.fill(self.color);
        Step::CycleComplete
    }
}
