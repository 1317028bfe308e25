//! Random sparkles over a fading background
//!
//! Every frame halves the previously lit cells and lights `count` random
//! cells at full color. Sparkle positions come from a seeded `fastrand`
//! generator, so a reset replays the same pattern. One cycle is as many
//! frames as the surface has cells.

use fastrand::Rng;

use super::{Behavior, Step};
use crate::{
    color::{Rgb, dim},
    surface::Surface,
};

const DEFAULT_SEED: u64 = 0x5EED_1E55;
const FADE: u8 = 127;

#[derive(Debug, Clone)]
pub struct SparkleBehavior {
    color: Rgb,
    count: usize,
    /// Generator state carried between frames
    state: u64,
}

impl SparkleBehavior {
    pub const fn new(color: Rgb, count: usize) -> Self {
        Self {
            color,
            count,
            state: DEFAULT_SEED,
        }
    }
}

impl Behavior for SparkleBehavior {
    fn step(&mut self, phase: usize, surface: &mut dyn Surface) -> Step {
        let len = surface.len();
        if len == 0 {
            return Step::CycleComplete;
        }

        for index in 0..len {
            let faded = dim(surface.cell(index), FADE);
            surface.set_cell(index, faded);
        }
        let mut rng = Rng::with_seed(self.state);
        for _ in 0..self.count {
            surface.set_cell(rng.usize(..len), self.color);
        }
        self.state = rng.get_seed();

        if (phase + 1) % len == 0 {
            Step::CycleComplete
        } else {
            Step::Continue
        }
    }

    fn reset(&mut self) {
        self.state = DEFAULT_SEED;
    }
}
