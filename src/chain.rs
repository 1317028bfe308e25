//! One-shot chaining of animation groups
//!
//! A chained sequence plays its groups one after another. Each group runs
//! until it reports completion, then the next one is activated. After the
//! last group the chain is done and holds the final frame until it is
//! activated again.

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{Error, error::ConfigError, group::AnimationGroup, surface::SurfaceSet};

/// Maximum number of groups in a chain
pub const MAX_CHAIN_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    Idle,
    Playing(usize),
    Done,
}

#[derive(Debug, Clone)]
pub struct ChainedSequence {
    groups: Vec<AnimationGroup, MAX_CHAIN_LEN>,
    state: ChainState,
}

impl ChainedSequence {
    pub fn new(groups: impl IntoIterator<Item = AnimationGroup>) -> Result<Self, ConfigError> {
        let mut chain = Self {
            groups: Vec::new(),
            state: ChainState::Idle,
        };
        for group in groups {
            chain
                .groups
                .push(group)
                .map_err(|_| ConfigError::CapacityExceeded)?;
        }
        Ok(chain)
    }

    pub const fn state(&self) -> ChainState {
        self.state
    }

    pub fn groups(&self) -> &[AnimationGroup] {
        &self.groups
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self.state, ChainState::Done)
    }

    /// Start over from the first group
    pub fn activate(&mut self) {
        match self.groups.first_mut() {
            Some(first) => {
                first.activate();
                self.state = ChainState::Playing(0);
            }
            None => self.state = ChainState::Done,
        }
    }

    /// Advance the current group and move on once it completes
    pub fn advance(&mut self, now: Instant, surfaces: &mut dyn SurfaceSet) -> Result<bool, Error> {
        let ChainState::Playing(index) = self.state else {
            return Ok(false);
        };
        let group = self.groups.get_mut(index).ok_or(Error::Invariant)?;

        let drawn = group.advance(now, surfaces)?;
        if !group.is_complete() {
            return Ok(drawn);
        }

        let next = index + 1;
        if let Some(group) = self.groups.get_mut(next) {
            #[cfg(feature = "esp32-log")]
            println!("[ChainedSequence.advance] segment {} complete, playing {}", index, next);
            group.activate();
            self.state = ChainState::Playing(next);
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[ChainedSequence.advance] chain done after {} segments", next);
            self.state = ChainState::Done;
        }

        Ok(drawn)
    }

    pub fn validate(&self, surfaces: &dyn SurfaceSet) -> Result<(), ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        self.groups
            .iter()
            .try_for_each(|group| group.validate(surfaces))
    }
}
