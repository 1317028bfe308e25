//! Button-indexed mode sequence
//!
//! The top-level playlist. At most one item is active; activating the active
//! index again does nothing, and switching to another item blanks every
//! surface first when auto-clear is enabled.

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    Error,
    chain::ChainedSequence,
    error::ConfigError,
    group::AnimationGroup,
    surface::SurfaceSet,
};

/// Maximum number of selectable modes
pub const MAX_MODES: usize = 8;

/// A selectable item of the mode sequence
#[derive(Debug, Clone)]
pub enum Playable {
    Group(AnimationGroup),
    Chain(ChainedSequence),
}

impl Playable {
    pub fn activate(&mut self) {
        match self {
            Self::Group(group) => group.activate(),
            Self::Chain(chain) => chain.activate(),
        }
    }

    pub fn advance(&mut self, now: Instant, surfaces: &mut dyn SurfaceSet) -> Result<bool, Error> {
        match self {
            Self::Group(group) => group.advance(now, surfaces),
            Self::Chain(chain) => chain.advance(now, surfaces),
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Self::Group(group) => group.is_complete(),
            Self::Chain(chain) => chain.is_complete(),
        }
    }

    pub fn validate(&self, surfaces: &dyn SurfaceSet) -> Result<(), ConfigError> {
        match self {
            Self::Group(group) => group.validate(surfaces),
            Self::Chain(chain) => chain.validate(surfaces),
        }
    }
}

impl From<AnimationGroup> for Playable {
    fn from(group: AnimationGroup) -> Self {
        Self::Group(group)
    }
}

impl From<ChainedSequence> for Playable {
    fn from(chain: ChainedSequence) -> Self {
        Self::Chain(chain)
    }
}

#[derive(Debug, Clone)]
pub struct ModeSequence {
    items: Vec<Playable, MAX_MODES>,
    active: Option<usize>,
    auto_clear: bool,
}

impl ModeSequence {
    pub fn new(items: impl IntoIterator<Item = Playable>) -> Result<Self, ConfigError> {
        let mut sequence = Self {
            items: Vec::new(),
            active: None,
            auto_clear: false,
        };
        for item in items {
            sequence
                .items
                .push(item)
                .map_err(|_| ConfigError::CapacityExceeded)?;
        }
        Ok(sequence)
    }

    /// Blank all surfaces on every mode switch
    #[must_use]
    pub fn with_auto_clear(mut self, auto_clear: bool) -> Self {
        self.auto_clear = auto_clear;
        self
    }

    pub const fn auto_clear(&self) -> bool {
        self.auto_clear
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the active item, `None` before the first activation
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn item(&self, index: usize) -> Option<&Playable> {
        self.items.get(index)
    }

    /// Switch to item `index`
    ///
    /// Re-activating the active item is a no-op and does not restart it.
    pub fn activate(&mut self, index: usize, surfaces: &mut dyn SurfaceSet) -> Result<(), Error> {
        if self.active == Some(index) {
            return Ok(());
        }
        let item = self
            .items
            .get_mut(index)
            .ok_or(Error::UnknownMode(index))?;

        if self.auto_clear {
            surfaces.clear_all()?;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[ModeSequence.activate] switching mode {:?} -> {}",
            self.active, index
        );
        item.activate();
        self.active = Some(index);
        Ok(())
    }

    /// Advance the active item; no-op before the first activation
    pub fn advance(&mut self, now: Instant, surfaces: &mut dyn SurfaceSet) -> Result<bool, Error> {
        let Some(index) = self.active else {
            return Ok(false);
        };
        self.items
            .get_mut(index)
            .ok_or(Error::Invariant)?
            .advance(now, surfaces)
    }

    pub fn validate(&self, surfaces: &dyn SurfaceSet) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyModes);
        }
        self.items
            .iter()
            .try_for_each(|item| item.validate(surfaces))
    }
}
