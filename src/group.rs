//! Animation groups
//!
//! A group advances one animation per surface together. A synchronized group
//! restarts all of its members from phase zero whenever it is activated.

use embassy_time::Instant;
use heapless::Vec;

use crate::{
    Error,
    animation::Animation,
    error::ConfigError,
    surface::{SurfaceId, SurfaceSet},
};

/// Maximum number of animations in one group, one per surface
pub const MAX_GROUP_MEMBERS: usize = SurfaceId::ALL.len();

#[derive(Debug, Clone)]
pub struct AnimationGroup {
    members: Vec<Animation, MAX_GROUP_MEMBERS>,
    sync: bool,
}

impl AnimationGroup {
    /// Create an unsynchronized group
    pub fn new(members: impl IntoIterator<Item = Animation>) -> Result<Self, ConfigError> {
        let mut group = Self {
            members: Vec::new(),
            sync: false,
        };
        for member in members {
            group
                .members
                .push(member)
                .map_err(|_| ConfigError::CapacityExceeded)?;
        }
        Ok(group)
    }

    /// Reset every member's phase on activation
    #[must_use]
    pub fn synced(mut self) -> Self {
        self.sync = true;
        self
    }

    pub fn members(&self) -> &[Animation] {
        &self.members
    }

    /// Prepare the group to be played from the next advance
    ///
    /// Finite members always restart. Infinite members restart only when the
    /// group is synchronized and otherwise resume from their current phase.
    pub fn activate(&mut self) {
        for member in &mut self.members {
            if self.sync || member.is_finite() {
                member.reset();
            } else {
                member.resume();
            }
        }
    }

    /// Advance every member; returns `true` if any of them drew a frame
    pub fn advance(&mut self, now: Instant, surfaces: &mut dyn SurfaceSet) -> Result<bool, Error> {
        let mut drawn = false;
        for member in &mut self.members {
            drawn |= member.advance(now, surfaces)?;
        }
        Ok(drawn)
    }

    /// True when every member is finite and has finished
    pub fn is_complete(&self) -> bool {
        self.members
            .iter()
            .all(|member| member.is_finite() && member.is_complete())
    }

    pub fn validate(&self, surfaces: &dyn SurfaceSet) -> Result<(), ConfigError> {
        if self.members.is_empty() {
            return Err(ConfigError::EmptyGroup);
        }
        for (index, member) in self.members.iter().enumerate() {
            let target = member.target();
            if self.members[..index]
                .iter()
                .any(|other| other.target() == target)
            {
                return Err(ConfigError::DuplicateSurface(target));
            }
            member.validate(surfaces)?;
        }
        Ok(())
    }
}
