//! Error types
//!
//! Configuration errors are raised while building and validating the mode
//! sequence, before any surface is touched. Everything else is an I/O failure
//! of one of the collaborators and is fatal for the selector loop.

use crate::surface::SurfaceId;

/// Invalid animation setup, detected before the loop starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("mode sequence has no items")]
    EmptyModes,
    #[error("animation group has no members")]
    EmptyGroup,
    #[error("chained sequence has no groups")]
    EmptyChain,
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("two animations of one group target the {0:?} surface")]
    DuplicateSurface(SurfaceId),
    #[error("tail length {tail_length} does not fit the {surface:?} surface of {len} cells")]
    TailTooLong {
        surface: SurfaceId,
        tail_length: usize,
        len: usize,
    },
    #[error("fixed capacity exceeded")]
    CapacityExceeded,
}

/// Runtime error of the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to flush the {0:?} surface")]
    Flush(SurfaceId),
    #[error("failed to read telemetry")]
    Telemetry,
    #[error("failed to update the status display")]
    Display,
    #[error("no mode at index {0}")]
    UnknownMode(usize),
    #[error("internal state invariant violated")]
    Invariant,
}

impl Error {
    /// Short code for the status display
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Flush(_) => "flush",
            Self::Telemetry => "telemetry",
            Self::Display => "display",
            Self::UnknownMode(_) => "mode",
            Self::Invariant => "invariant",
        }
    }
}
