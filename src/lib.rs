#![no_std]

pub mod animation;
pub mod chain;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod group;
pub mod input;
pub mod math8;
pub mod mode;
pub mod scheduler;
pub mod surface;
pub mod telemetry;

pub use animation::{Animation, Playback};
pub use chain::{ChainState, ChainedSequence};
pub use config::{SelectorConfig, default_modes};
pub use display::{StatusDisplay, StatusLayout, TextRegion};
pub use error::{ConfigError, Error};
pub use group::AnimationGroup;
pub use input::{Button, ButtonLatch, Buttons};
pub use mode::{ModeSequence, Playable};
pub use scheduler::{Selector, TickReport};
pub use surface::{PixelSurface, Surface, SurfaceId, SurfaceSet, Surfaces};
pub use telemetry::Telemetry;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
