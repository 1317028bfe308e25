//! Compile-time configuration of the light selector
//!
//! Surface sizes, brightness levels, animation parameters, timing and the
//! screen layout of the device. [`default_modes`] assembles the four modes
//! selected by buttons A to D.

use embassy_time::Duration;

use crate::{
    animation::Animation,
    chain::ChainedSequence,
    color::{AMBER, BLUE, GOLD, GREEN, OFF, ORANGE, PURPLE, RED, Rgb, WHITE, YELLOW},
    display::{Label, StatusLayout, TextRegion},
    error::ConfigError,
    group::AnimationGroup,
    math8::brightness_from_unit,
    mode::{ModeSequence, Playable},
    surface::{PixelSurface, SurfaceId},
};

pub const BOARD_LED_COUNT: usize = 4;
pub const STRIP_LED_COUNT: usize = 30;

pub const BOARD_BRIGHTNESS: f32 = 0.75;
pub const STRIP_BRIGHTNESS: f32 = 0.5;

pub const CYCLE_COLORS: [Rgb; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE];
pub const CYCLE_SPEED: Duration = Duration::from_millis(100);

pub const COMET_COLORS: [Rgb; 3] = [WHITE, GOLD, RED];
pub const STRIP_COMET_SPEED: Duration = Duration::from_micros(62_500);
pub const STRIP_COMET_TAIL_LENGTH: usize = 15;
pub const BOARD_COMET_SPEED: Duration = Duration::from_millis(250);
pub const BOARD_COMET_TAIL_LENGTH: usize = 3;

/// Interval between two telemetry refreshes
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);
/// Sleep at the end of every selector tick
pub const TICK_INTERVAL: Duration = Duration::from_millis(5);

pub type BoardSurface<D> = PixelSurface<D, BOARD_LED_COUNT>;
pub type StripSurface<D> = PixelSurface<D, STRIP_LED_COUNT>;

pub fn board_brightness() -> u8 {
    brightness_from_unit(BOARD_BRIGHTNESS)
}

pub fn strip_brightness() -> u8 {
    brightness_from_unit(STRIP_BRIGHTNESS)
}

const TEXT_BLACK: u32 = 0x00_0000;

pub const STATUS_LAYOUT: StatusLayout = StatusLayout {
    background: "/led.bmp",
    labels: &[
        Label {
            region: TextRegion {
                position: (5, 10),
                color: TEXT_BLACK,
                scale: 2,
            },
            text: "Light Selector:",
        },
        Label {
            region: TextRegion {
                position: (25, 65),
                color: TEXT_BLACK,
                scale: 1,
            },
            text: "A: Rainbow Cycle\nB: Comet\nC: Amber\nD: Dim",
        },
        Label {
            region: TextRegion {
                position: (0, 120),
                color: TEXT_BLACK,
                scale: 1,
            },
            text: "    A           B           C           D",
        },
    ],
    status: TextRegion {
        position: (250, 10),
        color: TEXT_BLACK,
        scale: 1,
    },
    placeholder: "-4.20 V",
};

/// Timing and layout of the selector loop
#[derive(Debug, Clone, Copy)]
pub struct SelectorConfig {
    pub tick_interval: Duration,
    pub refresh_interval: Duration,
    pub layout: StatusLayout,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            refresh_interval: REFRESH_INTERVAL,
            layout: STATUS_LAYOUT,
        }
    }
}

/// The four modes of the device
///
/// - A: synchronized rainbow cycle on the strip, white board
/// - B: white, gold and red comets played once each, white board
/// - C: white board, amber strip
/// - D: amber board, strip off
pub fn default_modes() -> Result<ModeSequence, ConfigError> {
    let rainbow = AnimationGroup::new([
        Animation::solid(SurfaceId::Board, WHITE),
        Animation::color_cycle(SurfaceId::Strip, CYCLE_SPEED, &CYCLE_COLORS),
    ])?
    .synced();

    let mut comets = heapless::Vec::<AnimationGroup, 3>::new();
    for color in COMET_COLORS {
        let group = AnimationGroup::new([
            Animation::solid(SurfaceId::Board, WHITE),
            Animation::comet(
                SurfaceId::Strip,
                STRIP_COMET_SPEED,
                color,
                STRIP_COMET_TAIL_LENGTH,
            )
            .once(),
        ])?;
        comets
            .push(group)
            .map_err(|_| ConfigError::CapacityExceeded)?;
    }

    let amber = AnimationGroup::new([
        Animation::solid(SurfaceId::Board, WHITE),
        Animation::solid(SurfaceId::Strip, AMBER),
    ])?;

    let dim = AnimationGroup::new([
        Animation::solid(SurfaceId::Board, AMBER),
        Animation::solid(SurfaceId::Strip, OFF),
    ])?;

    Ok(ModeSequence::new([
        Playable::Group(rainbow),
        Playable::Chain(ChainedSequence::new(comets)?),
        Playable::Group(amber),
        Playable::Group(dim),
    ])?
    .with_auto_clear(true))
}
