//! Color type and the named palette used by the light modes

mod palette;

use smart_leds::RGB8;

pub use palette::{AMBER, BLUE, GOLD, GREEN, OFF, ORANGE, PURPLE, RED, WHITE, YELLOW};

use crate::math8::scale8;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Dim a color by `amount` (0 = off, 255 = unchanged)
#[inline]
pub const fn dim(color: Rgb, amount: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, amount),
        g: scale8(color.g, amount),
        b: scale8(color.b, amount),
    }
}
