use super::{Rgb, rgb_from_u32};

pub const OFF: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_2800);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_9600);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const PURPLE: Rgb = rgb_from_u32(0xB4_00FF);
pub const GOLD: Rgb = rgb_from_u32(0xFF_DE1E);
pub const AMBER: Rgb = rgb_from_u32(0xFF_6400);
