/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Fraction `numerator / denominator` mapped onto 0-255
///
/// Saturates at 255 when the numerator reaches the denominator.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fraction8(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    if numerator >= denominator {
        return 255;
    }
    ((numerator * 255) / denominator) as u8
}

/// Convert a unit brightness (0.0-1.0) into the 0-255 scale
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn brightness_from_unit(value: f32) -> u8 {
    let clamped = value.clamp(0.0, 1.0);
    libm::roundf(clamped * 255.0) as u8
}
