/// Clamp a wide integer into the 0-255 output range
///
/// All intensity-like values pass through here before storage, so
/// out-of-range inputs are silently corrected rather than rejected.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn clamp_u8(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Round a float sample to the nearest integer and clamp into 0-255
///
/// NaN maps to 0 (float-to-int casts saturate in Rust).
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn round_clamp(value: f32) -> u8 {
    clamp_u8(libm::roundf(value) as i32)
}
