//! Sinusoidal wave and traveling pulse
//!
//! Two phase formulas share the same temporal term:
//! - sine mode: a true traveling wave, phase grows linearly with the channel
//!   index divided by the wavelength.
//! - pulse mode: phase grows by a fixed separation per channel, the
//!   wavelength contributing only its sign as travel direction.
//!
//! A wavelength of exactly zero carries neither period nor direction, so
//! both formulas fall back to a flat phase of zero instead of dividing.

use core::f32::consts::PI;

use embassy_time::Instant;

use super::Mode;
use crate::math8::round_clamp;
use crate::params::AnimationParams;
use crate::rng::RandomSource;

/// Sine mode - oscillates every channel around the baseline intensity
#[derive(Debug, Clone, Copy, Default)]
pub struct SineMode;

impl SineMode {
    #[allow(clippy::cast_precision_loss)]
    fn phase(params: &AnimationParams, channel: usize) -> f32 {
        let wavelength = params.wavelength();
        if wavelength == 0.0 {
            return 0.0;
        }
        let index = channel as f32;
        if params.sine_mode() {
            index / wavelength
        } else {
            let direction = if wavelength < 0.0 { -1.0 } else { 1.0 };
            params.phase_separation() * index * direction
        }
    }
}

impl Mode for SineMode {
    #[allow(clippy::cast_precision_loss)]
    fn render(
        &mut self,
        now: Instant,
        params: &AnimationParams,
        _rng: &mut dyn RandomSource,
        frame: &mut [u8],
    ) {
        let omega = PI * now.as_millis() as f32 * params.speed() / 1000.0;
        let range = f32::from(params.range());
        let mid = f32::from(params.mid_intensity());

        for (channel, level) in frame.iter_mut().enumerate() {
            let phase = Self::phase(params, channel);
            let sample = range * libm::sinf(PI * phase + omega) + mid;
            *level = round_clamp(sample);
        }
    }
}
