//! Constant intensity fill
//!
//! Holds every channel at the baseline intensity.

use embassy_time::Instant;

use super::Mode;
use crate::params::AnimationParams;
use crate::rng::RandomSource;

/// Constant mode - fills all channels with the baseline intensity
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantMode;

impl Mode for ConstantMode {
    fn render(
        &mut self,
        _now: Instant,
        params: &AnimationParams,
        _rng: &mut dyn RandomSource,
        frame: &mut [u8],
    ) {
        frame.fill(params.mid_intensity());
    }
}
