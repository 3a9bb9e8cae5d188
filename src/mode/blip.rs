//! Randomized brightness flashes
//!
//! Each channel waits out its own random delay, then runs one pulse that
//! follows a `-(t-1)^2 + 1` curve: brightness grows from the baseline,
//! peaks at half the pulse duration and fades back. When the pulse ends the
//! channel returns to the baseline and a fresh delay is drawn.

use embassy_time::{Duration, Instant};

use super::Mode;
use crate::math8::round_clamp;
use crate::params::AnimationParams;
use crate::rng::RandomSource;

/// Total lifetime of one blip pulse
pub const BLIP_DURATION_MS: u64 = 500;
/// Exclusive upper bound for the randomized inter-blip delay
pub const BLIP_INTERVAL_MAX_MS: u32 = 5_000;

/// Timing state of a single channel
#[derive(Debug, Clone, Copy)]
struct BlipChannel {
    /// Start of the current blip cycle
    started_at: Instant,
    /// Randomized delay before the pulse begins
    delay: Duration,
}

impl BlipChannel {
    fn new(now: Instant, rng: &mut dyn RandomSource) -> Self {
        Self {
            started_at: now,
            delay: draw_delay(rng),
        }
    }
}

/// Blip mode - independent randomized pulses per channel
#[derive(Debug, Clone)]
pub struct BlipMode<const CHANNELS: usize> {
    channels: [BlipChannel; CHANNELS],
}

impl<const CHANNELS: usize> BlipMode<CHANNELS> {
    /// Create blip state with every channel cycle starting at `now`
    pub fn new(now: Instant, rng: &mut dyn RandomSource) -> Self {
        Self {
            channels: core::array::from_fn(|_| BlipChannel::new(now, rng)),
        }
    }
}

impl<const CHANNELS: usize> Mode for BlipMode<CHANNELS> {
    #[allow(clippy::cast_precision_loss)]
    fn render(
        &mut self,
        now: Instant,
        params: &AnimationParams,
        rng: &mut dyn RandomSource,
        frame: &mut [u8],
    ) {
        let mid = params.mid_intensity();
        let variance =
            (i32::from(params.range()) + i32::from(mid)).unsigned_abs() as f32;

        for (channel, level) in self.channels.iter_mut().zip(frame.iter_mut()) {
            let due = channel.started_at + channel.delay;
            if now <= due {
                // Still waiting for the random delay to elapse
                continue;
            }

            let elapsed = now.duration_since(due).as_millis();
            if elapsed > BLIP_DURATION_MS {
                *level = mid;
                channel.started_at = now;
                channel.delay = draw_delay(rng);
            } else {
                let t = elapsed as f32 / (BLIP_DURATION_MS as f32 / 2.0);
                let curve = -((t - 1.0) * (t - 1.0)) + 1.0;
                *level = round_clamp(variance * curve + f32::from(mid));
            }
        }
    }

    fn reset(&mut self, now: Instant, rng: &mut dyn RandomSource) {
        for channel in &mut self.channels {
            *channel = BlipChannel::new(now, rng);
        }
    }
}

fn draw_delay(rng: &mut dyn RandomSource) -> Duration {
    Duration::from_millis(u64::from(rng.next_in_range(0, BLIP_INTERVAL_MAX_MS)))
}
