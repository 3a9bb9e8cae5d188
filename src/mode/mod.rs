//! Animation modes with compile-time known variants
//!
//! All modes are stored in an enum to avoid heap allocations.
//! Each mode implements the `Mode` trait.

mod blip;
mod constant;
mod sine;

use embassy_time::Instant;

pub use blip::{BLIP_DURATION_MS, BLIP_INTERVAL_MAX_MS, BlipMode};
pub use constant::ConstantMode;
pub use sine::SineMode;

use crate::params::AnimationParams;
use crate::rng::RandomSource;

const MODE_NAME_CONSTANT: &str = "constant";
const MODE_NAME_SINE: &str = "sine";
const MODE_NAME_BLIP: &str = "blip";

const MODE_ID_CONSTANT: u8 = 0;
const MODE_ID_SINE: u8 = 1;
const MODE_ID_BLIP: u8 = 2;

pub trait Mode {
    /// Render a single frame of brightness levels
    fn render(
        &mut self,
        now: Instant,
        params: &AnimationParams,
        rng: &mut dyn RandomSource,
        frame: &mut [u8],
    );

    /// Reset per-channel timing state
    fn reset(&mut self, _now: Instant, _rng: &mut dyn RandomSource) {}
}

/// Known animation mode ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Constant = MODE_ID_CONSTANT,
    Sine = MODE_ID_SINE,
    Blip = MODE_ID_BLIP,
}

/// Mode slot - enum containing all possible modes
#[derive(Debug, Clone)]
pub enum ModeSlot<const CHANNELS: usize> {
    /// Constant baseline intensity on every channel
    Constant(ConstantMode),
    /// Sinusoidal wave or traveling pulse across channels
    Sine(SineMode),
    /// Independent randomized brightness flashes per channel
    Blip(BlipMode<CHANNELS>),
}

impl ModeId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_CONSTANT => Self::Constant,
            MODE_ID_SINE => Self::Sine,
            MODE_ID_BLIP => Self::Blip,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constant => MODE_NAME_CONSTANT,
            Self::Sine => MODE_NAME_SINE,
            Self::Blip => MODE_NAME_BLIP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_CONSTANT => Some(Self::Constant),
            MODE_NAME_SINE => Some(Self::Sine),
            MODE_NAME_BLIP => Some(Self::Blip),
            _ => None,
        }
    }

    pub fn to_slot<const CHANNELS: usize>(
        self,
        now: Instant,
        rng: &mut dyn RandomSource,
    ) -> ModeSlot<CHANNELS> {
        match self {
            Self::Constant => ModeSlot::Constant(ConstantMode),
            Self::Sine => ModeSlot::Sine(SineMode),
            Self::Blip => ModeSlot::Blip(BlipMode::new(now, rng)),
        }
    }
}

impl<const CHANNELS: usize> ModeSlot<CHANNELS> {
    /// Render the current mode
    pub fn render(
        &mut self,
        now: Instant,
        params: &AnimationParams,
        rng: &mut dyn RandomSource,
        frame: &mut [u8],
    ) {
        match self {
            Self::Constant(mode) => mode.render(now, params, rng, frame),
            Self::Sine(mode) => mode.render(now, params, rng, frame),
            Self::Blip(mode) => mode.render(now, params, rng, frame),
        }
    }

    /// Reset the mode's timing state
    pub fn reset(&mut self, now: Instant, rng: &mut dyn RandomSource) {
        match self {
            Self::Constant(mode) => Mode::reset(mode, now, rng),
            Self::Sine(mode) => Mode::reset(mode, now, rng),
            Self::Blip(mode) => Mode::reset(mode, now, rng),
        }
    }

    /// Get the mode ID for external observation
    pub fn id(&self) -> ModeId {
        match self {
            Self::Constant(_) => ModeId::Constant,
            Self::Sine(_) => ModeId::Sine,
            Self::Blip(_) => ModeId::Blip,
        }
    }
}
