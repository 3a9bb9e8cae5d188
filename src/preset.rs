//! Named parameter presets
//!
//! Each preset maps to a fixed parameter tuple applied atomically; no hidden
//! state carries over except where a preset performs a full reset.

use crate::mode::ModeId;
use crate::params::AnimationParams;

const PRESET_NAME_DEFAULT: &str = "default";
const PRESET_NAME_SINE_WAVE_FORWARD: &str = "sine_wave_forward";
const PRESET_NAME_SINE_WAVE_REVERSE: &str = "sine_wave_reverse";
const PRESET_NAME_SINE_PULSE_FORWARD: &str = "sine_pulse_forward";
const PRESET_NAME_SINE_PULSE_REVERSE: &str = "sine_pulse_reverse";
const PRESET_NAME_BLIP: &str = "blip";
const PRESET_NAME_ZERO: &str = "zero";

const PRESET_ID_DEFAULT: u8 = 0;
const PRESET_ID_SINE_WAVE_FORWARD: u8 = 1;
const PRESET_ID_SINE_WAVE_REVERSE: u8 = 2;
const PRESET_ID_SINE_PULSE_FORWARD: u8 = 3;
const PRESET_ID_SINE_PULSE_REVERSE: u8 = 4;
const PRESET_ID_BLIP: u8 = 5;
const PRESET_ID_ZERO: u8 = 6;

/// Known preset ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Preset {
    /// Full parameter reset, constant intensity
    Default = PRESET_ID_DEFAULT,
    /// Sine wave traveling forward along the strip
    SineWaveForward = PRESET_ID_SINE_WAVE_FORWARD,
    /// Sine wave traveling backward along the strip
    SineWaveReverse = PRESET_ID_SINE_WAVE_REVERSE,
    /// Short traveling pulse, forward direction
    SinePulseForward = PRESET_ID_SINE_PULSE_FORWARD,
    /// Short traveling pulse, reverse direction
    SinePulseReverse = PRESET_ID_SINE_PULSE_REVERSE,
    /// Randomized per-channel brightness flashes
    Blip = PRESET_ID_BLIP,
    /// Everything off
    Zero = PRESET_ID_ZERO,
}

impl Preset {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PRESET_ID_DEFAULT => Self::Default,
            PRESET_ID_SINE_WAVE_FORWARD => Self::SineWaveForward,
            PRESET_ID_SINE_WAVE_REVERSE => Self::SineWaveReverse,
            PRESET_ID_SINE_PULSE_FORWARD => Self::SinePulseForward,
            PRESET_ID_SINE_PULSE_REVERSE => Self::SinePulseReverse,
            PRESET_ID_BLIP => Self::Blip,
            PRESET_ID_ZERO => Self::Zero,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => PRESET_NAME_DEFAULT,
            Self::SineWaveForward => PRESET_NAME_SINE_WAVE_FORWARD,
            Self::SineWaveReverse => PRESET_NAME_SINE_WAVE_REVERSE,
            Self::SinePulseForward => PRESET_NAME_SINE_PULSE_FORWARD,
            Self::SinePulseReverse => PRESET_NAME_SINE_PULSE_REVERSE,
            Self::Blip => PRESET_NAME_BLIP,
            Self::Zero => PRESET_NAME_ZERO,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PRESET_NAME_DEFAULT => Some(Self::Default),
            PRESET_NAME_SINE_WAVE_FORWARD => Some(Self::SineWaveForward),
            PRESET_NAME_SINE_WAVE_REVERSE => Some(Self::SineWaveReverse),
            PRESET_NAME_SINE_PULSE_FORWARD => Some(Self::SinePulseForward),
            PRESET_NAME_SINE_PULSE_REVERSE => Some(Self::SinePulseReverse),
            PRESET_NAME_BLIP => Some(Self::Blip),
            PRESET_NAME_ZERO => Some(Self::Zero),
            _ => None,
        }
    }

    /// Write this preset's parameter tuple and return the mode to run
    ///
    /// The pulse presets force the wavelength sign so the preset alone
    /// determines travel direction; its magnitude is left untouched.
    pub fn apply(self, params: &mut AnimationParams) -> ModeId {
        match self {
            Self::Default => {
                params.reset();
                ModeId::Constant
            }
            Self::SineWaveForward => {
                params.set_sine_mode(true);
                params.set_wavelength(1.0);
                ModeId::Sine
            }
            Self::SineWaveReverse => {
                params.set_sine_mode(true);
                params.set_wavelength(-1.0);
                ModeId::Sine
            }
            Self::SinePulseForward => {
                params.set_sine_mode(false);
                params.set_mid_intensity(0);
                params.set_wavelength(libm::fabsf(params.wavelength()));
                ModeId::Sine
            }
            Self::SinePulseReverse => {
                params.set_sine_mode(false);
                params.set_mid_intensity(0);
                params.set_wavelength(-libm::fabsf(params.wavelength()));
                ModeId::Sine
            }
            Self::Blip => ModeId::Blip,
            Self::Zero => {
                params.set_speed(0.0);
                params.set_range(0);
                params.set_mid_intensity(0);
                ModeId::Constant
            }
        }
    }
}
