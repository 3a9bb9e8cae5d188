use crate::math8::clamp_u8;

/// Baseline brightness after a parameter reset
pub const DEFAULT_MID_INTENSITY: u8 = 45;
/// Oscillation amplitude after a parameter reset
pub const DEFAULT_RANGE: u8 = 35;
/// Temporal speed multiplier after a parameter reset
pub const DEFAULT_SPEED: f32 = 1.0;
/// Spatial period of the sine wave after a parameter reset
pub const DEFAULT_WAVELENGTH: f32 = 1.0;
/// Per-channel phase offset of the pulse variant after a parameter reset
pub const DEFAULT_PHASE_SEPARATION: f32 = 0.25;

/// Animation parameters shared by all channels
///
/// Intensity-like fields are kept in the 0-255 output range at all times;
/// the setters clamp before storing. Out-of-range inputs are corrected
/// silently so a running light loop is never interrupted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    mid_intensity: u8,
    range: u8,
    wavelength: f32,
    phase_separation: f32,
    speed: f32,
    sine_mode: bool,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            mid_intensity: DEFAULT_MID_INTENSITY,
            range: DEFAULT_RANGE,
            wavelength: DEFAULT_WAVELENGTH,
            phase_separation: DEFAULT_PHASE_SEPARATION,
            speed: DEFAULT_SPEED,
            sine_mode: false,
        }
    }
}

impl AnimationParams {
    /// Baseline brightness around which sine and blip oscillate
    pub const fn mid_intensity(&self) -> u8 {
        self.mid_intensity
    }

    /// Oscillation amplitude
    pub const fn range(&self) -> u8 {
        self.range
    }

    /// Spatial period and direction of the sine wave across channels
    pub const fn wavelength(&self) -> f32 {
        self.wavelength
    }

    /// Per-channel phase offset used by the traveling-pulse variant
    pub const fn phase_separation(&self) -> f32 {
        self.phase_separation
    }

    /// Multiplier on the temporal phase term
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Selects the true sine wave formula over the linear phase pulse
    pub const fn sine_mode(&self) -> bool {
        self.sine_mode
    }

    /// Set the baseline brightness, clamped into 0-255
    pub const fn set_mid_intensity(&mut self, value: i32) {
        self.mid_intensity = clamp_u8(value);
    }

    /// Apply a relative adjustment to the baseline brightness
    ///
    /// The combined value is clamped before assignment, so repeated
    /// adjustments cannot drift outside the output range.
    pub const fn adjust_mid_intensity(&mut self, delta: i32) {
        self.set_mid_intensity(self.mid_intensity as i32 + delta);
    }

    /// Set the oscillation amplitude, clamped into 0-255
    pub const fn set_range(&mut self, value: i32) {
        self.range = clamp_u8(value);
    }

    /// Set the spatial period of the sine wave
    ///
    /// The sign encodes travel direction. A value of zero is degenerate;
    /// the modes guard it by rendering a flat phase instead of dividing.
    pub const fn set_wavelength(&mut self, value: f32) {
        self.wavelength = value;
    }

    /// Set the per-channel phase offset of the pulse variant
    pub const fn set_phase_separation(&mut self, value: f32) {
        self.phase_separation = value;
    }

    /// Set the temporal speed multiplier
    pub const fn set_speed(&mut self, value: f32) {
        self.speed = value;
    }

    /// Switch between the sine wave and linear phase pulse formulas
    pub const fn set_sine_mode(&mut self, value: bool) {
        self.sine_mode = value;
    }

    /// Restore the baseline parameter set
    pub const fn reset(&mut self) {
        self.speed = DEFAULT_SPEED;
        self.range = DEFAULT_RANGE;
        self.mid_intensity = DEFAULT_MID_INTENSITY;
    }
}
