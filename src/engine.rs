use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::command::{Command, CommandReceiver};
use crate::mode::{ModeId, ModeSlot};
use crate::params::AnimationParams;
use crate::preset::Preset;
use crate::rng::RandomSource;

/// Configuration for the animation engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Animation mode to start in
    pub mode: ModeId,
    /// Initial parameter set
    pub params: AnimationParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: ModeId::Constant,
            params: AnimationParams::default(),
        }
    }
}

/// Animation engine - computes per-channel brightness each control cycle
///
/// The engine owns the parameter set, the active mode's timing state and
/// the frame buffer. It performs no hardware access and no scheduling: an
/// external driver calls [`step`](Self::step) followed by
/// [`apply_state`](Self::apply_state) once per control-loop iteration.
pub struct AnimationEngine<'a, R, const CHANNELS: usize, const COMMAND_CHANNEL_SIZE: usize>
where
    R: RandomSource,
{
    // External dependencies and configuration
    commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
    rng: R,

    // Internal state
    params: AnimationParams,
    slot: ModeSlot<CHANNELS>,
    frame: [u8; CHANNELS],
}

impl<'a, R, const CHANNELS: usize, const COMMAND_CHANNEL_SIZE: usize>
    AnimationEngine<'a, R, CHANNELS, COMMAND_CHANNEL_SIZE>
where
    R: RandomSource,
{
    /// Create a new animation engine
    ///
    /// `now` seeds the blip timing state when the engine starts in blip
    /// mode; channels are fixed at `CHANNELS` from here on.
    pub fn new(
        commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
        config: &EngineConfig,
        mut rng: R,
        now: Instant,
    ) -> Self {
        Self {
            commands,
            slot: config.mode.to_slot(now, &mut rng),
            rng,
            params: config.params,
            frame: [0; CHANNELS],
        }
    }

    /// Compute the next frame
    ///
    /// Drains pending commands, then recomputes the brightness of every
    /// channel for the given timestamp. Returns the frame buffer.
    pub fn step(&mut self, now: Instant) -> &[u8] {
        self.process_commands(now);
        self.slot.render(now, &self.params, &mut self.rng, &mut self.frame);
        &self.frame
    }

    /// Apply the current frame to an output driver
    ///
    /// Invokes the driver once per channel. This is the only place the
    /// engine touches the external I/O capability.
    pub fn apply_state<O: OutputDriver>(&self, output: &mut O) {
        for (channel, level) in self.frame.iter().enumerate() {
            output.write(channel, *level);
        }
    }

    /// Apply a named preset's parameter tuple and switch mode
    pub fn apply_preset(&mut self, preset: Preset, now: Instant) {
        let mode = preset.apply(&mut self.params);
        #[cfg(feature = "esp32-log")]
        println!("light: preset {} -> mode {}", preset.as_str(), mode.as_str());
        self.set_mode(mode, now);
    }

    /// Apply a preset by raw id; unknown ids are a no-op
    pub fn apply_preset_raw(&mut self, raw: u8, now: Instant) {
        if let Some(preset) = Preset::from_raw(raw) {
            self.apply_preset(preset, now);
        }
    }

    /// Switch the animation mode, resetting its timing state
    pub fn set_mode(&mut self, mode: ModeId, now: Instant) {
        if self.slot.id() == mode {
            return;
        }
        self.slot = mode.to_slot(now, &mut self.rng);
        self.slot.reset(now, &mut self.rng);
    }

    /// Get the active mode id
    pub fn mode_id(&self) -> ModeId {
        self.slot.id()
    }

    /// Get the current frame buffer
    pub const fn frame(&self) -> &[u8; CHANNELS] {
        &self.frame
    }

    /// Get the current parameter set
    pub const fn params(&self) -> &AnimationParams {
        &self.params
    }

    /// Get mutable access to the parameter set
    ///
    /// For single-context use; concurrent contexts go through the command
    /// bus instead.
    pub const fn params_mut(&mut self) -> &mut AnimationParams {
        &mut self.params
    }

    /// Drain all pending commands from the bus (non-blocking)
    fn process_commands(&mut self, now: Instant) {
        while let Some(command) = self.commands.try_receive() {
            self.apply_command(command, now);
        }
    }

    fn apply_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::ApplyPreset(preset) => self.apply_preset(preset, now),
            Command::SetMode(mode) => self.set_mode(mode, now),
            Command::SetMidIntensity(value) => self.params.set_mid_intensity(value),
            Command::AdjustMidIntensity(delta) => self.params.adjust_mid_intensity(delta),
            Command::SetRange(value) => self.params.set_range(value),
            Command::SetSpeed(value) => self.params.set_speed(value),
            Command::SetWavelength(value) => self.params.set_wavelength(value),
            Command::SetPhaseSeparation(value) => self.params.set_phase_separation(value),
            Command::SetSineMode(value) => self.params.set_sine_mode(value),
        }
    }
}
