mod tests {
    use embassy_time::{Duration, Instant};
    use pwm_light_animator::{
        AnimationEngine, Command, CommandBus, EngineConfig, FrameScheduler, ModeId, OutputDriver,
        Preset, RandomSource,
    };

    /// Random source returning a fixed value, clipped into the requested range.
    struct FixedRng(u32);

    impl RandomSource for FixedRng {
        fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
            if high <= low {
                return low;
            }
            self.0.clamp(low, high - 1)
        }
    }

    /// Output driver recording every write it receives.
    #[derive(Default)]
    struct RecordingDriver {
        writes: Vec<(usize, u8)>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, channel: usize, level: u8) {
            self.writes.push((channel, level));
        }
    }

    fn engine<'a, const CHANNELS: usize>(
        bus: &'a CommandBus<8>,
        config: &EngineConfig,
    ) -> AnimationEngine<'a, FixedRng, CHANNELS, 8> {
        AnimationEngine::new(bus.receiver(), config, FixedRng(100), Instant::from_millis(0))
    }

    #[test]
    fn test_constant_mode_fills_mid_intensity() {
        let bus = CommandBus::new();
        let mut engine = engine::<4>(&bus, &EngineConfig::default());

        let frame = engine.step(Instant::from_millis(0));
        assert_eq!(frame, &[45, 45, 45, 45]);
    }

    #[test]
    fn test_apply_state_writes_every_channel() {
        let bus = CommandBus::new();
        let mut config = EngineConfig::default();
        config.params.set_mid_intensity(200);
        let mut engine = engine::<3>(&bus, &config);
        let mut driver = RecordingDriver::default();

        engine.step(Instant::from_millis(0));
        engine.apply_state(&mut driver);

        assert_eq!(driver.writes, vec![(0, 200), (1, 200), (2, 200)]);
    }

    #[test]
    fn test_zero_preset_darkens_all_channels() {
        let bus = CommandBus::new();
        let mut engine = engine::<4>(&bus, &EngineConfig::default());

        engine.apply_preset(Preset::Zero, Instant::from_millis(0));
        let frame = engine.step(Instant::from_millis(100));
        assert_eq!(frame, &[0, 0, 0, 0]);
    }

    #[test]
    fn test_unknown_preset_raw_is_noop() {
        let bus = CommandBus::new();
        let mut engine = engine::<4>(&bus, &EngineConfig::default());
        let params_before = *engine.params();

        engine.apply_preset_raw(99, Instant::from_millis(0));
        assert_eq!(engine.mode_id(), ModeId::Constant);
        assert_eq!(*engine.params(), params_before);
    }

    #[test]
    fn test_pulse_mode_without_separation_is_uniform() {
        let bus = CommandBus::new();
        let mut config = EngineConfig {
            mode: ModeId::Sine,
            ..EngineConfig::default()
        };
        config.params.set_sine_mode(false);
        config.params.set_wavelength(1.0);
        config.params.set_phase_separation(0.0);
        let mut engine = engine::<5>(&bus, &config);

        for t in [0, 137, 500, 999] {
            let frame = engine.step(Instant::from_millis(t));
            let first = frame[0];
            assert!(frame.iter().all(|&level| level == first), "t={t}");
        }
    }

    #[test]
    fn test_sine_wave_samples() {
        let bus = CommandBus::new();
        let mut config = EngineConfig {
            mode: ModeId::Sine,
            ..EngineConfig::default()
        };
        config.params.set_sine_mode(true);
        config.params.set_wavelength(2.0);
        let mut engine = engine::<4>(&bus, &config);

        // At t=0 the temporal term vanishes; phase steps by a quarter turn
        // per channel: sin(0)=0, sin(pi/2)=1, sin(pi)=0, sin(3pi/2)=-1.
        let frame = engine.step(Instant::from_millis(0));
        assert_eq!(frame, &[45, 80, 45, 10]);
    }

    #[test]
    fn test_sine_peaks_at_quarter_period() {
        let bus = CommandBus::new();
        let mut config = EngineConfig {
            mode: ModeId::Sine,
            ..EngineConfig::default()
        };
        config.params.set_sine_mode(false);
        config.params.set_phase_separation(0.0);
        let mut engine = engine::<2>(&bus, &config);

        // speed=1: omega = pi * t / 1000, so t=500ms gives sin = 1
        let frame = engine.step(Instant::from_millis(500));
        assert_eq!(frame, &[80, 80]);
    }

    #[test]
    fn test_zero_wavelength_renders_flat_phase() {
        let bus = CommandBus::new();
        let mut config = EngineConfig {
            mode: ModeId::Sine,
            ..EngineConfig::default()
        };
        config.params.set_sine_mode(true);
        config.params.set_wavelength(0.0);
        let mut engine = engine::<6>(&bus, &config);

        let frame = engine.step(Instant::from_millis(250));
        let first = frame[0];
        assert!(frame.iter().all(|&level| level == first));
    }

    #[test]
    fn test_commands_are_drained_on_step() {
        let bus = CommandBus::new();
        let sender = bus.sender();
        let mut engine = engine::<3>(&bus, &EngineConfig::default());

        sender.try_send(Command::SetMidIntensity(300)).unwrap();
        sender.try_send(Command::AdjustMidIntensity(-55)).unwrap();
        sender.try_send(Command::SetSineMode(true)).unwrap();

        let frame = engine.step(Instant::from_millis(0)).to_vec();
        assert_eq!(engine.params().mid_intensity(), 200);
        assert!(engine.params().sine_mode());
        assert_eq!(frame, &[200, 200, 200]);
    }

    #[test]
    fn test_preset_command_switches_mode() {
        let bus = CommandBus::new();
        let sender = bus.sender();
        let mut engine = engine::<3>(&bus, &EngineConfig::default());

        sender.try_send(Command::ApplyPreset(Preset::Blip)).unwrap();
        engine.step(Instant::from_millis(0));
        assert_eq!(engine.mode_id(), ModeId::Blip);
    }

    #[test]
    fn test_scheduler_paces_frames() {
        let bus = CommandBus::new();
        let engine = engine::<3>(&bus, &EngineConfig::default());
        let driver = RecordingDriver::default();
        let mut scheduler =
            FrameScheduler::with_frame_duration(engine, driver, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        // Falling far behind resets the deadline instead of bursting
        let result = scheduler.tick(Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(520));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }
}
