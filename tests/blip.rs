mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embassy_time::Instant;
    use pwm_light_animator::mode::BLIP_INTERVAL_MAX_MS;
    use pwm_light_animator::{
        AnimationEngine, CommandBus, EngineConfig, ModeId, RandomSource, SplitMix64,
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

    /// Random source recording the ranges it was asked for.
    struct RecordingRng {
        inner: SplitMix64,
        calls: Rc<RefCell<Vec<(u32, u32)>>>,
    }

    impl RandomSource for RecordingRng {
        fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
            self.calls.borrow_mut().push((low, high));
            self.inner.next_in_range(low, high)
        }
    }

    fn blip_config() -> EngineConfig {
        EngineConfig {
            mode: ModeId::Blip,
            ..EngineConfig::default()
        }
    }

    /// Engine with 3 channels, every delay fixed at 100ms, cycle start at t=0.
    fn fixed_engine(bus: &CommandBus<4>) -> AnimationEngine<'_, FixedRng, 3, 4> {
        AnimationEngine::new(
            bus.receiver(),
            &blip_config(),
            FixedRng(100),
            Instant::from_millis(0),
        )
    }

    #[test]
    fn test_channels_untouched_while_waiting() {
        let bus = CommandBus::new();
        let mut engine = fixed_engine(&bus);

        // Frame buffer starts dark; the delay has not elapsed yet
        let frame = engine.step(Instant::from_millis(50));
        assert_eq!(frame, &[0, 0, 0]);

        // The deadline itself is still "waiting"
        let frame = engine.step(Instant::from_millis(100));
        assert_eq!(frame, &[0, 0, 0]);
    }

    #[test]
    fn test_pulse_rises_then_falls() {
        let bus = CommandBus::new();
        let mut engine = fixed_engine(&bus);

        // elapsed=50 of a 500ms pulse: t=0.2, curve=0.36
        // variance = |35 + 45| = 80, so 80*0.36 + 45 = 73.8
        let frame = engine.step(Instant::from_millis(150));
        assert_eq!(frame, &[74, 74, 74]);

        // Peak at elapsed = duration/2: 80 + 45
        let frame = engine.step(Instant::from_millis(350));
        assert_eq!(frame, &[125, 125, 125]);

        // elapsed=350: t=1.4, curve=0.84, 80*0.84 + 45 = 112.2
        let frame = engine.step(Instant::from_millis(450));
        assert_eq!(frame, &[112, 112, 112]);
    }

    #[test]
    fn test_finished_pulse_resets_to_mid_intensity() {
        let bus = CommandBus::new();
        let mut engine = fixed_engine(&bus);

        engine.step(Instant::from_millis(350));
        let frame = engine.step(Instant::from_millis(601));
        assert_eq!(frame, &[45, 45, 45]);

        // A new cycle started at t=601 with a fresh 100ms delay
        let frame = engine.step(Instant::from_millis(650));
        assert_eq!(frame, &[45, 45, 45]);
        let frame = engine.step(Instant::from_millis(951));
        assert_eq!(frame, &[125, 125, 125]);
    }

    #[test]
    fn test_pulse_clamps_at_full_brightness() {
        let bus = CommandBus::new();
        let mut config = blip_config();
        config.params.set_mid_intensity(200);
        config.params.set_range(255);
        let mut engine: AnimationEngine<'_, FixedRng, 2, 4> = AnimationEngine::new(
            bus.receiver(),
            &config,
            FixedRng(100),
            Instant::from_millis(0),
        );

        // variance = 455; the curve peak far exceeds the output range
        let frame = engine.step(Instant::from_millis(350));
        assert_eq!(frame, &[255, 255]);
    }

    #[test]
    fn test_delays_drawn_from_documented_range() {
        let bus: CommandBus<4> = CommandBus::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let rng = RecordingRng {
            inner: SplitMix64::new(99),
            calls: Rc::clone(&calls),
        };
        let mut engine: AnimationEngine<'_, RecordingRng, 8, 4> = AnimationEngine::new(
            bus.receiver(),
            &blip_config(),
            rng,
            Instant::from_millis(0),
        );

        // Step far enough ahead to finish several pulses and force redraws
        for t in (0u64..60_000).step_by(700) {
            engine.step(Instant::from_millis(t));
        }

        let calls = calls.borrow();
        assert!(calls.len() > 8, "expected redraws beyond construction");
        for &(low, high) in calls.iter() {
            assert_eq!(low, 0);
            assert_eq!(high, BLIP_INTERVAL_MAX_MS);
        }
    }
}
