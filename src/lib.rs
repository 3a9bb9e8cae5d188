#![no_std]

pub mod command;
pub mod engine;
pub mod frame_scheduler;
pub mod math8;
pub mod mode;
pub mod params;
pub mod preset;
pub mod rng;

pub use command::{Command, CommandBus, CommandReceiver, CommandSender};
pub use engine::{AnimationEngine, EngineConfig};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use mode::ModeId;
pub use params::AnimationParams;
pub use preset::Preset;
pub use rng::{RandomSource, SplitMix64};

pub use embassy_time::{Duration, Instant};

/// Abstract output driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait.
pub trait OutputDriver {
    /// Write an 8-bit intensity level to a single output channel
    fn write(&mut self, channel: usize, level: u8);
}
