//! Command bus for cross-context parameter changes.
//!
//! The engine itself is single-threaded and cycle-driven; when setters can
//! race with `step` (an interrupt handler, a radio task), changes go through
//! this bounded bus instead. It is built on `critical-section` and a
//! fixed-size `heapless::Deque`, and the engine drains it at the top of
//! every `step` call.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::mode::ModeId;
use crate::preset::Preset;

/// Error returned when trying to send to a full bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub Command);

/// Parameter and mode changes accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Apply a named preset's parameter tuple
    ApplyPreset(Preset),
    /// Switch the animation mode without touching parameters
    SetMode(ModeId),
    /// Set the baseline intensity (clamped to 0-255)
    SetMidIntensity(i32),
    /// Adjust the baseline intensity relatively (combined value clamped)
    AdjustMidIntensity(i32),
    /// Set the oscillation amplitude (clamped to 0-255)
    SetRange(i32),
    /// Set the temporal speed multiplier
    SetSpeed(f32),
    /// Set the spatial period and direction of the sine wave
    SetWavelength(f32),
    /// Set the per-channel phase offset of the pulse variant
    SetPhaseSeparation(f32),
    /// Switch between the sine wave and pulse phase formulas
    SetSineMode(bool),
}

/// A bounded, interrupt-safe command bus.
///
/// Synchronization goes through critical sections, so senders may live in
/// interrupt handlers or other execution contexts on embedded targets.
pub struct CommandBus<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandBus<SIZE> {
    /// Create a new empty bus.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this bus.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { bus: self }
    }

    /// Get a receiver handle for this bus.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { bus: self }
    }

    fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for CommandBus<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandBus`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    bus: &'a CommandBus<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to send a command onto the bus.
    ///
    /// Returns `Err(TrySendError(command))` if the bus is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.bus.try_send(command)
    }
}

/// A receiver handle for a [`CommandBus`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    bus: &'a CommandBus<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the next pending command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        self.bus.try_receive()
    }
}
