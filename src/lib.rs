#![no_std]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: One of the five pad lines (up, down, left, right, center)
//! - **`ButtonEvent`**: A press or release on one line - the ten-code event vocabulary
//! - **`Edge`**: Rising/falling interrupt polarity, rearmed after every handled event
//! - **`Channel`**: The red, green or blue output channel
//! - **`LevelTracker`**: Atomic per-line level flags shared with interrupt context
//! - **`RgbController`**: Routes enable/disable/duty operations to three PWM channels
//! - **`PadDispatcher`**: Owns the system state and reacts to debounced events
//! - **`PwmChannel`**: Trait to implement for your PWM hardware
//! - **`EdgeControl`**: Trait to implement for your external-interrupt unit
//! - **`EventSource`**: Trait to implement for your event hand-off primitive
//! - **`DiagnosticSink`**: Trait to implement for your serial or log output
//!
//! Intensity is a stored duty value in `[0, DUTY_MAX]`; a larger value drives
//! a dimmer output (inverse relationship). When implementing the hardware
//! traits, handle transport errors internally - the dispatcher assumes its
//! collaborators cannot fail in steady state.

pub mod types;
pub mod controller;
pub mod tracker;
pub mod dispatcher;

pub use types::{Button, ButtonEvent, Channel, Edge};
pub use controller::{PwmChannel, RgbController};
pub use tracker::LevelTracker;
pub use dispatcher::{
    DEBOUNCE_MS, DiagnosticSink, EdgeControl, EventSource, INITIAL_INTENSITY, INTENSITY_STEP,
    INTENSITY_WRAP_HIGH, INTENSITY_WRAP_LOW, POWER_ON_CHANNEL, PadDispatcher,
};

/// Highest representable duty value (the PWM period minus one).
pub const DUTY_MAX: u16 = 65_535;
