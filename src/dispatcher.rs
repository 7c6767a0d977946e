//! Debounced event dispatch and system state.
//!
//! Provides [`PadDispatcher`] which owns the power/color/intensity state and
//! the per-line armed-edge bookkeeping, reacting to [`ButtonEvent`]s one at a
//! time. Also defines the collaborator traits for edge-interrupt control,
//! blocking event delivery and diagnostic output.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::controller::{PwmChannel, RgbController};
use crate::types::{Button, ButtonEvent, Channel, Edge};

/// Settle window applied after each press edge, in milliseconds.
///
/// Mechanical contacts bounce hardest at closure, so only the press edge is
/// debounced; releases are acted on immediately.
pub const DEBOUNCE_MS: u32 = 20;

/// Duty-value step applied per up/down actuation.
pub const INTENSITY_STEP: u16 = 20_000;

/// Stored duty value at reset, roughly 46% of [`DUTY_MAX`](crate::DUTY_MAX).
pub const INITIAL_INTENSITY: u16 = 30_000;

/// Wrap target when an up actuation would step the duty value below zero.
pub const INTENSITY_WRAP_HIGH: u16 = 60_010;

/// Wrap target when a down actuation would step the duty value past
/// [`DUTY_MAX`](crate::DUTY_MAX).
pub const INTENSITY_WRAP_LOW: u16 = 10;

/// Channel selected and lit on every power-on.
pub const POWER_ON_CHANNEL: Channel = Channel::Green;

const DIAG_CAPACITY: usize = 48;

/// Per-line control of edge-interrupt polarity.
///
/// Implement this over your platform's external-interrupt unit. Exactly one
/// polarity is armed per line at any instant: arming one direction disarms
/// the other.
pub trait EdgeControl {
    /// Arms detection of `edge` on `button`'s line, disarming the opposite
    /// direction.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn arm(&mut self, button: Button, edge: Edge);
}

/// Blocking source of pad events.
///
/// Implement this over your platform's hand-off primitive (an RTOS message
/// queue, thread flags, an interrupt-fed ring buffer). Events must be
/// delivered in posting order, each exactly once; simultaneous edges on
/// several lines become consecutive events and none are dropped.
pub trait EventSource {
    /// Returns the next pending event, blocking indefinitely until one
    /// arrives.
    ///
    /// The wait itself cannot fail.
    fn next_event(&mut self) -> ButtonEvent;
}

/// Best-effort sink for operator-facing diagnostic lines.
///
/// Implement this over your serial port or logger. Emission must not block
/// the dispatcher; drop or buffer lines internally as needed - this method
/// cannot fail observably.
pub trait DiagnosticSink {
    /// Emits one line of text (no trailing newline).
    fn emit(&mut self, line: &str);
}

/// Reacts to debounced pad events, driving a three-channel RGB output.
///
/// The dispatcher owns the whole system state (power, active channel, stored
/// duty value, per-line armed edge) plus the RGB controller and the platform
/// collaborators, and is the single mutator of that state. Interrupt handlers
/// only post events (see [`LevelTracker`](crate::LevelTracker)); they never
/// touch state or interrupt arming themselves.
///
/// Each physical actuation arrives as a press event followed by a release
/// event; actions fire on the release. Left/right steps the active channel
/// through the color cycle, up/down steps the stored duty value (inverse of
/// visual brightness), center toggles power.
///
/// # Type Parameters
/// * `R`, `G`, `B` - PWM channel implementation types
/// * `E` - Edge-interrupt control implementation type
/// * `D` - Delay implementation type
/// * `S` - Diagnostic sink implementation type
pub struct PadDispatcher<R, G, B, E, D, S>
where
    R: PwmChannel,
    G: PwmChannel,
    B: PwmChannel,
    E: EdgeControl,
    D: DelayNs,
    S: DiagnosticSink,
{
    rgb: RgbController<R, G, B>,
    edges: E,
    delay: D,
    diag: S,
    powered: bool,
    active: Channel,
    intensity: u16,
    armed: [Edge; 5],
}

impl<R, G, B, E, D, S> PadDispatcher<R, G, B, E, D, S>
where
    R: PwmChannel,
    G: PwmChannel,
    B: PwmChannel,
    E: EdgeControl,
    D: DelayNs,
    S: DiagnosticSink,
{
    /// Creates a dispatcher in the powered-off state and arms every line for
    /// its press edge.
    ///
    /// The controller arrives freshly constructed with all channels
    /// disabled; they stay dark until the first power-on.
    pub fn new(rgb: RgbController<R, G, B>, mut edges: E, delay: D, diag: S) -> Self {
        for button in Button::ALL {
            edges.arm(button, Edge::Rising);
        }

        Self {
            rgb,
            edges,
            delay,
            diag,
            powered: false,
            active: Channel::default(),
            intensity: INITIAL_INTENSITY,
            armed: [Edge::Rising; 5],
        }
    }

    /// Handles one event: debounce and rearm bookkeeping plus whatever state
    /// change and output drive the event implies.
    ///
    /// Press events settle the debounce window and flip the line to watch
    /// for its release; release events flip back to the press edge and run
    /// the line's action. Call from the dispatcher task only.
    pub fn handle_event(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Pressed(button) => self.on_press(button),
            ButtonEvent::Released(button) => self.on_release(button),
        }
    }

    /// Runs the dispatcher forever, draining `events`.
    ///
    /// Blocks in [`EventSource::next_event`] between actuations; together
    /// with the debounce window this is the task's only blocking point.
    pub fn run<Q: EventSource>(&mut self, events: &mut Q) -> ! {
        loop {
            let event = events.next_event();
            self.handle_event(event);
        }
    }

    fn on_press(&mut self, button: Button) {
        // Let contact bounce settle before trusting the line again.
        self.delay.delay_ms(DEBOUNCE_MS);
        self.rearm(button, Edge::Falling);
    }

    fn on_release(&mut self, button: Button) {
        self.rearm(button, Edge::Rising);

        match button {
            Button::Up => {
                self.intensity = self
                    .intensity
                    .checked_sub(INTENSITY_STEP)
                    .unwrap_or(INTENSITY_WRAP_HIGH);
                self.apply_intensity();
                // Operator lines speak visual brightness, the inverse of the
                // stored duty value.
                self.diag.emit("up press: intensity increased");
            }
            Button::Down => {
                self.intensity = self
                    .intensity
                    .checked_add(INTENSITY_STEP)
                    .unwrap_or(INTENSITY_WRAP_LOW);
                self.apply_intensity();
                self.diag.emit("down press: intensity decreased");
            }
            Button::Left => self.step_color(self.active.prev(), "left"),
            Button::Right => self.step_color(self.active.next(), "right"),
            Button::Center => self.toggle_power(),
        }
    }

    /// Moves drive from the active channel to `next`. No-op while powered
    /// off.
    fn step_color(&mut self, next: Channel, side: &'static str) {
        if !self.powered {
            return;
        }

        let previous = self.active;
        self.active = next;
        self.rgb.enable(next);
        self.rgb.set_duty(next, self.intensity);
        self.rgb.disable(previous);

        let mut line: String<DIAG_CAPACITY> = String::new();
        let _ = write!(line, "{} press: {} LED on", side, next.name());
        self.diag.emit(&line);
    }

    /// Toggles power. Power-on always selects and lights
    /// [`POWER_ON_CHANNEL`]; power-off darkens all three channels.
    fn toggle_power(&mut self) {
        if self.powered {
            self.powered = false;
            self.rgb.disable_all();
            self.diag.emit("center press: RGB off");
        } else {
            self.powered = true;
            // Restart from the same channel every time, whatever was active
            // when the output powered off.
            self.active = POWER_ON_CHANNEL;
            self.rgb.enable(self.active);
            self.rgb.set_duty(self.active, self.intensity);
            self.diag.emit("center press: RGB on");
        }
    }

    fn apply_intensity(&mut self) {
        if self.powered {
            self.rgb.set_duty(self.active, self.intensity);
        }
    }

    /// Points `button`'s interrupt at `edge` and records the direction.
    fn rearm(&mut self, button: Button, edge: Edge) {
        self.armed[button.index()] = edge;
        self.edges.arm(button, edge);
    }

    /// Returns `true` while the output is powered on.
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Returns the channel receiving drive when powered.
    pub fn active_channel(&self) -> Channel {
        self.active
    }

    /// Returns the stored duty value (a higher value drives a dimmer
    /// output).
    pub fn intensity(&self) -> u16 {
        self.intensity
    }

    /// Returns the edge direction currently armed on `button`'s line.
    pub fn armed_edge(&self, button: Button) -> Edge {
        self.armed[button.index()]
    }

    /// Returns the RGB controller, for duty inspection.
    pub fn controller(&self) -> &RgbController<R, G, B> {
        &self.rgb
    }
}
