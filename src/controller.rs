//! Three-channel duty-cycle output driver.
//!
//! Provides [`RgbController`] which routes enable/disable/duty operations to
//! the red, green and blue outputs. Also defines the [`PwmChannel`] trait for
//! hardware abstraction.

use crate::types::Channel;

/// Trait for abstracting one PWM output channel.
///
/// Implement this for each color output (typically a hardware timer compare
/// channel) to allow the controller to drive it.
pub trait PwmChannel {
    /// Starts driving the output at the last configured duty value.
    ///
    /// Idempotent. Handle any hardware errors internally - this method
    /// cannot fail.
    fn enable(&mut self);

    /// Stops driving the output entirely.
    ///
    /// Idempotent. A disabled channel is dark regardless of its duty
    /// register; disabling is distinct from writing any particular duty
    /// value. Handle any hardware errors internally - this method cannot
    /// fail.
    fn disable(&mut self);

    /// Writes `duty` to the channel's duty register.
    ///
    /// Takes visible effect while the channel is enabled. Handle any
    /// hardware errors internally - this method cannot fail.
    fn set_duty(&mut self, duty: u16);
}

/// Routes color-channel operations to three PWM outputs.
///
/// Owns the three channel drivers and remembers the last duty value written
/// to each; it holds no other state. Power and color-selection policy live
/// with the caller.
///
/// # Type Parameters
/// * `R` - Red channel implementation type
/// * `G` - Green channel implementation type
/// * `B` - Blue channel implementation type
pub struct RgbController<R: PwmChannel, G: PwmChannel, B: PwmChannel> {
    red: R,
    green: G,
    blue: B,
    duties: [u16; 3],
}

impl<R: PwmChannel, G: PwmChannel, B: PwmChannel> RgbController<R, G, B> {
    /// Creates a controller with all three channels disabled.
    pub fn new(mut red: R, mut green: G, mut blue: B) -> Self {
        red.disable();
        green.disable();
        blue.disable();

        Self {
            red,
            green,
            blue,
            duties: [0; 3],
        }
    }

    /// Begins driving `channel`. Idempotent.
    pub fn enable(&mut self, channel: Channel) {
        match channel {
            Channel::Red => self.red.enable(),
            Channel::Green => self.green.enable(),
            Channel::Blue => self.blue.enable(),
        }
    }

    /// Stops driving `channel`. Idempotent.
    pub fn disable(&mut self, channel: Channel) {
        match channel {
            Channel::Red => self.red.disable(),
            Channel::Green => self.green.disable(),
            Channel::Blue => self.blue.disable(),
        }
    }

    /// Stops driving all three channels.
    pub fn disable_all(&mut self) {
        self.red.disable();
        self.green.disable();
        self.blue.disable();
    }

    /// Writes `duty` to `channel` and remembers it.
    ///
    /// No range policy is applied here; the full `u16` domain is valid.
    pub fn set_duty(&mut self, channel: Channel, duty: u16) {
        self.duties[channel.index()] = duty;
        match channel {
            Channel::Red => self.red.set_duty(duty),
            Channel::Green => self.green.set_duty(duty),
            Channel::Blue => self.blue.set_duty(duty),
        }
    }

    /// Returns the last duty value written to `channel`.
    pub fn duty(&self, channel: Channel) -> u16 {
        self.duties[channel.index()]
    }
}
