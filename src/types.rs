//! Core types for pad lines, events and output channels.

/// One of the five lines of the direction pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Up direction.
    Up,

    /// Down direction.
    Down,

    /// Left direction.
    Left,

    /// Right direction.
    Right,

    /// Center push.
    Center,
}

impl Button {
    /// All five lines, in index order.
    pub const ALL: [Button; 5] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Center,
    ];

    /// Stable per-line index in `0..5`, for arrays keyed by line.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Left => 2,
            Button::Right => 3,
            Button::Center => 4,
        }
    }
}

/// Polarity of a line transition.
///
/// A pad contact drives its line high while held, so a rising edge marks the
/// press and a falling edge marks the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low-to-high transition (contact closing).
    Rising,

    /// High-to-low transition (contact opening).
    Falling,
}

/// A line transition delivered to the dispatcher.
///
/// The ten values of this enum are the complete event vocabulary: one press
/// and one release per line. Each event is produced once by the interrupt
/// side and consumed once by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The line's contact closed.
    Pressed(Button),

    /// The line's contact opened.
    Released(Button),
}

impl ButtonEvent {
    /// Maps a raw edge notification to its event.
    #[inline]
    pub fn from_edge(button: Button, edge: Edge) -> Self {
        match edge {
            Edge::Rising => ButtonEvent::Pressed(button),
            Edge::Falling => ButtonEvent::Released(button),
        }
    }

    /// The line the event occurred on.
    #[inline]
    pub fn button(self) -> Button {
        match self {
            ButtonEvent::Pressed(button) | ButtonEvent::Released(button) => button,
        }
    }
}

/// One of the three output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red channel.
    Red,

    /// Green channel.
    Green,

    /// Blue channel.
    Blue,
}

impl Channel {
    /// All three channels, in index order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Stable per-channel index in `0..3`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// The channel selected by one forward (right) step.
    ///
    /// The cycle runs Green, Red, Blue, then back to Green.
    #[inline]
    pub fn next(self) -> Channel {
        match self {
            Channel::Green => Channel::Red,
            Channel::Red => Channel::Blue,
            Channel::Blue => Channel::Green,
        }
    }

    /// The channel selected by one backward (left) step; inverse of
    /// [`next`](Channel::next).
    #[inline]
    pub fn prev(self) -> Channel {
        match self {
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
            Channel::Red => Channel::Green,
        }
    }

    /// Lowercase color name for diagnostic lines.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl Default for Channel {
    /// Reset value of the active-channel selection.
    fn default() -> Self {
        Channel::Red
    }
}
