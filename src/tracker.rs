//! Interrupt-side tracking of per-line logical levels.
//!
//! An edge interrupt handler is only allowed three actions: disable further
//! interrupts on its own line, update the line's tracked level, and post one
//! event to the dispatcher. [`LevelTracker`] covers the middle step and
//! derives the event for the last one.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::types::{Button, ButtonEvent};

/// Tracks the logical level of all five pad lines across interrupt and task
/// context.
///
/// All lines start released. Each delivered edge interrupt calls
/// [`record_edge`](LevelTracker::record_edge) for its own line, which flips
/// the tracked level and reports the resulting event to post. Levels are
/// stored in atomics, so the tracker is safe to share between interrupt
/// handlers and the dispatcher task; typically it lives in a `static`.
pub struct LevelTracker {
    pressed: [AtomicBool; 5],
}

impl LevelTracker {
    /// Creates a tracker with every line released.
    pub const fn new() -> Self {
        Self {
            pressed: [const { AtomicBool::new(false) }; 5],
        }
    }

    /// Flips `button`'s tracked level and returns the transition event.
    ///
    /// A released line becomes pressed and vice versa. Call exactly once per
    /// delivered edge interrupt, before posting the returned event. Safe to
    /// call from interrupt context (one lock-free atomic operation).
    pub fn record_edge(&self, button: Button) -> ButtonEvent {
        let was_pressed = self.pressed[button.index()].fetch_xor(true, Ordering::AcqRel);
        if was_pressed {
            ButtonEvent::Released(button)
        } else {
            ButtonEvent::Pressed(button)
        }
    }

    /// Returns `button`'s tracked logical level.
    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()].load(Ordering::Acquire)
    }
}

impl Default for LevelTracker {
    fn default() -> Self {
        Self::new()
    }
}
