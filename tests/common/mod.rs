//! Shared test infrastructure for rgb-joypad integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rgb_joypad::{
    Button, ButtonEvent, Channel, DiagnosticSink, Edge, EdgeControl, EventSource, PadDispatcher,
    PwmChannel, RgbController,
};

// ============================================================================
// Mock PWM Channels
// ============================================================================

/// One recorded PWM operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmCall {
    Enable,
    Disable,
    SetDuty(u16),
}

#[derive(Debug, Default)]
struct PwmState {
    enabled: bool,
    duty: u16,
    calls: Vec<PwmCall>,
}

/// Mock PWM channel; clones share one recorded state, so tests can keep a
/// handle while the controller owns its copy.
#[derive(Clone, Default)]
pub struct MockPwm {
    state: Rc<RefCell<PwmState>>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    /// Last duty value written to the hardware register.
    pub fn duty(&self) -> u16 {
        self.state.borrow().duty
    }

    pub fn calls(&self) -> Vec<PwmCall> {
        self.state.borrow().calls.clone()
    }
}

impl PwmChannel for MockPwm {
    fn enable(&mut self) {
        let mut state = self.state.borrow_mut();
        state.enabled = true;
        state.calls.push(PwmCall::Enable);
    }

    fn disable(&mut self) {
        let mut state = self.state.borrow_mut();
        state.enabled = false;
        state.calls.push(PwmCall::Disable);
    }

    fn set_duty(&mut self, duty: u16) {
        let mut state = self.state.borrow_mut();
        state.duty = duty;
        state.calls.push(PwmCall::SetDuty(duty));
    }
}

// ============================================================================
// Mock Edge Control
// ============================================================================

#[derive(Debug, Default)]
struct EdgeState {
    armed: [Option<Edge>; 5],
    history: Vec<(Button, Edge)>,
}

/// Mock external-interrupt unit recording every arm call and the direction
/// currently armed per line.
#[derive(Clone, Default)]
pub struct MockEdgeControl {
    state: Rc<RefCell<EdgeState>>,
}

impl MockEdgeControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the hardware was last told to watch on `button`'s line.
    pub fn armed(&self, button: Button) -> Option<Edge> {
        self.state.borrow().armed[button.index()]
    }

    pub fn history(&self) -> Vec<(Button, Edge)> {
        self.state.borrow().history.clone()
    }
}

impl EdgeControl for MockEdgeControl {
    fn arm(&mut self, button: Button, edge: Edge) {
        let mut state = self.state.borrow_mut();
        state.armed[button.index()] = Some(edge);
        state.history.push((button, edge));
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay accumulating requested sleep time instead of sleeping.
#[derive(Clone, Default)]
pub struct MockDelay {
    total_ns: Rc<RefCell<u64>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total sleep requested so far, in milliseconds.
    pub fn slept_ms(&self) -> u64 {
        *self.total_ns.borrow() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// ============================================================================
// Mock Diagnostic Sink
// ============================================================================

/// Mock sink collecting emitted diagnostic lines.
#[derive(Clone, Default)]
pub struct MockSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }
}

impl DiagnosticSink for MockSink {
    fn emit(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

// ============================================================================
// Scripted Event Source
// ============================================================================

/// Event source replaying a fixed script.
///
/// `PadDispatcher::run` never returns, so tests drive it with a finite
/// script and catch the drain panic to regain control.
pub struct ScriptedEvents {
    queue: VecDeque<ButtonEvent>,
}

impl ScriptedEvents {
    pub fn new<const N: usize>(events: [ButtonEvent; N]) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> ButtonEvent {
        self.queue.pop_front().expect("event script drained")
    }
}

// ============================================================================
// Test Rig
// ============================================================================

/// A dispatcher wired to mock hardware, with handles kept for inspection.
pub struct TestRig {
    pub pad: PadDispatcher<MockPwm, MockPwm, MockPwm, MockEdgeControl, MockDelay, MockSink>,
    pub red: MockPwm,
    pub green: MockPwm,
    pub blue: MockPwm,
    pub edges: MockEdgeControl,
    pub delay: MockDelay,
    pub sink: MockSink,
}

impl TestRig {
    pub fn new() -> Self {
        let red = MockPwm::new();
        let green = MockPwm::new();
        let blue = MockPwm::new();
        let edges = MockEdgeControl::new();
        let delay = MockDelay::new();
        let sink = MockSink::new();

        let rgb = RgbController::new(red.clone(), green.clone(), blue.clone());
        let pad = PadDispatcher::new(rgb, edges.clone(), delay.clone(), sink.clone());

        Self {
            pad,
            red,
            green,
            blue,
            edges,
            delay,
            sink,
        }
    }

    /// One full press-then-release actuation of `button`.
    pub fn click(&mut self, button: Button) {
        self.pad.handle_event(ButtonEvent::Pressed(button));
        self.pad.handle_event(ButtonEvent::Released(button));
    }

    /// The mock behind `channel`'s output.
    pub fn channel(&self, channel: Channel) -> &MockPwm {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Number of channels the hardware currently reports enabled.
    pub fn enabled_count(&self) -> usize {
        [&self.red, &self.green, &self.blue]
            .iter()
            .filter(|pwm| pwm.is_enabled())
            .count()
    }
}
