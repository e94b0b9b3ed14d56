//! Scripted board: replays recorded gestures instead of real hardware
//!
//! One script step is consumed per control-loop cycle. The decoder polls the
//! reset input exactly once at the start of every cycle, so that call is what
//! advances the script. While a `Hold` step has unread samples the activation
//! button reads as held and every `read_axes` returns the next sample.

use std::collections::VecDeque;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::core::Board;
use crate::types::{AxisSample, OutputState, Rgb, Slot};

/// What the simulated user does during one cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Buttons untouched
    Idle,
    /// Reset button pressed
    Reset,
    /// Activation held for one poll per sample
    Hold(Vec<AxisSample>),
}

/// A pixel command captured by the simulated board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEvent {
    /// Virtual time of the command (milliseconds since start)
    pub at_ms: u64,
    pub slot: Slot,
    pub state: OutputState,
}

/// In-memory `Board` driven by a script
#[derive(Debug, Default)]
pub struct ScriptedBoard {
    steps: VecDeque<ScriptStep>,
    /// Samples of the step being played
    current: Vec<AxisSample>,
    cursor: usize,
    /// Reading reported when activation is not held
    resting: AxisSample,
    events: Vec<OutputEvent>,
    /// Virtual clock
    slept_ms: u64,
    realtime: bool,
}

impl ScriptedBoard {
    /// Board that only advances a virtual clock
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: steps.into(),
            ..Self::default()
        }
    }

    /// Board that also sleeps the thread for every delay
    pub fn realtime(steps: Vec<ScriptStep>) -> Self {
        Self {
            realtime: true,
            ..Self::new(steps)
        }
    }

    /// Steps not yet started
    pub fn remaining_steps(&self) -> usize {
        self.steps.len()
    }

    /// Every pixel command so far, in order
    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    /// Slot and color of every pixel that was switched on
    pub fn lit(&self) -> Vec<(Slot, Rgb)> {
        self.events
            .iter()
            .filter_map(|e| match e.state {
                OutputState::On(color) => Some((e.slot, color)),
                OutputState::Off => None,
            })
            .collect()
    }

    /// Total virtual time spent in `sleep_ms`
    pub fn slept_ms(&self) -> u64 {
        self.slept_ms
    }

    fn holding(&self) -> bool {
        self.cursor < self.current.len()
    }
}

impl Board for ScriptedBoard {
    fn read_axes(&mut self) -> AxisSample {
        if self.holding() {
            let sample = self.current[self.cursor];
            self.cursor += 1;
            self.resting = sample;
            sample
        } else {
            self.resting
        }
    }

    fn is_activation_held(&mut self) -> bool {
        self.holding()
    }

    fn is_reset_triggered(&mut self) -> bool {
        self.current.clear();
        self.cursor = 0;
        match self.steps.pop_front() {
            Some(ScriptStep::Reset) => true,
            Some(ScriptStep::Hold(samples)) => {
                self.current = samples;
                false
            }
            Some(ScriptStep::Idle) | None => false,
        }
    }

    fn set_output(&mut self, slot: Slot, state: OutputState) {
        self.events.push(OutputEvent {
            at_ms: self.slept_ms,
            slot,
            state,
        });
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.slept_ms += ms;
        if self.realtime {
            std::thread::sleep(Duration::from_millis(ms));
        }
    }

    fn is_running(&self) -> bool {
        !self.steps.is_empty()
    }
}
