//! Output structures: pixel commands, replayed pulses, per-cycle reports

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crate::types::{letters, AxisSample, MessageIndex, ReasonCode, Rgb, Slot, Symbol};

/// Argument of the board's set-output primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputState {
    On(Rgb),
    Off,
}

/// One replayed light pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pulse {
    pub slot: Slot,
    pub symbol: Symbol,
    pub color: Rgb,
}

/// Report for each control-loop cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Cycle number, starting at 1
    pub cycle: u64,
    /// What happened
    pub reason: ReasonCode,
    /// Averaged reading from the activation window
    pub average: AxisSample,
    /// Polls taken while activation was held
    pub sample_count: usize,
    /// Classified symbol, if any
    pub symbol: Option<Symbol>,
    /// Buffer after the cycle (empty after a match)
    pub buffer: Vec<Symbol>,
    /// Matched message, if any
    pub matched: Option<MessageIndex>,
    /// Pulses replayed this cycle
    pub pulses: Vec<Pulse>,
}

impl CycleOutput {
    /// Create a report with nothing classified or matched
    pub fn new(cycle: u64, reason: ReasonCode) -> Self {
        Self {
            timestamp: Utc::now(),
            cycle,
            reason,
            average: AxisSample::ZERO,
            sample_count: 0,
            symbol: None,
            buffer: Vec::new(),
            matched: None,
            pulses: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }

    /// Format for terminal display (pulses drawn in their own colors)
    pub fn to_terminal_string(&self) -> String {
        let symbol = self
            .symbol
            .map(|s| s.axis_label().to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut line = format!(
            "#{:<4} {} avg={} n={} | buffer=[{}] | {}",
            self.cycle,
            symbol.bold(),
            self.average,
            self.sample_count,
            letters(&self.buffer),
            self.reason.code().dimmed(),
        );
        if let Some(index) = self.matched {
            line.push_str(&format!("\n      {} ", index.to_string().green().bold()));
            for pulse in &self.pulses {
                let dot = "●".truecolor(pulse.color.red(), pulse.color.green(), pulse.color.blue());
                line.push_str(&format!("{}@{} ", dot, pulse.slot));
            }
        }
        line
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let symbol = self.symbol.map(|s| s.letter().to_string()).unwrap_or_else(|| "-".to_string());
        let matched = self.matched.map(|m| m.get().to_string()).unwrap_or_else(|| "-".to_string());
        let pulses: Vec<String> = self
            .pulses
            .iter()
            .map(|p| format!("{}:{}", p.slot, p.color))
            .collect();
        format!(
            "cycle={} | symbol={} | buffer={} | matched={} | pulses={} | reason={}",
            self.cycle,
            symbol,
            letters(&self.buffer),
            matched,
            pulses.join(","),
            self.reason.code()
        )
    }
}
