//! Control-loop delays

use serde::{Deserialize, Serialize};
use crate::{CYCLE_INTERVAL_MS, POLL_INTERVAL_MS, PULSE_OFF_MS, PULSE_ON_MS};

/// Delays used by the control loop, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Between samples while activation is held
    pub poll_ms: u64,
    /// Pixel lit per replayed symbol
    pub pulse_on_ms: u64,
    /// Pixel dark after each replayed symbol
    pub pulse_off_ms: u64,
    /// End of every cycle
    pub cycle_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            poll_ms: POLL_INTERVAL_MS,
            pulse_on_ms: PULSE_ON_MS,
            pulse_off_ms: PULSE_OFF_MS,
            cycle_ms: CYCLE_INTERVAL_MS,
        }
    }
}
