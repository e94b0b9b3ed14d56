//! Run state carried across control-loop cycles

use serde::{Deserialize, Serialize};
use crate::types::{AxisSample, MessageIndex, Symbol};

/// Everything the control loop mutates between cycles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Instantaneous reading taken at the start of the cycle
    pub axes: AxisSample,
    /// Symbols accumulated since the last reset or match, in order
    pub buffer: Vec<Symbol>,
    /// Message matched on the most recent cycle
    pub last_match: Option<MessageIndex>,
    /// Symbol classified on the most recent cycle
    pub last_symbol: Option<Symbol>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to power-on state: zero axes, empty buffer, no markers
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
