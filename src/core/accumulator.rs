//! Sequence accumulator: one classified gesture per cycle into the buffer

use tracing::debug;
use crate::core::{Aggregate, Board, MotionClassifier, SampleAggregator};
use crate::types::{RunState, Symbol};

/// What one classify-and-append step saw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classified {
    pub aggregate: Aggregate,
    pub symbol: Option<Symbol>,
}

/// Samples, classifies and appends to the run-state buffer
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceAccumulator {
    aggregator: SampleAggregator,
    classifier: MotionClassifier,
}

impl SequenceAccumulator {
    pub fn new(aggregator: SampleAggregator, classifier: MotionClassifier) -> Self {
        Self { aggregator, classifier }
    }

    /// Wait out the activation window, classify the mean, append a symbol if
    /// one was detected. Blocks for as long as activation is held.
    pub fn classify_and_append<B: Board + ?Sized>(
        &self,
        state: &mut RunState,
        board: &mut B,
    ) -> Classified {
        let aggregate = self.aggregator.collect(board);
        let symbol = self.classifier.classify(&aggregate.mean);
        state.last_symbol = symbol;

        if let Some(symbol) = symbol {
            state.buffer.push(symbol);
            debug!(symbol = symbol.axis_label(), len = state.buffer.len(), "symbol appended");
        }

        Classified { aggregate, symbol }
    }

    /// Clear axes, buffer and markers
    pub fn reset(&self, state: &mut RunState) {
        state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptStep, ScriptedBoard};
    use crate::types::AxisSample;

    #[test]
    fn test_appends_detected_symbol() {
        let mut board = ScriptedBoard::new(vec![ScriptStep::Hold(vec![
            AxisSample::new(0.0, 0.0, -9.0);
            3
        ])]);
        let mut state = RunState::new();
        board.is_reset_triggered();

        let seen = SequenceAccumulator::default().classify_and_append(&mut state, &mut board);
        assert_eq!(seen.symbol, Some(Symbol::NegZ));
        assert_eq!(seen.aggregate.count, 3);
        assert_eq!(state.buffer, vec![Symbol::NegZ]);
        assert_eq!(state.last_symbol, Some(Symbol::NegZ));
    }

    #[test]
    fn test_weak_motion_appends_nothing() {
        let mut board = ScriptedBoard::new(vec![ScriptStep::Hold(vec![
            AxisSample::new(12.0, 0.0, 0.0),
            AxisSample::new(2.0, 0.0, 0.0),
        ])]);
        let mut state = RunState::new();
        board.is_reset_triggered();

        // mean x is 7.0, under threshold
        let seen = SequenceAccumulator::default().classify_and_append(&mut state, &mut board);
        assert_eq!(seen.symbol, None);
        assert!(state.buffer.is_empty());
    }

    #[test]
    fn test_reset_clears_buffer() {
        let mut state = RunState::new();
        state.buffer = vec![Symbol::PosX, Symbol::PosY];
        state.axes = AxisSample::new(3.0, 3.0, 3.0);
        SequenceAccumulator::default().reset(&mut state);
        assert!(state.buffer.is_empty());
        assert_eq!(state.axes, AxisSample::ZERO);
    }
}
