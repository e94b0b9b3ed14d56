//! Gesture decoder: the board's control loop
//!
//! Per cycle:
//! 1. read the instantaneous axes into the run state
//! 2. reset input engaged → clear everything, otherwise sample, classify
//!    and append (blocks while activation is held)
//! 3. match the buffer; a match consumes it
//! 4. on a match replay the pre-match buffer: every symbol pulses the
//!    message's slot in the symbol's color
//! 5. sleep the cycle interval

use tracing::{debug, info, warn};
use crate::core::{Board, MessageDictionary, MotionClassifier, NodeEncoder, SampleAggregator, SequenceAccumulator};
use crate::types::{
    letters, CycleOutput, MessageIndex, NodeId, OutputState, Pulse, ReasonCode, RunState, Symbol, Timing,
};

/// Control loop state machine for one board
#[derive(Debug)]
pub struct GestureDecoder {
    /// Fixed for the lifetime of the decoder
    node: NodeId,
    timing: Timing,
    accumulator: SequenceAccumulator,
    dictionary: MessageDictionary,
    encoder: NodeEncoder,
    state: RunState,
    /// Cycles run so far
    cycle: u64,
}

impl GestureDecoder {
    /// Create decoder with the board's default timing
    pub fn new(node: NodeId) -> Self {
        Self::with_timing(node, Timing::default())
    }

    pub fn with_timing(node: NodeId, timing: Timing) -> Self {
        if !node.is_valid() {
            warn!(node = node.0, "node has no permutation table, matches will not light");
        }
        Self {
            node,
            timing,
            accumulator: SequenceAccumulator::new(
                SampleAggregator::new(timing.poll_ms),
                MotionClassifier::new(),
            ),
            dictionary: MessageDictionary::new(),
            encoder: NodeEncoder::new(),
            state: RunState::new(),
            cycle: 0,
        }
    }

    /// Run one full cycle against the board
    pub fn run_cycle<B: Board + ?Sized>(&mut self, board: &mut B) -> CycleOutput {
        self.cycle += 1;
        self.state.axes = board.read_axes();

        let mut output = if board.is_reset_triggered() {
            self.accumulator.reset(&mut self.state);
            info!(cycle = self.cycle, "reset");
            CycleOutput::new(self.cycle, ReasonCode::G001_RESET)
        } else {
            let seen = self.accumulator.classify_and_append(&mut self.state, board);
            let reason = match seen.symbol {
                None => ReasonCode::G002_NO_MOVEMENT,
                Some(_) if self.dictionary.has_prefix(&self.state.buffer) => {
                    ReasonCode::G002_SYMBOL_APPENDED
                }
                Some(_) => ReasonCode::G002_SEQUENCE_STUCK,
            };
            let mut output = CycleOutput::new(self.cycle, reason);
            output.average = seen.aggregate.mean;
            output.sample_count = seen.aggregate.count;
            output.symbol = seen.symbol;
            output
        };

        // Snapshot before matching; a match clears the buffer
        let sequence = self.state.buffer.clone();
        let matched = self.dictionary.match_and_consume(&mut self.state.buffer);
        self.state.last_match = matched;

        if let Some(index) = matched {
            info!(cycle = self.cycle, %index, sequence = %letters(&sequence), "message matched");
            output.matched = Some(index);
            match self.replay(board, index, &sequence) {
                Some(pulses) => {
                    output.pulses = pulses;
                    output.reason = ReasonCode::G003_MESSAGE_MATCHED;
                }
                None => output.reason = ReasonCode::G004_INVALID_NODE,
            }
        }

        output.buffer = self.state.buffer.clone();
        debug!(
            cycle = self.cycle,
            len = self.state.buffer.len(),
            buffer = %letters(&self.state.buffer),
            reason = output.reason.code(),
            "cycle done"
        );

        board.sleep_ms(self.timing.cycle_ms);
        output
    }

    /// Run cycles until the board stops or `max_cycles` is reached.
    /// Returns the number of cycles run.
    pub fn run<B, F>(&mut self, board: &mut B, max_cycles: Option<u64>, mut on_cycle: F) -> u64
    where
        B: Board + ?Sized,
        F: FnMut(&CycleOutput),
    {
        let mut ran = 0;
        while board.is_running() && max_cycles.map_or(true, |max| ran < max) {
            let output = self.run_cycle(board);
            on_cycle(&output);
            ran += 1;
        }
        ran
    }

    /// Pulse the message's slot once per symbol. None when the node has no
    /// slot table; nothing is lit then.
    fn replay<B: Board + ?Sized>(
        &self,
        board: &mut B,
        index: MessageIndex,
        sequence: &[Symbol],
    ) -> Option<Vec<Pulse>> {
        let Some(slot) = self.encoder.slot_for(self.node, index) else {
            warn!(node = self.node.0, %index, "no slot for node, skipping replay");
            return None;
        };

        let mut pulses = Vec::with_capacity(sequence.len());
        for &symbol in sequence {
            let color = self.encoder.color_for(Some(symbol));
            board.set_output(slot, OutputState::On(color));
            board.sleep_ms(self.timing.pulse_on_ms);
            board.set_output(slot, OutputState::Off);
            board.sleep_ms(self.timing.pulse_off_ms);
            pulses.push(Pulse { slot, symbol, color });
        }
        Some(pulses)
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn buffer(&self) -> &[Symbol] {
        &self.state.buffer
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptStep, ScriptedBoard};
    use crate::types::{AxisSample, Rgb};

    fn gesture(symbol: Symbol) -> ScriptStep {
        let (x, y, z) = symbol.direction();
        ScriptStep::Hold(vec![AxisSample::new(x * 9.5, y * 9.5, z * 9.5); 2])
    }

    #[test]
    fn test_idle_cycle_sleeps_interval() {
        let mut board = ScriptedBoard::new(vec![ScriptStep::Idle]);
        let mut decoder = GestureDecoder::new(NodeId(1));
        let output = decoder.run_cycle(&mut board);
        assert_eq!(output.reason, ReasonCode::G002_NO_MOVEMENT);
        assert_eq!(output.cycle, 1);
        assert_eq!(board.slept_ms(), 1000);
    }

    #[test]
    fn test_reset_clears_buffer() {
        let mut board = ScriptedBoard::new(vec![gesture(Symbol::PosZ), ScriptStep::Reset]);
        let mut decoder = GestureDecoder::new(NodeId(1));
        decoder.run_cycle(&mut board);
        assert_eq!(decoder.buffer(), &[Symbol::PosZ]);

        let output = decoder.run_cycle(&mut board);
        assert_eq!(output.reason, ReasonCode::G001_RESET);
        assert!(decoder.buffer().is_empty());
        assert_eq!(decoder.state().axes, AxisSample::ZERO);
    }

    #[test]
    fn test_stuck_sequence_reported() {
        let mut board = ScriptedBoard::new(vec![gesture(Symbol::NegY), gesture(Symbol::NegY)]);
        let mut decoder = GestureDecoder::new(NodeId(1));
        assert_eq!(decoder.run_cycle(&mut board).reason, ReasonCode::G002_SYMBOL_APPENDED);
        assert_eq!(decoder.run_cycle(&mut board).reason, ReasonCode::G002_SEQUENCE_STUCK);
    }

    #[test]
    fn test_match_replays_snapshot() {
        // message5: r y v o o
        let steps = [Symbol::PosX, Symbol::PosY, Symbol::NegZ, Symbol::NegX, Symbol::NegX]
            .into_iter()
            .map(gesture)
            .collect();
        let mut board = ScriptedBoard::new(steps);
        let mut decoder = GestureDecoder::new(NodeId(2));

        let mut outputs = Vec::new();
        decoder.run(&mut board, None, |o| outputs.push(o.clone()));

        let last = outputs.last().unwrap();
        assert_eq!(last.matched, MessageIndex::new(5));
        assert_eq!(last.reason, ReasonCode::G003_MESSAGE_MATCHED);
        assert!(last.buffer.is_empty());
        assert_eq!(last.pulses.len(), 5);
        // node2[5] = 2
        assert!(last.pulses.iter().all(|p| p.slot.get() == 2));
        assert_eq!(last.pulses[2].color, Rgb::VIOLET);
    }

    #[test]
    fn test_invalid_node_lights_nothing_but_consumes() {
        let steps = [Symbol::PosX, Symbol::PosY, Symbol::NegZ, Symbol::NegX, Symbol::NegX]
            .into_iter()
            .map(gesture)
            .collect();
        let mut board = ScriptedBoard::new(steps);
        let mut decoder = GestureDecoder::new(NodeId(7));

        let mut last = None;
        decoder.run(&mut board, None, |o| last = Some(o.clone()));

        let last = last.unwrap();
        assert_eq!(last.reason, ReasonCode::G004_INVALID_NODE);
        assert!(last.pulses.is_empty());
        assert!(decoder.buffer().is_empty());
        assert!(board.events().is_empty());
    }

    #[test]
    fn test_run_respects_cycle_limit() {
        let mut board = ScriptedBoard::new(vec![ScriptStep::Idle; 5]);
        let mut decoder = GestureDecoder::new(NodeId(1));
        let ran = decoder.run(&mut board, Some(3), |_| {});
        assert_eq!(ran, 3);
        assert_eq!(decoder.cycle(), 3);
        assert_eq!(decoder.node(), NodeId(1));
        assert_eq!(board.remaining_steps(), 2);

        // A second run keeps counting from where the first stopped
        decoder.run(&mut board, None, |_| {});
        assert_eq!(decoder.cycle(), 5);
    }
}
