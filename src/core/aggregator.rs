//! Sample aggregator: averages motion while the activation button is held
//!
//! Blocks the caller for the whole hold. There is no timeout; releasing the
//! button is the only way out.

use tracing::debug;
use crate::POLL_INTERVAL_MS;
use crate::core::Board;
use crate::types::AxisSample;

/// Mean reading over one activation window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    /// Per-axis arithmetic mean, zero when nothing was sampled
    pub mean: AxisSample,
    /// Number of polls taken
    pub count: usize,
}

/// Polls the board while activation is held
#[derive(Debug, Clone, Copy)]
pub struct SampleAggregator {
    poll_ms: u64,
}

impl Default for SampleAggregator {
    fn default() -> Self {
        Self::new(POLL_INTERVAL_MS)
    }
}

impl SampleAggregator {
    pub fn new(poll_ms: u64) -> Self {
        Self { poll_ms }
    }

    /// Sample until activation is released and return the mean
    pub fn collect<B: Board + ?Sized>(&self, board: &mut B) -> Aggregate {
        let (mut sx, mut sy, mut sz) = (0.0f64, 0.0f64, 0.0f64);
        let mut count = 0usize;

        while board.is_activation_held() {
            let sample = board.read_axes();
            sx += sample.x as f64;
            sy += sample.y as f64;
            sz += sample.z as f64;
            count += 1;
            board.sleep_ms(self.poll_ms);
        }

        if count == 0 {
            return Aggregate { mean: AxisSample::ZERO, count };
        }

        let n = count as f64;
        let mean = AxisSample::new((sx / n) as f32, (sy / n) as f32, (sz / n) as f32);
        debug!(count, %mean, "activation released");
        Aggregate { mean, count }
    }
}
