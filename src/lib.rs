//! GestureLink: decodes motion gestures into fixed messages and replays
//! them as light pulses on a wearable board.
//!
//! Pipeline: Board → SampleAggregator → MotionClassifier →
//! SequenceAccumulator → MessageDictionary → NodeEncoder → Board pixels

pub mod core;
pub mod types;

// =============================================================================
// CLASSIFICATION [C]
// =============================================================================

/// Averaged axis magnitude (m/s²) at or beyond which a gesture is reported.
/// Inclusive on both signs.
pub const MOTION_THRESHOLD: f32 = 8.0;

/// Magnitude used by scripted gestures (roughly one g)
pub const GESTURE_MAGNITUDE: f32 = 9.81;

/// Polls per scripted gesture when the script gives no count
pub const DEFAULT_GESTURE_POLLS: usize = 4;

/// Largest `xN` a script statement may ask for
pub const MAX_REPEAT: usize = 1000;

// =============================================================================
// TIMING [C]
// =============================================================================

/// Delay between samples while the activation button is held (milliseconds)
pub const POLL_INTERVAL_MS: u64 = 50;

/// How long a replayed pulse stays lit (milliseconds)
pub const PULSE_ON_MS: u64 = 250;

/// Dark gap after each replayed pulse (milliseconds)
pub const PULSE_OFF_MS: u64 = 250;

/// Sleep at the end of every control-loop cycle (milliseconds)
pub const CYCLE_INTERVAL_MS: u64 = 1000;

// =============================================================================
// TABLE SIZES [C]
// =============================================================================

/// Number of messages in the dictionary
pub const MESSAGE_COUNT: usize = 10;

/// Number of physical output slots (pixels) on the board
pub const SLOT_COUNT: usize = 10;

/// Number of node permutation tables (node ids 1..=6)
pub const NODE_COUNT: usize = 6;

/// Shortest and longest dictionary message
pub const MIN_MESSAGE_LEN: usize = 4;
pub const MAX_MESSAGE_LEN: usize = 7;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
