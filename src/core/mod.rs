//! Core modules for GestureLink

pub mod board;
pub mod classifier;
pub mod aggregator;
pub mod accumulator;
pub mod dictionary;
pub mod encoder;
pub mod decoder;
pub mod sim;
pub mod script;

pub use board::Board;
pub use classifier::MotionClassifier;
pub use aggregator::{Aggregate, SampleAggregator};
pub use accumulator::{Classified, SequenceAccumulator};
pub use dictionary::{MessageDictionary, MESSAGES};
pub use encoder::{NodeEncoder, NODE_PERMUTATIONS, SYMBOL_COLORS};
pub use decoder::GestureDecoder;
pub use sim::{OutputEvent, ScriptStep, ScriptedBoard};
pub use script::{gesture_step, ScriptParser};
