//! Core types for GestureLink

mod symbol;
mod sample;
mod ids;
mod state;
mod timing;
mod output;
mod reason;
mod error;

pub use symbol::{Symbol, Rgb, letters};
pub use sample::AxisSample;
pub use ids::{NodeId, MessageIndex, Slot};
pub use state::RunState;
pub use timing::Timing;
pub use output::{CycleOutput, OutputState, Pulse};
pub use reason::ReasonCode;
pub use error::GestureError;
