//! Board capability: the sensor, buttons, pixels and delay the decoder drives

use crate::types::{AxisSample, OutputState, Slot};

/// Hardware seen by the control loop.
///
/// Every call may block (`sleep_ms` always does); the decoder is the only
/// caller and runs on a single thread.
pub trait Board {
    /// Instantaneous tri-axis reading
    fn read_axes(&mut self) -> AxisSample;

    /// True while the sampling trigger (left button) is held
    fn is_activation_held(&mut self) -> bool;

    /// True while the reset input (right button) is engaged
    fn is_reset_triggered(&mut self) -> bool;

    /// Light or clear one pixel
    fn set_output(&mut self, slot: Slot, state: OutputState);

    /// Cooperative delay
    fn sleep_ms(&mut self, ms: u64);

    /// False once the board has nothing more to offer. Hardware runs until
    /// power-off.
    fn is_running(&self) -> bool {
        true
    }
}
