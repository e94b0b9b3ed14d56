//! Axis readings

use serde::{Deserialize, Serialize};

/// One tri-axis motion reading (m/s²)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AxisSample {
    pub const ZERO: AxisSample = AxisSample { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for AxisSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
