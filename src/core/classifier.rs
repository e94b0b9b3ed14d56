//! Motion classifier: averaged reading → gesture symbol
//!
//! First match wins, X before Y before Z, positive before negative:
//! - X ≥ +8 → PosX, X ≤ -8 → NegX
//! - Y ≥ +8 → PosY, Y ≤ -8 → NegY
//! - Z ≥ +8 → PosZ, Z ≤ -8 → NegZ
//! - otherwise no symbol

use crate::MOTION_THRESHOLD;
use crate::types::{AxisSample, Symbol};

/// Threshold classifier for averaged readings
#[derive(Debug, Clone, Copy)]
pub struct MotionClassifier {
    threshold: f32,
}

impl Default for MotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionClassifier {
    /// Create classifier with the fixed board threshold
    pub fn new() -> Self {
        Self { threshold: MOTION_THRESHOLD }
    }

    /// Classify one averaged reading. Only the dominant axis is reported.
    pub fn classify(&self, sample: &AxisSample) -> Option<Symbol> {
        let t = self.threshold;
        if sample.x >= t {
            Some(Symbol::PosX)
        } else if sample.x <= -t {
            Some(Symbol::NegX)
        } else if sample.y >= t {
            Some(Symbol::PosY)
        } else if sample.y <= -t {
            Some(Symbol::NegY)
        } else if sample.z >= t {
            Some(Symbol::PosZ)
        } else if sample.z <= -t {
            Some(Symbol::NegZ)
        } else {
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(x: f32, y: f32, z: f32) -> Option<Symbol> {
        MotionClassifier::new().classify(&AxisSample::new(x, y, z))
    }

    #[test]
    fn test_below_threshold_is_none() {
        for &(x, y, z) in &[(0.0, 0.0, 0.0), (7.9, -7.9, 7.9), (-7.999, 7.999, -7.999)] {
            assert_eq!(classify(x, y, z), None);
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert_eq!(classify(8.0, 0.0, 0.0), Some(Symbol::PosX));
        assert_eq!(classify(-8.0, 0.0, 0.0), Some(Symbol::NegX));
        assert_eq!(classify(7.999, 0.0, 0.0), None);
    }

    #[test]
    fn test_each_direction() {
        assert_eq!(classify(0.0, 9.0, 0.0), Some(Symbol::PosY));
        assert_eq!(classify(0.0, -9.0, 0.0), Some(Symbol::NegY));
        assert_eq!(classify(0.0, 0.0, 9.0), Some(Symbol::PosZ));
        assert_eq!(classify(0.0, 0.0, -9.0), Some(Symbol::NegZ));
    }

    #[test]
    fn test_x_dominates_y_dominates_z() {
        assert_eq!(classify(9.0, 9.0, 9.0), Some(Symbol::PosX));
        assert_eq!(classify(-9.0, 9.0, 9.0), Some(Symbol::NegX));
        assert_eq!(classify(1.0, -9.0, 9.0), Some(Symbol::NegY));
    }
}
