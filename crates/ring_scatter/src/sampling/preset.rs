//! Preset position strategy for hand-authored placements.
use mint::Vector2;
use rand::RngCore;

use crate::error::Result;
use crate::sampling::PositionSampling;

/// Echoes a fixed list of authored positions.
///
/// Lets hand-placed set dressing (a porch bush, a signpost) flow through the
/// same plan/runner path as procedurally scattered layers. Never draws from
/// the random source and never fails.
#[derive(Debug, Clone, Default)]
pub struct PresetSampling {
    /// Positions returned verbatim, in order.
    pub points: Vec<Vector2<f32>>,
}

impl PresetSampling {
    /// Create a new preset strategy from a list of positions.
    pub fn new(points: Vec<Vector2<f32>>) -> Self {
        Self { points }
    }
}

impl PositionSampling for PresetSampling {
    fn generate(&self, _rng: &mut dyn RngCore) -> Result<Vec<Vector2<f32>>> {
        Ok(self.points.clone())
    }
}
