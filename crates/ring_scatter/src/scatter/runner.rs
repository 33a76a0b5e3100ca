//! Runner executing scatter plans into posed placements.
use glam::Vec3;
use rand::RngCore;
use tracing::{info, warn};

use crate::error::Result;
use crate::sampling::rand01;
use crate::scatter::plan::{Layer, Plan};
use crate::scatter::LayerId;

/// A placed instance: the layer it belongs to and its pose.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Layer identifier this placement came from.
    pub layer_id: LayerId,
    /// World position; the sampled (x, y) plane maps to (x, z), with the
    /// layer's height on y.
    pub position: Vec3,
    /// Yaw rotation in radians.
    pub yaw: f32,
    /// Tilt rotation in radians.
    pub tilt: f32,
}

/// Result of running a scatter plan.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Placements produced by the run, in layer order.
    pub placements: Vec<Placement>,
}

impl RunResult {
    /// Creates a new empty [`RunResult`].
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// Sets the placements and returns a new instance.
    pub fn with_placements(mut self, placements: Vec<Placement>) -> Self {
        self.placements = placements;
        self
    }
}

/// Runs a single layer, returning its placements.
///
/// Sampling failures (invalid configuration, exhausted attempt budget)
/// propagate unmodified; no partial placements are returned.
pub fn run_layer<R: RngCore>(layer: &Layer, rng: &mut R) -> Result<Vec<Placement>> {
    let points = match layer.sampling.generate(rng) {
        Ok(points) => points,
        Err(e) => {
            warn!("Layer '{}': sampling failed: {}.", layer.id, e);
            return Err(e);
        }
    };

    let style = layer.style;
    let mut placements = Vec::with_capacity(points.len());

    for point in points {
        // Yaw before tilt: rotation draw order is part of the reproducible
        // sequence under a fixed seed.
        let yaw = if style.yaw_jitter > 0.0 {
            (rand01(rng) * 2.0 - 1.0) * style.yaw_jitter
        } else {
            0.0
        };
        let tilt = if style.tilt_jitter > 0.0 {
            (rand01(rng) * 2.0 - 1.0) * style.tilt_jitter
        } else {
            0.0
        };

        placements.push(Placement {
            layer_id: layer.id.clone(),
            position: Vec3::new(point.x, style.height, point.y),
            yaw,
            tilt,
        });
    }

    info!("Layer '{}': {} placements.", layer.id, placements.len());

    Ok(placements)
}

/// Runs every layer of the plan in order, returning the combined result.
pub fn run_plan<R: RngCore>(plan: &Plan, rng: &mut R) -> Result<RunResult> {
    if plan.layers.is_empty() {
        warn!("Scatter plan has no layers.");
    }

    let mut result = RunResult::new();
    for layer in &plan.layers {
        result.placements.extend(run_layer(layer, rng)?);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::sampling::{AnnulusSampling, PresetSampling};
    use crate::scatter::PlacementStyle;

    fn grave_layer() -> Layer {
        Layer::new_with(
            "graves",
            AnnulusSampling::new(20, 3.5, 6.0, 0.5),
            PlacementStyle::new(0.3)
                .with_yaw_jitter(0.2)
                .with_tilt_jitter(0.2),
        )
    }

    #[test]
    fn placements_carry_height_and_bounded_jitter() {
        let plan = Plan::new().with_layer(grave_layer());
        let mut rng = StdRng::seed_from_u64(2025);

        let result = run_plan(&plan, &mut rng).unwrap();
        assert_eq!(result.placements.len(), 20);

        for p in &result.placements {
            assert_eq!(p.layer_id, "graves");
            assert_eq!(p.position.y, 0.3);
            assert!(p.yaw >= -0.2 && p.yaw <= 0.2);
            assert!(p.tilt >= -0.2 && p.tilt <= 0.2);

            let ground_radius = Vec2::new(p.position.x, p.position.z).length();
            assert!(ground_radius >= 3.5 - 1e-4);
            assert!(ground_radius < 9.5 + 1e-4);
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);

        let a = run_layer(&grave_layer(), &mut rng_a).unwrap();
        let b = run_layer(&grave_layer(), &mut rng_b).unwrap();

        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.yaw, pb.yaw);
            assert_eq!(pa.tilt, pb.tilt);
        }
    }

    #[test]
    fn preset_layer_keeps_authored_positions() {
        let bushes = PresetSampling::new(vec![
            mint::Vector2 { x: 0.8, y: 2.2 },
            mint::Vector2 { x: -1.0, y: 2.6 },
        ]);
        let layer = Layer::new_with("bushes", bushes, PlacementStyle::new(0.15));
        let mut rng = StdRng::seed_from_u64(5);

        let placements = run_layer(&layer, &mut rng).unwrap();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].position, Vec3::new(0.8, 0.15, 2.2));
        assert_eq!(placements[1].position, Vec3::new(-1.0, 0.15, 2.6));
        assert_eq!(placements[0].yaw, 0.0);
        assert_eq!(placements[0].tilt, 0.0);
    }

    #[test]
    fn sampling_errors_propagate_unmodified() {
        let layer = Layer::new_with(
            "too_dense",
            AnnulusSampling::new(5, 0.0, 0.1, 1.0).with_max_attempts_per_point(50),
            PlacementStyle::default(),
        );
        let plan = Plan::new().with_layer(layer);
        let mut rng = StdRng::seed_from_u64(13);

        let err = run_plan(&plan, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::SamplingExhausted {
                point_index: 1,
                attempts: 50
            }
        ));
    }

    #[test]
    fn empty_plan_yields_empty_result() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_plan(&Plan::new(), &mut rng).unwrap();
        assert!(result.placements.is_empty());
    }
}
