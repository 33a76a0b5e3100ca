//! Annulus rejection-sampling strategy with minimum pairwise separation.
use std::f32::consts::PI;

use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::{next_down, rand01, PositionSampling};

/// Attempt budget applied by [`AnnulusSampling::new`] when none is set.
pub const DEFAULT_MAX_ATTEMPTS_PER_POINT: u32 = 1_000;

/// Rejection sampling of a fixed number of points inside an annulus around
/// the origin, enforcing a minimum Euclidean distance between accepted points.
///
/// Candidates are drawn in polar coordinates: a uniform angle and a radius
/// uniform in `[inner_radius, inner_radius + radius_span)`. A candidate is
/// accepted only if it keeps `min_separation` to every point accepted so far;
/// otherwise it is redrawn, up to `max_attempts_per_point` times before the
/// run fails with [`Error::SamplingExhausted`]. The attempt budget makes
/// over-dense configurations an observable error instead of a hang.
///
/// The pairwise check is a plain O(count²) scan, sized for tens to low
/// hundreds of points; no spatial index is kept.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnulusSampling {
    /// Number of points to produce.
    pub count: usize,
    /// Inner radius of the annulus in world units.
    pub inner_radius: f32,
    /// Radial width of the annulus; radii are drawn from
    /// `[inner_radius, inner_radius + radius_span)`.
    pub radius_span: f32,
    /// Minimum Euclidean distance between any two accepted points.
    pub min_separation: f32,
    /// Retry ceiling per point before the run fails.
    pub max_attempts_per_point: u32,
}

impl AnnulusSampling {
    /// Create a new annulus sampler with the default attempt budget.
    pub fn new(count: usize, inner_radius: f32, radius_span: f32, min_separation: f32) -> Self {
        Self {
            count,
            inner_radius,
            radius_span,
            min_separation,
            max_attempts_per_point: DEFAULT_MAX_ATTEMPTS_PER_POINT,
        }
    }

    /// Set the per-point attempt budget (builder-style).
    pub fn with_max_attempts_per_point(mut self, max_attempts_per_point: u32) -> Self {
        self.max_attempts_per_point = max_attempts_per_point;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.inner_radius.is_finite() || self.inner_radius < 0.0 {
            return Err(Error::InvalidConfig(
                "inner_radius must be finite and >= 0".into(),
            ));
        }
        if !self.radius_span.is_finite() || self.radius_span < 0.0 {
            return Err(Error::InvalidConfig(
                "radius_span must be finite and >= 0".into(),
            ));
        }
        if !self.min_separation.is_finite() || self.min_separation < 0.0 {
            return Err(Error::InvalidConfig(
                "min_separation must be finite and >= 0".into(),
            ));
        }
        if self.max_attempts_per_point < 1 {
            return Err(Error::InvalidConfig(
                "max_attempts_per_point must be >= 1".into(),
            ));
        }

        Ok(())
    }
}

impl PositionSampling for AnnulusSampling {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<Vector2<f32>>> {
        self.validate()?;

        if self.count == 0 {
            return Ok(Vec::new());
        }

        // Next representable float below the outer edge keeps radii strictly
        // inside [inner_radius, inner_radius + radius_span) even when rand01
        // rounds to exactly 1.0. The .max guards degenerate spans.
        let max_radius = next_down(self.inner_radius + self.radius_span).max(self.inner_radius);
        let min_separation_squared = self.min_separation * self.min_separation;

        let mut accepted: Vec<Vec2> = Vec::with_capacity(self.count);

        for point_index in 0..self.count {
            let mut placed = false;

            for _ in 0..self.max_attempts_per_point {
                let angle = rand01(rng) * 2.0 * PI;
                let radius = (self.inner_radius + rand01(rng) * self.radius_span)
                    .clamp(self.inner_radius, max_radius);

                let candidate = Vec2::new(angle.sin() * radius, angle.cos() * radius);

                let conflicts = accepted.iter().any(|existing| {
                    let d = candidate - *existing;
                    d.x * d.x + d.y * d.y < min_separation_squared
                });

                if !conflicts {
                    accepted.push(candidate);
                    placed = true;
                    break;
                }
            }

            if !placed {
                return Err(Error::SamplingExhausted {
                    point_index,
                    attempts: self.max_attempts_per_point,
                });
            }
        }

        Ok(accepted.into_iter().map(Into::into).collect())
    }
}
