//! Placement layer lifting sampled 2D positions into posed 3D placements.
//!
//! The sampling plane is the (x, z) ground plane; each layer fixes the height
//! axis and optionally jitters the yaw/tilt of every placement.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod plan;
pub mod runner;

pub type LayerId = String;

/// How a layer's sampled points become 3D poses.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStyle {
    /// Height on the fixed axis for every placement in the layer.
    pub height: f32,
    /// Yaw jitter amplitude in radians; each placement draws uniformly from
    /// `[-yaw_jitter, yaw_jitter]`.
    pub yaw_jitter: f32,
    /// Tilt jitter amplitude in radians, drawn like `yaw_jitter`.
    pub tilt_jitter: f32,
}

impl PlacementStyle {
    /// Create a style with the given height and no rotation jitter.
    pub fn new(height: f32) -> Self {
        Self {
            height,
            yaw_jitter: 0.0,
            tilt_jitter: 0.0,
        }
    }

    /// Set the yaw jitter amplitude (builder-style).
    pub fn with_yaw_jitter(mut self, yaw_jitter: f32) -> Self {
        self.yaw_jitter = yaw_jitter;
        self
    }

    /// Set the tilt jitter amplitude (builder-style).
    pub fn with_tilt_jitter(mut self, tilt_jitter: f32) -> Self {
        self.tilt_jitter = tilt_jitter;
        self
    }
}
