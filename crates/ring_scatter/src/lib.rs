#![forbid(unsafe_code)]
//! ring_scatter: Minimum-separation ring scattering for procedural object placement.
//!
//! Modules:
//! - sampling: position strategies (annulus rejection sampling, preset positions)
//! - scatter: plans, layers, runner lifting 2D samples into 3D placements
//! - error: crate error taxonomy and Result alias
//!
//! For examples, see the `ring_scatter_examples` crate in this workspace.
pub mod error;
pub mod sampling;
pub mod scatter;

/// Convenient re-exports for common types. Import with `use ring_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{
        AnnulusSampling, PositionSampling, PresetSampling, DEFAULT_MAX_ATTEMPTS_PER_POINT,
    };
    pub use crate::scatter::plan::{Layer, Plan};
    pub use crate::scatter::runner::{run_layer, run_plan, Placement, RunResult};
    pub use crate::scatter::{LayerId, PlacementStyle};
}
