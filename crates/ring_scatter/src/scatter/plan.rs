//! Planning module for defining scatter layers and plans.
use crate::sampling::PositionSampling;
use crate::scatter::{LayerId, PlacementStyle};

/// A layer in a scatter plan: one sampling strategy plus the style applied
/// to every placement it produces.
#[non_exhaustive]
pub struct Layer {
    /// Unique identifier for this layer.
    pub id: LayerId,
    /// Sampling strategy producing this layer's ground-plane positions.
    pub sampling: Box<dyn PositionSampling>,
    /// Pose style applied to each sampled position.
    pub style: PlacementStyle,
}

impl Layer {
    /// Create a new layer with required fields.
    pub fn new(
        id: impl Into<LayerId>,
        sampling: Box<dyn PositionSampling>,
        style: PlacementStyle,
    ) -> Self {
        Self {
            id: id.into(),
            sampling,
            style,
        }
    }

    /// Create a new layer from a concrete sampling strategy.
    pub fn new_with<S: PositionSampling + 'static>(
        id: impl Into<LayerId>,
        sampling: S,
        style: PlacementStyle,
    ) -> Self {
        Self::new(id, Box::new(sampling), style)
    }
}

/// A scatter plan composed of one or more [`Layer`]s.
#[derive(Default)]
#[non_exhaustive]
pub struct Plan {
    pub layers: Vec<Layer>,
}

impl Plan {
    /// Create a new empty plan.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add a single layer to the plan.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Add multiple layers to the plan.
    pub fn with_layers(mut self, layers: Vec<Layer>) -> Self {
        self.layers.extend(layers);
        self
    }
}
