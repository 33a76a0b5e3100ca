//! Shared helpers for the example binaries: tracing setup and a top-down
//! PNG renderer for scatter results.
use std::collections::HashMap;
use std::path::Path;

use image::{Rgb, RgbImage};
use ring_scatter::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const FALLBACK_STYLE: LayerStyle = LayerStyle {
    color: [235, 235, 235],
    radius: 2,
};

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Dot style for one layer.
#[derive(Debug, Clone, Copy)]
pub struct LayerStyle {
    /// RGB dot color.
    pub color: [u8; 3],
    /// Dot radius in pixels.
    pub radius: i32,
}

/// Viewport and per-layer styling for [`render_placements_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Width of the square world viewport, centered on the origin.
    pub world_extent: f32,
    /// Background color.
    pub background: [u8; 3],
    styles: HashMap<LayerId, LayerStyle>,
}

impl RenderConfig {
    /// Create a render config for the given image size and world viewport.
    pub fn new(image_size: (u32, u32), world_extent: f32) -> Self {
        Self {
            image_size,
            world_extent,
            background: [26, 26, 26],
            styles: HashMap::new(),
        }
    }

    /// Set the background color (builder-style).
    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Assign a dot style to a layer id.
    pub fn set_layer_style(&mut self, layer_id: impl Into<LayerId>, style: LayerStyle) {
        self.styles.insert(layer_id.into(), style);
    }

    fn style_for(&self, layer_id: &str) -> LayerStyle {
        self.styles.get(layer_id).copied().unwrap_or(FALLBACK_STYLE)
    }
}

/// Render placements top-down onto a PNG: world (x, z) maps to image (x, y).
pub fn render_placements_to_png(
    placements: &[Placement],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    anyhow::ensure!(width > 0 && height > 0, "image size must be non-zero");
    anyhow::ensure!(
        config.world_extent > 0.0,
        "world extent must be positive"
    );

    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    for placement in placements {
        let style = config.style_for(&placement.layer_id);
        let px = ((placement.position.x / config.world_extent) + 0.5) * width as f32;
        let py = ((placement.position.z / config.world_extent) + 0.5) * height as f32;
        draw_dot(&mut img, px as i64, py as i64, style);
    }

    img.save(path.as_ref())?;
    info!(
        "Wrote {} ({} placements).",
        path.as_ref().display(),
        placements.len()
    );

    Ok(())
}

fn draw_dot(img: &mut RgbImage, cx: i64, cy: i64, style: LayerStyle) {
    let r = style.radius.max(0) as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, Rgb(style.color));
            }
        }
    }
}
