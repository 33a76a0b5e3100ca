use rand::rngs::StdRng;
use rand::SeedableRng;
use ring_scatter::prelude::*;
use ring_scatter_examples::{init_tracing, render_placements_to_png, LayerStyle, RenderConfig};
use tracing::{info, warn};

/// Deliberately over-dense request: a thin ring cannot hold 60 points a full
/// unit apart. The sampler reports exhaustion instead of spinning, and the
/// caller relaxes the separation until the layout fits.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut separation = 1.0_f32;
    let mut rng = StdRng::seed_from_u64(7);

    let points = loop {
        let sampling =
            AnnulusSampling::new(60, 2.0, 0.5, separation).with_max_attempts_per_point(200);

        match sampling.generate(&mut rng) {
            Ok(points) => break points,
            Err(Error::SamplingExhausted {
                point_index,
                attempts,
            }) => {
                warn!(
                    "Separation {separation} too tight: point {point_index} failed after {attempts} attempts; relaxing."
                );
                separation *= 0.5;
            }
            Err(e) => return Err(e.into()),
        }
    };

    info!("Placed {} points at separation {}.", points.len(), separation);

    let layer = Layer::new_with("dots", PresetSampling::new(points), PlacementStyle::default());
    let plan = Plan::new().with_layer(layer);
    let result = run_plan(&plan, &mut rng)?;

    let mut rc = RenderConfig::new((800, 800), 6.0);
    rc.set_layer_style(
        "dots",
        LayerStyle {
            color: [235, 200, 120],
            radius: 4,
        },
    );
    render_placements_to_png(&result.placements, &rc, "exhaustion-retry.png")?;

    Ok(())
}
