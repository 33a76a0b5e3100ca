use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ring_scatter::prelude::*;
use ring_scatter_examples::{init_tracing, render_placements_to_png, LayerStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Twenty graves in a ring around the house footprint, at least half a
    // unit apart, slightly sunken and tilted.
    let graves = Layer::new_with(
        "graves",
        AnnulusSampling::new(20, 3.5, 6.0, 0.5).with_max_attempts_per_point(1000),
        PlacementStyle::new(0.3)
            .with_yaw_jitter(0.2)
            .with_tilt_jitter(0.2),
    );

    // Hand-placed bushes by the porch.
    let bushes = Layer::new_with(
        "bushes",
        PresetSampling::new(vec![
            Vec2::new(0.8, 2.2).into(),
            Vec2::new(1.4, 2.1).into(),
            Vec2::new(-0.8, 2.2).into(),
            Vec2::new(-1.0, 2.6).into(),
        ]),
        PlacementStyle::new(0.15),
    );

    let plan = Plan::new().with_layer(graves).with_layer(bushes);

    let mut rng = StdRng::seed_from_u64(2025);
    let result = run_plan(&plan, &mut rng)?;

    // Top-down view of the 20x20 ground plane.
    let mut rc = RenderConfig::new((1000, 1000), 20.0).with_background([30, 37, 41]);
    rc.set_layer_style(
        "graves",
        LayerStyle {
            color: [160, 160, 160],
            radius: 6,
        },
    );
    rc.set_layer_style(
        "bushes",
        LayerStyle {
            color: [137, 200, 84],
            radius: 8,
        },
    );

    render_placements_to_png(&result.placements, &rc, "graveyard-ring.png")?;

    Ok(())
}
