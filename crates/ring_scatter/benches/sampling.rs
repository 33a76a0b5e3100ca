use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ring_scatter::sampling::{AnnulusSampling, PositionSampling};

const COUNTS: [usize; 4] = [20, 50, 100, 200];
const SEPARATIONS: [f32; 3] = [0.1, 0.25, 0.5];

fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(2))
}

fn annulus_benches(c: &mut Criterion) {
    for &separation in &SEPARATIONS {
        let mut group = c.benchmark_group(format!("sampling/annulus/sep_{separation:.2}"));

        for &count in &COUNTS {
            let strategy = AnnulusSampling::new(count, 3.5, 6.0, separation);
            group.throughput(Throughput::Elements(count as u64));

            let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ (count as u64));

            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                b.iter(|| {
                    let pts = strategy.generate(&mut rng).expect("bench config is feasible");
                    black_box(pts.len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = annulus_benches
}
criterion_main!(benches);
