use criterion::{Criterion, criterion_group, criterion_main};
use health_scatter::api::{ChartConfig, ChartController, build_x_scale};
use health_scatter::core::{Dataset, Dimension, LinearScale, Record, RecordMeasures};
use health_scatter::render::NullRenderer;
use std::hint::black_box;

fn generated_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Record::new(
                format!("State {i}"),
                format!("S{i}"),
                RecordMeasures {
                    poverty: 8.0 + (t * 0.37) % 14.0,
                    healthcare: 3.0 + (t * 0.53) % 20.0,
                    obesity: 20.0 + (t * 0.29) % 17.0,
                    ..RecordMeasures::default()
                },
            )
            .expect("valid generated record")
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(8.0, 24.0, 0.0, 760.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(15.8)).expect("to pixel");
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_x_scale_build_10k(c: &mut Criterion) {
    let records = generated_records(10_000);
    let plot_area = ChartConfig::default().plot_area().expect("plot area");

    c.bench_function("x_scale_build_10k", |b| {
        b.iter(|| {
            let _ = build_x_scale(black_box(&records), Dimension::Obesity, plot_area)
                .expect("x scale");
        })
    });
}

fn bench_render_frame_mid_transition_2k(c: &mut Criterion) {
    let dataset = Dataset::from_records(generated_records(2_000)).expect("dataset");
    let mut controller =
        ChartController::new(NullRenderer::default(), ChartConfig::default(), dataset)
            .expect("controller init");
    controller
        .click_label(Dimension::Obesity)
        .expect("switch dimension");
    controller.advance(400.0);

    c.bench_function("render_frame_mid_transition_2k", |b| {
        b.iter(|| {
            let _ = black_box(&controller)
                .build_render_frame()
                .expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_x_scale_build_10k,
    bench_render_frame_mid_transition_2k
);
criterion_main!(benches);
