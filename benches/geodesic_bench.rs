use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use map_measure_tool::{
    haversine_distance, point_along_segment, LatLng, MeasureOptions, MeasureSession,
};
use std::hint::black_box;

/// Deterministische Punktwolke entlang eines diagonalen Kurses.
fn build_vertex_track(count: usize) -> Vec<LatLng> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.01;
            LatLng::new(48.0 + t, 11.0 + t * 0.7)
        })
        .collect()
}

fn bench_haversine(c: &mut Criterion) {
    let track = build_vertex_track(1024);

    c.bench_function("haversine_distance_pairs", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for pair in track.windows(2) {
                total += haversine_distance(black_box(pair[0]), black_box(pair[1]));
            }
            black_box(total)
        })
    });
}

fn bench_label_placement(c: &mut Criterion) {
    let track = build_vertex_track(1024);

    c.bench_function("point_along_segment_midpoints", |b| {
        b.iter(|| {
            let mut placed = 0usize;
            for pair in track.windows(2) {
                let half = haversine_distance(pair[0], pair[1]) / 2.0;
                if point_along_segment(black_box(pair[0]), black_box(pair[1]), black_box(half))
                    .is_some()
                {
                    placed += 1;
                }
            }
            black_box(placed)
        })
    });
}

fn bench_session_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_build");
    let options = MeasureOptions::default();

    for &vertex_count in &[100usize, 1000usize] {
        let track = build_vertex_track(vertex_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(vertex_count),
            &track,
            |b, track| {
                b.iter(|| {
                    let mut session = MeasureSession::new(&options);
                    for &v in track {
                        session.add_vertex(black_box(v));
                    }
                    black_box(session.total_distance_m())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine,
    bench_label_placement,
    bench_session_build
);
criterion_main!(benches);
