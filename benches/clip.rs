use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voroplane::clip::{clip_polygon, HalfPlane};
use voroplane::{BoundingBox, Point, Polygon};

fn regular_polygon(sides: usize, radius: f64) -> Polygon {
    let step = std::f64::consts::TAU / sides as f64;
    Polygon::new(
        (0..sides)
            .map(|i| Point::new(radius * (i as f64 * step).cos(), radius * (i as f64 * step).sin()))
            .collect(),
    )
}

fn benchmark_clip(c: &mut Criterion) {
    let square = BoundingBox::new(-1.0, -1.0, 1.0, 1.0).to_polygon();
    let many = regular_polygon(64, 1.0);
    let plane = HalfPlane::bisector(&Point::new(0.0, 0.0), &Point::new(0.8, 0.6));

    c.bench_function("clip_square", |b| {
        b.iter(|| clip_polygon(black_box(square.clone()), black_box(&plane)))
    });

    c.bench_function("clip_64_gon", |b| {
        b.iter(|| clip_polygon(black_box(many.clone()), black_box(&plane)))
    });
}

criterion_group!(benches, benchmark_clip);
criterion_main!(benches);
