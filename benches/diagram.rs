use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voroplane::sites::random_sites;
use voroplane::{BoundingBox, DiagramConfig, VoronoiDiagram};

const SIZES: [usize; 3] = [100, 250, 500];

fn benchmark_diagram(c: &mut Criterion) {
    let bounds = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
    let mut group = c.benchmark_group("build_diagram");
    group.sample_size(10);

    for &n in &SIZES {
        let sites = random_sites(n, &bounds, 123456789);

        group.bench_with_input(BenchmarkId::new("parallel", n), &sites, |b, sites| {
            let config = DiagramConfig::default().with_parallel(true);
            b.iter(|| VoronoiDiagram::build_with_config(black_box(sites), config))
        });

        group.bench_with_input(BenchmarkId::new("sequential", n), &sites, |b, sites| {
            let config = DiagramConfig::default().with_parallel(false);
            b.iter(|| VoronoiDiagram::build_with_config(black_box(sites), config))
        });
    }
    group.finish();
}

fn benchmark_relax(c: &mut Criterion) {
    let bounds = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
    let sites = random_sites(250, &bounds, 123456789);
    let diagram = VoronoiDiagram::build(&sites).unwrap();

    c.bench_function("relaxed_sites_250", |b| {
        b.iter(|| black_box(diagram.relaxed_sites()))
    });
}

criterion_group!(benches, benchmark_diagram, benchmark_relax);
criterion_main!(benches);
