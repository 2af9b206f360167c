use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maze_explorer::{find_path, generate_maze, Coordinate};
use rand::{rngs::StdRng, SeedableRng};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_maze");
    for size in [21usize, 51, 101] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| generate_maze(black_box(size), black_box(size), &mut rng))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");
    for size in [21usize, 51, 101] {
        let grid = generate_maze(size, size, &mut StdRng::seed_from_u64(7))
            .expect("valid dimensions");
        let goal = Coordinate::new(size as i32 - 2, size as i32 - 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| find_path(black_box(grid), Coordinate::new(1, 1), black_box(goal)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_search);
criterion_main!(benches);
