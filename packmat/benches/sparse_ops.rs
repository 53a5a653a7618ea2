use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packmat::{MatrixProduct, MatrixStore, SparseStore, TriangularStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sparse(rng: &mut StdRng, dimension: usize, density: f64) -> SparseStore<f64> {
    let count = ((dimension * dimension) as f64 * density) as usize;
    let mut store = SparseStore::new(dimension);
    for _ in 0..count {
        let row = rng.gen_range(0..dimension);
        let col = rng.gen_range(0..dimension);
        store.set(rng.gen_range(-1.0..1.0), row, col).unwrap();
    }
    store
}

fn bench_sparse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("sparse");
    for dimension in [32, 128] {
        let a = random_sparse(&mut rng, dimension, 0.05);
        let b = random_sparse(&mut rng, dimension, 0.05);
        group.bench_with_input(BenchmarkId::new("add", dimension), &dimension, |bench, _| {
            bench.iter(|| black_box(a.try_add(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("sub", dimension), &dimension, |bench, _| {
            bench.iter(|| black_box(a.try_sub(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("mul", dimension), &dimension, |bench, _| {
            bench.iter(|| black_box(a.try_mul(&b).unwrap()))
        });
    }
    group.finish();
}

fn bench_triangular(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut t = TriangularStore::<f64>::new(64);
    for i in 0..64 {
        for j in 0..=i {
            t.set(rng.gen_range(-1.0..1.0), i, j).unwrap();
        }
    }
    c.bench_function("triangular_power_8", |bench| {
        bench.iter(|| black_box(t.power(8).unwrap()))
    });
    c.bench_function("triangular_first_norm", |bench| {
        bench.iter(|| black_box(t.first_norm()))
    });
}

criterion_group!(benches, bench_sparse, bench_triangular);
criterion_main!(benches);
