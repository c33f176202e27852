use criterion::{criterion_group, criterion_main, Criterion};
use point_index::kdtree::KDTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

const NUM_POINTS: usize = 100_000;
const NUM_QUERIES: usize = 1000;

fn random_positions(count: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
            ]
        })
        .collect()
}

fn construct_kdtree(positions: &[[f64; 3]]) -> KDTree<'_, f64, [[f64; 3]]> {
    KDTree::build(positions).unwrap()
}

fn construct_rstar(positions: &[[f64; 3]]) -> RTree<[f64; 3]> {
    RTree::bulk_load(positions.to_vec())
}

fn linear_scan(positions: &[[f64; 3]], query: [f64; 3]) -> usize {
    let mut best = 0;
    let mut best_dist_sq = f64::INFINITY;
    for (offset, position) in positions.iter().enumerate() {
        let dx = position[0] - query[0];
        let dy = position[1] - query[1];
        let dz = position[2] - query[2];
        let dist_sq = dx * dx + dy * dy + dz * dz;
        if dist_sq < best_dist_sq {
            best = offset;
            best_dist_sq = dist_sq;
        }
    }
    best
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let positions = random_positions(NUM_POINTS, 94);
    let queries = random_positions(NUM_QUERIES, 95);

    c.bench_function("construction (point-index)", |b| {
        b.iter(|| construct_kdtree(&positions))
    });

    c.bench_function("construction (rstar bulk)", |b| {
        b.iter(|| construct_rstar(&positions))
    });

    let tree = construct_kdtree(&positions);
    let rstar_tree = construct_rstar(&positions);

    c.bench_function("nearest (point-index)", |b| {
        b.iter(|| {
            for query in &queries {
                tree.nearest(query[0], query[1], query[2]);
            }
        })
    });

    c.bench_function("nearest (rstar)", |b| {
        b.iter(|| {
            for query in &queries {
                rstar_tree.nearest_neighbor(query);
            }
        })
    });

    c.bench_function("nearest (linear scan)", |b| {
        b.iter(|| {
            for query in &queries {
                linear_scan(&positions, *query);
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
