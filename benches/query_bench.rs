//! Benchmark for `query` and `query_visit` performance
//!
//! Builds a tree over 100k random points in the unit square and runs random
//! queries of varying size (full space, 10%, 1%, and the small 0.02 rectangles).

use quadtree::{Point, Quadtree, Rect};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate a random query rectangle with sides UP TO `max_size`
fn random_rect<R: Rng>(rng: &mut R, max_size: f64) -> Rect {
    Rect::new(
        rng.random_range(0.0..1.0),
        rng.random_range(0.0..1.0),
        rng.random_range(0.0..max_size),
        rng.random_range(0.0..max_size),
    )
}

/// Benchmark collecting queries, reusing one result buffer
fn bench_query(tree: &Quadtree<usize>, areas: &[Rect], label: &str) {
    let mut results = Vec::new();
    let mut total = 0;
    let start = Instant::now();

    for area in areas {
        results.clear();
        tree.query_into(area, &mut results);
        total += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "{} queries {}: {:.2}ms ({} hits)",
        areas.len(),
        label,
        elapsed.as_secs_f64() * 1000.0,
        total
    );
}

/// Benchmark visitor queries that stop after `limit` hits
fn bench_visit(tree: &Quadtree<usize>, areas: &[Rect], limit: usize) {
    let mut total = 0;
    let start = Instant::now();

    for area in areas {
        let mut seen = 0;
        tree.query_visit(area, |_, _| {
            seen += 1;
            seen < limit
        });
        total += seen;
    }

    let elapsed = start.elapsed();
    println!(
        "{} visits stopping at {}: {:.2}ms ({} hits)",
        areas.len(),
        limit,
        elapsed.as_secs_f64() * 1000.0,
        total
    );
}

fn main() {
    println!("Quadtree Query Benchmark");
    println!("========================\n");

    let num_items = 100_000;
    let num_tests = 1_000;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let bounds = Rect::new(0.0, 0.0, 1.0, 1.0);
    println!("Building tree with {} items...", num_items);
    let start = Instant::now();
    let mut tree = Quadtree::create(bounds, 10, 10).unwrap();
    for i in 0..num_items {
        let p = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        tree.insert(i, p).unwrap();
    }
    println!(
        "Tree built in {:.2}ms ({} leaves, depth {})\n",
        start.elapsed().as_secs_f64() * 1000.0,
        tree.leaf_count(),
        tree.depth()
    );

    let full: Vec<Rect> = (0..num_tests).map(|_| bounds).collect();
    let areas_10: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 0.1_f64.sqrt())).collect();
    let areas_1: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 0.1)).collect();
    let areas_small: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 0.02)).collect();

    println!("Running query benchmarks:");
    println!("-----------------------");
    bench_query(&tree, &full, "100%");
    bench_query(&tree, &areas_10, "10%");
    bench_query(&tree, &areas_1, "1%");
    bench_query(&tree, &areas_small, "0.02 side");
    println!();

    println!("Running visitor benchmarks:");
    println!("-----------------------");
    bench_visit(&tree, &full, 1);
    bench_visit(&tree, &full, 100);
    bench_visit(&tree, &areas_10, usize::MAX);
    println!();
}
