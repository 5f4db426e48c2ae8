//! Benchmark for `insert` and `retrieve` throughput
//!
//! Indexes 100k randomly distributed boxes in a 1000x1000 world and runs
//! retrieval queries of varying size categories (10%, 1%, 0.01%).

use quadtree::{QuadTree, Rect};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate a random box with size UP TO `max_size`
fn random_box<R: Rng>(rng: &mut R, max_size: f64) -> Rect {
    let width = rng.random_range(0.0..max_size);
    let height = rng.random_range(0.0..max_size);
    let x = rng.random_range(0.0..(1000.0 - max_size));
    let y = rng.random_range(0.0..(1000.0 - max_size));
    Rect::new(x, y, width, height)
}

/// Benchmark retrieval with one query size
fn bench_retrieve(tree: &QuadTree<Rect>, queries: &[Rect], percentage_str: &str) {
    let mut results = Vec::new();
    let mut candidates = 0usize;
    let start = Instant::now();

    for query in queries {
        tree.retrieve_into(query, &mut results);
        candidates += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "{} retrievals {}%: {:>8.2}ms ({} candidates)",
        queries.len(),
        percentage_str,
        elapsed.as_secs_f64() * 1000.0,
        candidates
    );
}

fn main() {
    let num_items = 100_000;
    let num_tests = 10_000;

    let mut rng = rand::rngs::StdRng::seed_from_u64(95_756_739);
    let boxes: Vec<Rect> = (0..num_items).map(|_| random_box(&mut rng, 2.0)).collect();

    let mut tree = match QuadTree::new(Rect::new(0.0, 0.0, 1000.0, 1000.0)) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("cannot build tree: {e}");
            return;
        }
    };

    let start = Instant::now();
    for rect in &boxes {
        tree.insert(*rect);
    }
    println!(
        "insert {} items: {:>8.2}ms ({} nodes, depth {})",
        num_items,
        start.elapsed().as_secs_f64() * 1000.0,
        tree.node_count(),
        tree.depth()
    );

    for (max_size, label) in [((0.1_f64).sqrt() * 1000.0, "10"), (100.0, "1"), (10.0, "0.01")] {
        let queries: Vec<Rect> = (0..num_tests).map(|_| random_box(&mut rng, max_size)).collect();
        bench_retrieve(&tree, &queries, label);
    }

    let start = Instant::now();
    for rect in boxes.iter().step_by(10) {
        tree.remove(rect);
    }
    println!(
        "remove {} items: {:>8.2}ms",
        num_items / 10,
        start.elapsed().as_secs_f64() * 1000.0
    );
}
