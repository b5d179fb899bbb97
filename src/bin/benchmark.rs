//! Generation timing, serial vs rayon

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use conway_paint::domain::{GridStore, Rgb, rules::next_color};

const PALETTE: [Rgb; 3] = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];

fn seeded_grid(size: usize) -> GridStore {
    let mut grid = GridStore::new(size);
    grid.randomize(0.3, &PALETTE, &mut StdRng::seed_from_u64(size as u64));
    grid
}

fn benchmark(size: usize, iterations: u32, parallel: bool) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        let rule = |cell, i, cells: &[_]| next_color(cell, i, cells, size);
        if parallel {
            grid.transform_all_parallel(rule);
        } else {
            grid.transform_all(rule);
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Colorized Life Generation Benchmark ===\n");

    let sizes = [75, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, false);
        let parallel_ms = benchmark(size, iterations, true);
        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let ms = benchmark(size, iterations, true);
    println!(
        "\nThroughput at {size}x{size}: {:.1}M cells/sec",
        (size * size) as f64 / (ms / 1000.0) / 1_000_000.0
    );
}
