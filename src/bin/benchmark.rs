//! Tick timing for both pipelines on randomized grids

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use liquid_sim::{Grid, Pipeline, Simulation};

fn benchmark_pipeline(pipeline: Pipeline, columns: usize, rows: usize, iterations: u32) -> f64 {
    let mut grid = Grid::new(columns, rows);
    grid.randomize(&mut StdRng::seed_from_u64(42));
    let mut sim = Simulation::new(grid, pipeline);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Liquid Simulation Tick Benchmark ===\n");

    let sizes = [(45, 30), (100, 100), (250, 250), (500, 500), (1000, 1000)];
    let iterations = 20;

    println!("{:>12} {:>14} {:>14} {:>14}", "Size", "Standard", "WithPressure", "Mcells/s");
    println!("{:-<58}", "");

    for (columns, rows) in sizes {
        let standard_ms = benchmark_pipeline(Pipeline::Standard, columns, rows, iterations);
        let pressure_ms = benchmark_pipeline(Pipeline::WithPressure, columns, rows, iterations);
        let cells = (columns * rows) as f64;

        println!(
            "{:>12} {:>12.3}ms {:>12.3}ms {:>14.1}",
            format!("{}x{}", columns, rows),
            standard_ms,
            pressure_ms,
            cells / (standard_ms / 1000.0) / 1_000_000.0
        );
    }
}
