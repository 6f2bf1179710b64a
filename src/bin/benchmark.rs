//! Throughput comparison of the serial and row-parallel advance

use std::time::Instant;

use term_life::Simulation;

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut sim = Simulation::with_seed(size, size, 0.25, 1).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        sim.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut sim = Simulation::with_seed(size, size, 0.25, 1).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        sim.advance_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Advance Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
