// scripts/benchmark.rs
use anyhow::{Context, Result};
use payoff_sim::scenario::{
    evaluate, evaluate_batch, BoxParams, ScenarioConfig, SpreadParams, StrategyParams,
};
use payoff_sim::{telemetry, OptionType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::Command;
use std::time::Instant;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Command::new("rustc")
                .arg("--version")
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown Rust version".to_string()),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    scenarios: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    mean_cost: f64,
}

/// Random but well-formed scenario; strikes straddle spot, premiums in [0, 5)
fn random_scenario(rng: &mut StdRng) -> ScenarioConfig {
    let spot = rng.gen_range(10.0..500.0);
    let width = spot * rng.gen_range(0.02..0.2);
    let strike1 = spot - width / 2.0;
    let strike2 = spot + width / 2.0;
    let option_type = if rng.gen_bool(0.5) {
        OptionType::Call
    } else {
        OptionType::Put
    };
    let spread = SpreadParams {
        strike1,
        strike2,
        premium1: rng.gen_range(0.0..5.0),
        premium2: rng.gen_range(0.0..5.0),
        option_type,
    };

    let strategy = match rng.gen_range(0..3) {
        0 => StrategyParams::BullSpread(spread),
        1 => StrategyParams::BearSpread(spread),
        _ => StrategyParams::BoxSpread(BoxParams {
            strike1,
            strike2,
            premium1: rng.gen_range(0.0..5.0),
            premium2: rng.gen_range(0.0..5.0),
            premium3: rng.gen_range(0.0..5.0),
            premium4: rng.gen_range(0.0..5.0),
        }),
    };

    ScenarioConfig {
        spot,
        annual_volatility_pct: rng.gen_range(5.0..80.0),
        days_to_maturity: rng.gen_range(1..365),
        strategy,
    }
}

fn run_benchmarks(seed: u64) -> Result<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for &count in &[1_000usize, 10_000, 100_000] {
        println!("Running benchmarks with {} scenarios...", count);
        let scenarios: Vec<ScenarioConfig> = (0..count).map(|_| random_scenario(&mut rng)).collect();

        let started = Instant::now();
        let mut cost_sum = 0.0;
        for cfg in &scenarios {
            cost_sum += evaluate(cfg)?.cost;
        }
        let time_ms = started.elapsed().as_secs_f64() * 1000.0;
        results.push(BenchmarkResult {
            name: format!("Sequential ({}k)", count / 1000),
            scenarios: count,
            time_ms,
            throughput_per_sec: count as f64 / (time_ms / 1000.0),
            mean_cost: cost_sum / count as f64,
        });

        let started = Instant::now();
        let reports = evaluate_batch(&scenarios)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        let time_ms = started.elapsed().as_secs_f64() * 1000.0;
        let cost_sum: f64 = reports.iter().map(|r| r.cost).sum();
        results.push(BenchmarkResult {
            name: format!("Parallel batch ({}k)", count / 1000),
            scenarios: count,
            time_ms,
            throughput_per_sec: count as f64 / (time_ms / 1000.0),
            mean_cost: cost_sum / count as f64,
        });
    }

    Ok(results)
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) -> Result<()> {
    let mut file = BufWriter::new(File::create(filename).context("creating benchmark CSV")?);

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Scenarios,Time_ms,Throughput_per_sec,Mean_Cost")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6}",
            result.name, result.scenarios, result.time_ms, result.throughput_per_sec, result.mean_cost
        )?;
    }
    file.flush()?;

    println!("Results written to {}", filename);
    Ok(())
}

fn main() -> Result<()> {
    telemetry::init_tracing("payoff_sim=warn");

    println!("payoff-sim Scenario Benchmark");
    println!("=============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_benchmarks(42)?;

    println!("\n{:=<72}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<72}", "");
    println!(
        "{:<26} {:>10} {:>12} {:>12} {:>10}",
        "Benchmark", "Scenarios", "Time (ms)", "Per second", "Mean cost"
    );
    println!("{:-<72}", "");
    for result in &results {
        println!(
            "{:<26} {:>10} {:>12.2} {:>12.0} {:>10.4}",
            result.name, result.scenarios, result.time_ms, result.throughput_per_sec, result.mean_cost
        );
    }
    println!("{:=<72}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename)?;

    println!("\nBenchmark complete!");
    println!("Run: cargo run --bin benchmark --release");
    Ok(())
}
