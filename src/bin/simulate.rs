//! Market balance simulator CLI.
//!
//! Runs seeded markets to collapse with no player interference and reports
//! per-asset survival statistics, a tuning aid for the roster table.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                 # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100      # 100 runs
//!   cargo run --bin simulate -- --seed 42   # Reproducible batch

use feld::constants::TOTAL_CYCLES;
use feld::market::{create_market, stability_at};
use std::env;

struct SimConfig {
    num_runs: u64,
    seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: 0,
        }
    }
}

/// Accumulated statistics for one roster slot across all runs.
#[derive(Default)]
struct AssetStats {
    name: &'static str,
    survivals: u64,
    delist_cycle_sum: u64,
    final_price_sum: f64,
}

fn main() {
    let config = parse_args(&env::args().collect::<Vec<_>>());

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 FELD MARKET SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:   {}", config.num_runs);
    println!("  Seed:   {} (run i uses seed + i)", config.seed);
    println!("  Cycles: {}", TOTAL_CYCLES);
    println!();

    let roster_len = create_market(Some(0)).snapshot().len();
    let mut stats: Vec<AssetStats> = (0..roster_len).map(|_| AssetStats::default()).collect();
    let mut fully_dead_runs = 0u64;

    for run in 0..config.num_runs {
        let mut engine = create_market(Some(config.seed + run));
        let mut delist_cycle: Vec<Option<u32>> = vec![None; roster_len];

        while !engine.collapsed() {
            engine.tick();
            for (slot, snap) in engine.snapshot().iter().enumerate() {
                if snap.delisted && delist_cycle[slot].is_none() {
                    delist_cycle[slot] = Some(engine.cycle());
                }
            }
        }
        if engine.all_delisted() {
            fully_dead_runs += 1;
        }

        for (slot, snap) in engine.snapshot().iter().enumerate() {
            let entry = &mut stats[slot];
            entry.name = snap.name;
            match delist_cycle[slot] {
                Some(cycle) => entry.delist_cycle_sum += u64::from(cycle),
                None => {
                    entry.survivals += 1;
                    entry.final_price_sum += snap.price;
                }
            }
        }
    }

    println!(
        "{:<32} {:>9} {:>14} {:>14}",
        "Asset", "Survival", "Avg delist cyc", "Avg final Ⱡ"
    );
    println!("{}", "─".repeat(73));
    for entry in &stats {
        let deaths = config.num_runs - entry.survivals;
        let avg_delist = if deaths > 0 {
            format!("{:>14.1}", entry.delist_cycle_sum as f64 / deaths as f64)
        } else {
            format!("{:>14}", "—")
        };
        let avg_final = if entry.survivals > 0 {
            format!("{:>14.2}", entry.final_price_sum / entry.survivals as f64)
        } else {
            format!("{:>14}", "—")
        };
        println!(
            "{:<32} {:>8.1}% {} {}",
            entry.name,
            entry.survivals as f64 / config.num_runs as f64 * 100.0,
            avg_delist,
            avg_final
        );
    }

    println!();
    println!(
        "Runs ending with every asset delisted: {}/{}",
        fully_dead_runs, config.num_runs
    );

    println!();
    println!("Stability curve:");
    for decile in 0..=10 {
        let cycle = TOTAL_CYCLES * decile / 10;
        let s = stability_at(cycle, TOTAL_CYCLES);
        println!(
            "  cycle {:>3}: {:>5.1}% {}",
            cycle,
            s * 100.0,
            "█".repeat((s * 40.0) as usize)
        );
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Feld Market Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>    Number of simulated runs (default: 1000)");
    println!("    -s, --seed <S>    Base seed; run i uses seed + i (default: 0)");
    println!("    -h, --help        Show this help");
}
