//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 100 runs, Human Fighter
//!   cargo run --bin simulate -- -n 500 --race elf     # 500 Elf runs
//!   cargo run --bin simulate -- --seed 42             # Reproducible run

use delve::data::{Class, Race};
use delve::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);
    let save_json = args.iter().any(|a| a == "--json");

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              DELVE BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Build:          {} {}", config.race.name(), config.class.name());
    println!("  Max Actions:    {}", config.max_actions_per_run);
    println!("  Potions:        {}", config.potions_to_stock);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if save_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['-', ' ', '_'], "")
}

fn parse_race(value: &str) -> Option<Race> {
    Race::all()
        .into_iter()
        .find(|r| normalize(r.name()) == normalize(value))
}

fn parse_class(value: &str) -> Option<Class> {
    Class::all()
        .into_iter()
        .find(|c| normalize(c.name()) == normalize(value))
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let next = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(v) = next {
                    config.num_runs = v.parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if let Some(v) = next {
                    config.seed = v.parse().ok();
                    i += 1;
                }
            }
            "-a" | "--actions" => {
                if let Some(v) = next {
                    config.max_actions_per_run = v.parse().unwrap_or(2_000);
                    i += 1;
                }
            }
            "-r" | "--race" => {
                if let Some(race) = next.and_then(|v| parse_race(v)) {
                    config.race = race;
                    i += 1;
                }
            }
            "-c" | "--class" => {
                if let Some(class) = next.and_then(|v| parse_class(v)) {
                    config.class = class;
                    i += 1;
                }
            }
            "-p" | "--potions" => {
                if let Some(v) = next {
                    config.potions_to_stock = v.parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--reckless" => {
                config = SimConfig::reckless(config.num_runs);
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
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
    println!("Delve Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated characters (default: 100)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -a, --actions <A>     Session operations per character (default: 2000)");
    println!("    -r, --race <RACE>     human, dwarf, elf, half-orc, tiefling, dragonborn");
    println!("    -c, --class <CLASS>   barbarian, fighter, ranger, rogue, paladin, gambler");
    println!("    -p, --potions <P>     Potions to keep stocked (default: 3)");
    println!("    --reckless            Never heal or retreat");
    println!("    -v, --verbose         Print every run");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
}
