// CLI entry point for the hole filler replay tool.
//
// Loads a recorded scenario, runs the hole filler over every tick, and
// prints what the placer would be holding after each one. Set `RUST_LOG`
// (e.g. `RUST_LOG=hole_filler_sim=trace`) to see per-hole decisions.
// See `scenario.rs` for the file format.
//
// Usage:
//   hole_filler_replay <SCENARIO.json> [OPTIONS]
//     --json                  Print the tick reports as JSON

use std::path::PathBuf;

use anyhow::Result;
use hole_filler_replay::scenario::{Scenario, TickReport, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Args {
    scenario: PathBuf,
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = parse_args();

    let scenario = Scenario::load(&args.scenario)?;
    info!(
        path = %args.scenario.display(),
        ticks = scenario.ticks.len(),
        "loaded scenario"
    );

    let reports = replay(&scenario)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", format_report(report));
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching.
fn parse_args() -> Args {
    let mut scenario = None;
    let mut json = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
            other => {
                if scenario.replace(PathBuf::from(other)).is_some() {
                    eprintln!("Only one scenario file may be given");
                    std::process::exit(1);
                }
            }
        }
    }

    let Some(scenario) = scenario else {
        print_usage();
        std::process::exit(1);
    };
    Args { scenario, json }
}

fn print_usage() {
    eprintln!("Usage: hole_filler_replay <SCENARIO.json> [--json]");
}

fn format_report(report: &TickReport) -> String {
    let cells: Vec<String> = report.pending.iter().map(ToString::to_string).collect();
    format!(
        "tick {:>4}: {:?} -> [{}]",
        report.tick,
        report.outcome,
        cells.join(", ")
    )
}
