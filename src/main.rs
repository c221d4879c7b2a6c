//! Pipeline simulator CLI.
//!
//! Loads a machine-code image, runs the pipelined machine to completion,
//! and reports the final architectural state and run statistics.
//!
//! # Usage
//!
//! ```text
//! pipesim <image> [--config sim.toml] [--trace] [--json]
//! ```
//!
//! The image is a text file with one decimal-encoded instruction word per
//! line. A fault (out-of-range access, cycle cap) is reported on stderr and
//! exits nonzero.

use clap::Parser;
use std::{fs, process};

use pipesim::config::Config;
use pipesim::sim::{loader, trace};
use pipesim::Simulator;

/// Command-line arguments for the pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Cycle-accurate 5-stage pipeline simulator")]
struct Args {
    /// Machine-code image file (one decimal word per line).
    file: String,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Print the full architectural state before every cycle.
    #[arg(long)]
    trace: bool,

    /// Print the final state as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let config: Config = match args.config {
        Some(ref path) => {
            let content = fs::read_to_string(path).expect("Failed to read config");
            toml::from_str(&content).expect("Failed to parse config")
        }
        None => Config::default(),
    };

    let image = loader::load_image(&args.file);

    let mut sim = Simulator::new(&image, &config);
    sim.trace |= args.trace;

    if let Err(fault) = sim.run() {
        eprintln!("\n[!] FAULT: {}", fault);
        process::exit(1);
    }

    if args.json {
        println!("{}", trace::json_summary(&sim.state));
    } else {
        trace::print_final(&sim.state);
        sim.stats.print();
    }
}
