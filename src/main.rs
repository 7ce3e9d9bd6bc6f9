// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use lexibench::{load_dictionary, BenchConfig, BenchmarkHarness, MembershipIndex, SortedArraySet};

mod cli;
use cli::{Cli, Commands, RunArgs};

fn main() {
    let cli = Cli::parse();
    cli.logging.initialize_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Run(args)) => run_benchmark(&args),
        Some(Commands::Check { dictionary, words }) => {
            let entries = load_dictionary(&dictionary)?;
            let set = SortedArraySet::build(entries)?;
            for word in &words {
                let verdict = if set.contains(word) {
                    "found"
                } else {
                    "not found"
                };
                println!("{}: {}", word, verdict);
            }
            Ok(())
        }
        None => run_benchmark(&RunArgs::default()),
    }
}

fn run_benchmark(args: &RunArgs) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(ref path) => BenchConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BenchConfig::default(),
    };
    args.apply(&mut config);
    log::debug!("config: {:?}", config);

    let report = BenchmarkHarness::new(config)
        .run()
        .context("Benchmark run failed")?;

    if args.json {
        println!("{}", cli::report::render_json(&report)?);
    } else {
        cli::report::print_report(&report);
    }
    Ok(())
}
