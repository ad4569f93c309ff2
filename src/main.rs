// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use sortmerge::{merge, try_merge};
use tracing::{debug, Level};

mod cli;
use cli::{display, parse_list, render, Cli, Commands, DEMO_LEFT, DEMO_RIGHT};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command.unwrap_or(Commands::Demo)) {
        display::print_error(&e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries nothing but the result line.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Demo => {
            debug!(left = ?DEMO_LEFT, right = ?DEMO_RIGHT, "running demo merge");
            println!("{}", render(&merge(&DEMO_LEFT, &DEMO_RIGHT), false)?);
        }
        Commands::Merge {
            left,
            right,
            json,
            check,
        } => {
            let left = parse_list(&left).context("invalid LEFT sequence")?;
            let right = parse_list(&right).context("invalid RIGHT sequence")?;
            debug!(left_len = left.len(), right_len = right.len(), check, "merging");

            let merged = if check {
                try_merge(&left, &right)?
            } else {
                merge(&left, &right)
            };
            println!("{}", render(&merged, json)?);
        }
    }
    Ok(())
}
