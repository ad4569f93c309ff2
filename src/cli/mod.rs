// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sortmerge command-line interface.
//!
//! Two subcommands: `demo` merges the built-in odd/even example and is what
//! runs when no subcommand is given, `merge` merges two integer lists from
//! the command line.

pub mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// Left input of the demo merge.
pub const DEMO_LEFT: [i64; 5] = [1, 3, 5, 7, 9];

/// Right input of the demo merge.
pub const DEMO_RIGHT: [i64; 5] = [2, 4, 6, 8, 10];

#[derive(Parser)]
#[command(
    name = "sortmerge",
    about = "Merge two sorted sequences into one sorted sequence",
    version
)]
pub struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Merge the built-in example sequences [1,3,5,7,9] and [2,4,6,8,10]
    Demo,

    /// Merge two comma-separated integer lists
    Merge {
        /// Left sequence, e.g. "1,3,5" (empty string for an empty sequence)
        #[arg(allow_hyphen_values = true)]
        left: String,

        /// Right sequence, e.g. "2,4,6"
        #[arg(allow_hyphen_values = true)]
        right: String,

        /// Print the result as a JSON array
        #[arg(long)]
        json: bool,

        /// Reject unsorted input instead of merging it anyway
        #[arg(long)]
        check: bool,
    },
}

/// Parse a comma-separated list of integers.
///
/// Whitespace around items is ignored. An empty (or all-blank) string is an
/// empty list.
pub fn parse_list(input: &str) -> Result<Vec<i64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .enumerate()
        .map(|(i, item)| {
            let item = item.trim();
            item.parse::<i64>()
                .with_context(|| format!("item {} ({:?}) is not an integer", i, item))
        })
        .collect()
}

/// Render a merged sequence as a single line.
pub fn render(merged: &[i64], json: bool) -> Result<String> {
    if json {
        serde_json::to_string(merged).context("failed to encode result as JSON")
    } else {
        Ok(format!("{:?}", merged))
    }
}
