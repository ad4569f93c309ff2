// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sortmerge CLI.
//!
//! Results go to stdout as plain text, always: scripts parse that line.
//! Diagnostics go to stderr and get a splash of color when stderr is a
//! terminal. Respects `NO_COLOR`.

use std::fmt::Display;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

/// Check if colors should be used on stderr (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply multiple styles when `enabled`, otherwise return plain text
pub fn styled(enabled: bool, styles: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Format an error line: `error: <message>`.
pub fn error_line(message: impl Display, colored: bool) -> String {
    format!("{} {}", styled(colored, &[BOLD, RED], "error:"), message)
}

/// Print an error (with its context chain) to stderr.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", error_line(format_args!("{:#}", err), use_colors()));
}
