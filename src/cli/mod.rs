//! # CLI Module
//!
//! Command-line interface for the `jamgen` binary.
//!
//! One command, two positional arguments:
//!
//! ```bash
//! jamgen <PROJECT_NAME> <PROBLEM_COUNT>
//! ```
//!
//! On success the command prints a two-line progress message and exits 0.
//! Missing arguments or a non-numeric count fail inside clap, before any
//! filesystem mutation. Any generation error is propagated to the binary's
//! top-level handler, which reports it on stderr and exits non-zero.

mod commands;


pub use commands::{run_cli, Cli};
