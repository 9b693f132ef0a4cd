// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Txcodec CLI
//!
//! Command-line tool for transcoding allowances and contract messages.
//!
//! ## Usage
//!
//! ```sh
//! # Amino JSON to a hex-encoded Any envelope
//! txcodec convert allowance --from amino --to any allowance.json
//!
//! # Normalize an instantiate message read from stdin
//! txcodec convert instantiate --from data --to data --pretty < msg.json
//!
//! # Summarize an allowance
//! txcodec inspect allowance --from any allowance.hex
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertCmd, InspectCmd};
use common::Result;

/// Txcodec - transaction message transcoder
///
/// Convert fee allowances and contract messages between Amino JSON,
/// REST Data JSON, Protobuf and Any encodings.
#[derive(Parser, Clone)]
#[command(name = "txcodec")]
#[command(about = "Transcoder for fee allowances and contract messages", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Convert an entity between wire formats
    #[command(subcommand)]
    Convert(ConvertCmd),

    /// Decode an entity and print a summary
    #[command(subcommand)]
    Inspect(InspectCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
