// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - transcode an entity between wire formats.

use std::path::PathBuf;

use clap::Subcommand;

use crate::common::{
    decode_allowance, decode_instantiate, encode_allowance, encode_instantiate, read_input, Result,
};
use txcodec::Format;

/// Convert between wire formats.
///
/// JSON formats (`amino`, `data`) are read and written as text; binary
/// formats (`proto`, `any`) as hex.
#[derive(Subcommand, Clone, Debug)]
pub enum ConvertCmd {
    /// Convert a fee allowance
    Allowance {
        /// Input format (amino, data, proto, any)
        #[arg(long)]
        from: Format,

        /// Output format (amino, data, proto, any)
        #[arg(long)]
        to: Format,

        /// Input file (stdin if omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Convert a wasm instantiate-contract message
    Instantiate {
        /// Input format (amino, data)
        #[arg(long)]
        from: Format,

        /// Output format (amino, data)
        #[arg(long)]
        to: Format,

        /// Input file (stdin if omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

impl ConvertCmd {
    pub fn run(self) -> Result<()> {
        match self {
            ConvertCmd::Allowance {
                from,
                to,
                input,
                pretty,
            } => cmd_allowance(from, to, input, pretty),
            ConvertCmd::Instantiate {
                from,
                to,
                input,
                pretty,
            } => cmd_instantiate(from, to, input, pretty),
        }
    }
}

fn warn_pretty_ignored(to: Format, pretty: bool) {
    if pretty && !to.is_json() {
        tracing::warn!(%to, "--pretty has no effect on binary output");
    }
}

/// Convert an allowance.
fn cmd_allowance(from: Format, to: Format, input: Option<PathBuf>, pretty: bool) -> Result<()> {
    warn_pretty_ignored(to, pretty);
    let text = read_input(input.as_deref())?;
    let allowance = decode_allowance(from, &text)?;
    tracing::debug!(type_url = allowance.type_url(), %from, %to, "converting allowance");
    println!("{}", encode_allowance(&allowance, to, pretty)?);
    Ok(())
}

/// Convert an instantiate message.
fn cmd_instantiate(from: Format, to: Format, input: Option<PathBuf>, pretty: bool) -> Result<()> {
    warn_pretty_ignored(to, pretty);
    let text = read_input(input.as_deref())?;
    let msg = decode_instantiate(from, &text)?;
    tracing::debug!(code_id = msg.code_id, %from, %to, "converting instantiate message");
    println!("{}", encode_instantiate(&msg, to, pretty)?);
    Ok(())
}
