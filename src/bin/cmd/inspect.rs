// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - decode an entity and print a summary.

use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;

use crate::common::{decode_allowance, decode_instantiate, read_input, Result};
use txcodec::encoding::format_timestamp;
use txcodec::feegrant::Allowance;
use txcodec::{AccAddress, Format};

/// Decode and summarize.
#[derive(Subcommand, Clone, Debug)]
pub enum InspectCmd {
    /// Inspect a fee allowance
    Allowance {
        /// Input format (amino, data, proto, any)
        #[arg(long)]
        from: Format,

        /// Input file (stdin if omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Inspect a wasm instantiate-contract message
    Instantiate {
        /// Input format (amino, data)
        #[arg(long)]
        from: Format,

        /// Input file (stdin if omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        match self {
            InspectCmd::Allowance { from, input, json } => cmd_allowance(from, input, json),
            InspectCmd::Instantiate { from, input, json } => cmd_instantiate(from, input, json),
        }
    }
}

#[derive(Serialize)]
struct AllowanceSummary {
    type_url: String,
    spend_limit: Option<String>,
    expiration: Option<String>,
}

fn cmd_allowance(from: Format, input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(input.as_deref())?;
    let allowance = decode_allowance(from, &text)?;

    let summary = match &allowance {
        Allowance::Basic(basic) => AllowanceSummary {
            type_url: allowance.type_url().to_string(),
            spend_limit: basic.spend_limit().map(|coins| coins.to_string()),
            expiration: basic.expiration().map(format_timestamp),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Allowance:");
    println!("  Type:        {}", summary.type_url);
    println!(
        "  Spend limit: {}",
        summary.spend_limit.as_deref().unwrap_or("unbounded")
    );
    println!(
        "  Expiration:  {}",
        summary.expiration.as_deref().unwrap_or("never")
    );
    Ok(())
}

#[derive(Serialize)]
struct InstantiateSummary {
    creator: String,
    creator_valid: bool,
    admin: String,
    admin_valid: bool,
    code_id: u64,
    init_coins: String,
    migratable: bool,
    init_msg: serde_json::Value,
}

fn cmd_instantiate(from: Format, input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(input.as_deref())?;
    let msg = decode_instantiate(from, &text)?;

    for (role, address) in [("creator", &msg.creator), ("admin", &msg.admin)] {
        if !address.is_valid() {
            tracing::warn!(role, address = %address, "address does not look like an account address");
        }
    }

    let summary = InstantiateSummary {
        creator: msg.creator.to_string(),
        creator_valid: AccAddress::validate(msg.creator.as_str()),
        admin: msg.admin.to_string(),
        admin_valid: AccAddress::validate(msg.admin.as_str()),
        code_id: msg.code_id,
        init_coins: msg.init_coins.to_string(),
        migratable: msg.migratable,
        init_msg: msg.init_msg.clone(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("MsgInstantiateContract:");
    println!("  Creator:    {}", summary.creator);
    println!("  Admin:      {}", summary.admin);
    println!("  Code ID:    {}", summary.code_id);
    println!("  Init coins: {}", summary.init_coins);
    println!("  Migratable: {}", summary.migratable);
    println!("  Init msg:   {}", serde_json::to_string(&summary.init_msg)?);
    Ok(())
}
