// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::io::Read as _;
use std::path::Path;

use prost::Message as _;
use tracing_subscriber::EnvFilter;

use txcodec::encoding::{AminoCodec, DataCodec, ProtoCodec};
use txcodec::feegrant::{Allowance, BasicAllowance};
use txcodec::wasm::MsgInstantiateContract;
use txcodec::{CodecError, Format};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// the default is `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read input from a file, or from stdin when the path is absent or `-`.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode a hex string, ignoring surrounding whitespace and a `0x` prefix.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(trimmed).map_err(|e| anyhow::anyhow!("Invalid hex input: {e}"))
}

fn parse_json(input: &str) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(input).map_err(CodecError::from)?)
}

fn render_json(value: &serde_json::Value, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Decode an allowance from input text in the given format.
///
/// Bare protobuf input carries no type information and is read as a
/// basic allowance.
pub fn decode_allowance(format: Format, input: &str) -> Result<Allowance> {
    let allowance = match format {
        Format::Amino => Allowance::from_amino_json(parse_json(input)?)?,
        Format::Data => Allowance::from_data_json(parse_json(input)?)?,
        Format::Proto => BasicAllowance::from_proto_bytes(&decode_hex(input)?)?.into(),
        Format::Any => {
            let any = prost_types::Any::decode(decode_hex(input)?.as_slice())
                .map_err(CodecError::from)?;
            Allowance::unpack_any(&any)?
        }
    };
    Ok(allowance)
}

/// Encode an allowance as output text in the given format.
pub fn encode_allowance(allowance: &Allowance, format: Format, pretty: bool) -> Result<String> {
    match format {
        Format::Amino => render_json(&allowance.to_amino_json()?, pretty),
        Format::Data => render_json(&allowance.to_data_json()?, pretty),
        Format::Proto => Ok(hex::encode(allowance.to_proto_bytes())),
        Format::Any => Ok(hex::encode(allowance.pack_any().encode_to_vec())),
    }
}

fn instantiate_unsupported(format: Format) -> CodecError {
    CodecError::unsupported(format!(
        "{format} encoding for {}",
        MsgInstantiateContract::AMINO_TYPE
    ))
}

/// Decode an instantiate message from input text in the given format.
pub fn decode_instantiate(format: Format, input: &str) -> Result<MsgInstantiateContract> {
    match format {
        Format::Amino => Ok(MsgInstantiateContract::from_amino_json(parse_json(input)?)?),
        Format::Data => Ok(MsgInstantiateContract::from_data_json(parse_json(input)?)?),
        Format::Proto | Format::Any => Err(instantiate_unsupported(format).into()),
    }
}

/// Encode an instantiate message as output text in the given format.
pub fn encode_instantiate(
    msg: &MsgInstantiateContract,
    format: Format,
    pretty: bool,
) -> Result<String> {
    match format {
        Format::Amino => render_json(&msg.to_amino_json()?, pretty),
        Format::Data => render_json(&msg.to_data_json()?, pretty),
        Format::Proto | Format::Any => Err(instantiate_unsupported(format).into()),
    }
}
