//! Validate command - check declared lengths of a foreign buffer

use super::read_hex;
use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;
use curve_opdata_cli::ValidationReport;
use curve_opdata_core::{inputs, opdata, OperationKind};
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Check as an operation input of this kind (otherwise as a bare op-data header)
    #[arg(long)]
    kind: Option<OperationKind>,

    /// Read hex from a file instead of the command line
    #[arg(long, conflicts_with = "hex")]
    file: Option<PathBuf>,

    /// Hex buffer to check
    hex: Option<String>,
}

pub fn run(config: &Config, args: ValidateArgs) -> Result<()> {
    let bytes = read_hex(args.hex.as_deref(), args.file.as_deref())?;

    let report = match args.kind {
        Some(kind) => {
            let expected = inputs::expected_input_len(kind, &bytes);
            ValidationReport {
                kind: Some(kind.to_string()),
                length: bytes.len(),
                expected_length: expected.as_ref().ok().copied(),
                valid: inputs::input_length_valid(kind, &bytes),
                reason: match expected {
                    Ok(n) if n != bytes.len() => Some(format!(
                        "declared lengths imply {} bytes, buffer has {}",
                        n,
                        bytes.len()
                    )),
                    Ok(_) => None,
                    Err(e) => Some(e.to_string()),
                },
            }
        }
        None => {
            let header = opdata::parse_header(&bytes);
            ValidationReport {
                kind: None,
                length: bytes.len(),
                expected_length: header.as_ref().ok().map(|h| h.byte_len()),
                valid: opdata::lengths_consistent(&bytes),
                reason: match header {
                    Ok(h) if h.byte_len() != bytes.len() => Some(format!(
                        "header declares {} bytes, buffer has {}",
                        h.byte_len(),
                        bytes.len()
                    )),
                    Ok(_) => None,
                    Err(e) => Some(e.to_string()),
                },
            }
        }
    };

    if config.json_output {
        config.print_json(&report)?;
    } else if !config.quiet {
        let what = report.kind.as_deref().unwrap_or("op-data");
        if report.valid {
            println!(
                "{} Valid {} ({} bytes)",
                style("✓").green().bold(),
                what,
                report.length
            );
        } else {
            println!(
                "{} Invalid {} ({} bytes)",
                style("✗").red().bold(),
                what,
                report.length
            );
            if let Some(reason) = &report.reason {
                println!("  Reason: {}", reason);
            }
        }
    }

    if !report.valid {
        anyhow::bail!(
            "Validation failed: {}",
            report.reason.as_deref().unwrap_or("inconsistent lengths")
        );
    }
    Ok(())
}
