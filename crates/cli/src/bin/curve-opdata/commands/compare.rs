//! Compare command - check an engine result against the expected result

use crate::config::Config;
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use curve_opdata_cli::CompareReport;
use curve_opdata_core::results::{expected_result_len, pairing_result, result_matches};
use curve_opdata_core::{ByteBuffer, OperationKind};

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Operation kind that produced the result
    kind: OperationKind,

    /// Curve name (built-in or from the config file)
    #[arg(long, env = "CURVE_OPDATA_CURVE")]
    curve: Option<String>,

    /// Result returned by the engine (hex)
    actual: String,

    /// Expected result (hex)
    expected: String,
}

pub fn run(config: &Config, args: CompareArgs) -> Result<()> {
    let (name, params) = config.curve(args.curve.as_deref())?;
    let layout = params.layout();

    let actual = ByteBuffer::from_hex(&args.actual).context("Invalid actual result hex")?;
    let expected = ByteBuffer::from_hex(&args.expected).context("Invalid expected result hex")?;

    let report = CompareReport {
        curve: name,
        kind: args.kind.to_string(),
        expected_length: expected_result_len(args.kind, &layout),
        actual_length: actual.len(),
        matches: result_matches(args.kind, &layout, &actual, &expected),
        pairing: match args.kind {
            OperationKind::Pairing => pairing_result(&actual),
            _ => None,
        },
    };

    if config.json_output {
        config.print_json(&report)?;
    } else if !config.quiet {
        if report.matches {
            println!(
                "{} {} result matches ({} bytes)",
                style("✓").green().bold(),
                report.kind,
                report.actual_length
            );
        } else {
            println!(
                "{} {} result does not match",
                style("✗").red().bold(),
                report.kind
            );
            println!(
                "  Expected width: {} bytes, actual: {} bytes, expected value: {} bytes",
                report.expected_length,
                report.actual_length,
                expected.len()
            );
        }
        if let Some(verdict) = report.pairing {
            println!("  Pairing check: {}", verdict);
        }
    }

    if !report.matches {
        anyhow::bail!("Result mismatch for {}", report.kind);
    }
    Ok(())
}
