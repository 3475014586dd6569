//! Build command - assemble an operation input from hex operands

use crate::config::Config;
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use curve_opdata_cli::{parse_operands, BuildReport};
use curve_opdata_core::{inputs, OperationKind};

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Operation kind (g1-add, g1-mul, g1-multiexp, g2-add, g2-mul, g2-multiexp, pairing)
    kind: OperationKind,

    /// Curve name (built-in or from the config file)
    #[arg(long, env = "CURVE_OPDATA_CURVE")]
    curve: Option<String>,

    /// Declared pair count for multiexp and pairing (defaults to the number of pairs given)
    #[arg(long)]
    pairs: Option<usize>,

    /// Hex operands: two for add and mul; point/scalar or G1/G2 pairs otherwise
    #[arg(required = true)]
    operands: Vec<String>,
}

pub fn run(config: &Config, args: BuildArgs) -> Result<()> {
    let (name, params) = config.curve(args.curve.as_deref())?;

    if args.pairs.is_some() && !args.kind.has_pair_count() {
        log::warn!("--pairs is ignored for {}", args.kind);
    }

    let operands = parse_operands(args.kind, &args.operands, args.pairs)?;
    let input = inputs::build(args.kind, &params, &operands)
        .with_context(|| format!("Failed to build {} input for {}", args.kind, name))?;

    let report = BuildReport {
        curve: name,
        kind: args.kind.to_string(),
        length: input.len(),
        opdata_len: input.opdata().len(),
        input: input.as_buffer().to_hex(),
    };

    if config.json_output {
        return config.print_json(&report);
    }
    if config.quiet {
        println!("{}", report.input);
        return Ok(());
    }

    println!(
        "{} Built {} input for {}",
        style("✓").green().bold(),
        report.kind,
        style(&report.curve).bold()
    );
    println!("  Length: {} bytes", report.length);
    println!("  Op-data: {} bytes", report.opdata_len);
    println!("  Operands: {} bytes", report.length - report.opdata_len);
    println!();
    println!("0x{}", report.input);

    Ok(())
}
