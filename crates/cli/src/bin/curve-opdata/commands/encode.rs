//! Encode command - print a curve's op-data header

use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;
use curve_opdata_cli::EncodeReport;
use curve_opdata_core::debug::{hex_prefixed, point_to_hex};
use curve_opdata_core::OpData;

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Curve name (built-in or from the config file)
    #[arg(long, env = "CURVE_OPDATA_CURVE")]
    curve: Option<String>,
}

pub fn run(config: &Config, args: EncodeArgs) -> Result<()> {
    let (name, params) = config.curve(args.curve.as_deref())?;
    let opdata = OpData::encode(&params)?;
    let layout = opdata.layout();

    let report = EncodeReport {
        curve: name,
        length: opdata.len(),
        field_len: layout.field_len,
        order_len: layout.order_len,
        extension_degree: layout.extension_degree,
        opdata: opdata.as_buffer().to_hex(),
    };

    if config.json_output {
        return config.print_json(&report);
    }
    if config.quiet {
        println!("{}", report.opdata);
        return Ok(());
    }

    println!(
        "{} Op-data for {} ({} bytes)",
        style("→").cyan().bold(),
        style(&report.curve).bold(),
        report.length
    );
    println!("  Field: {} bytes", report.field_len);
    println!("  Order: {} bytes", report.order_len);
    println!("  Extension degree: {}", report.extension_degree);

    let g1_start = layout.header_len() - layout.g2_coordinate_count() * layout.field_len
        - layout.g1_point_len();
    let g1 = &opdata.as_buffer()[g1_start..g1_start + layout.g1_point_len()];
    println!("  G1 generator: {}", point_to_hex(g1));
    println!();
    println!("{}", hex_prefixed(opdata.as_buffer()));

    Ok(())
}
