//! Curves command - list resolvable curves

use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;

#[derive(Args)]
pub struct CurvesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run(config: &Config, _args: CurvesArgs) -> Result<()> {
    let summaries = config.registry.summaries()?;

    if config.json_output {
        return config.print_json(&summaries);
    }

    for summary in &summaries {
        if config.quiet {
            println!("{}", summary.name);
            continue;
        }
        let marker = if summary.name == config.default_curve {
            style("*").green().bold()
        } else {
            style(" ")
        };
        println!(
            "{} {} ({:?})",
            marker,
            style(&summary.name).bold(),
            summary.source
        );
        println!(
            "    family {}, twist {}, extension degree {}",
            summary.family, summary.twist, summary.extension_degree
        );
        println!(
            "    field {} bytes, order {} bytes, op-data {} bytes",
            summary.field_len, summary.order_len, summary.opdata_len
        );
        match summary.g2_point_len {
            Some(g2) => println!("    G1 point {} bytes, G2 point {} bytes", summary.g1_point_len, g2),
            None => println!("    G1 point {} bytes, no G2", summary.g1_point_len),
        }
    }

    Ok(())
}
