//! cfdeploy CLI - Cloud Foundry deployment runner for CI pipelines
//!
//! One linear run: resolve configuration from flags and CF_DEPLOY_*
//! environment variables, install the cf CLI when missing, log in, push.
//! Exit code 0 on success, 1 on any failure.

use anyhow::Result;
use clap::Parser;

mod cli;

use cfdeploy::config::DeployConfig;
use cfdeploy::deploy;
use cfdeploy::ui::{Icon, Style};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let style = Style::detect(cli.color);

    let config = match DeployConfig::resolve(&cli.overrides()) {
        Ok(config) => config,
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", style.status(Icon::Error, &error.to_string()));
            }
            std::process::exit(1);
        }
    };

    if cli.verbose > 0 {
        println!("Resolved configuration:");
        for line in config.summary_lines() {
            println!("  {line}");
        }
    }

    deploy::execute(&config, &cli.cli_url, style)?;

    println!("{}", style.status(Icon::Success, "SUCCESS"));
    Ok(())
}
