//! Deployment orchestration
//!
//! One strictly sequential run: install the cf CLI if it is missing, log
//! in, build the push command, push. Each stage prints a progress line
//! before acting, and the first failure aborts the run. There is no retry
//! and no rollback; the caller maps the returned error to exit code 1.

use crate::config::DeployConfig;
use crate::error::{DeployError, DeployResult};
use crate::process;
use crate::ui::{Icon, Style};

/// Name of the Cloud Foundry CLI binary
pub const CF_BINARY: &str = "cf";

/// Default download location for the cf CLI archive
pub const DEFAULT_CLI_URL: &str = "https://cli.run.pivotal.io/stable?release=linux64-binary";

const CLI_ARCHIVE: &str = "cf.tgz";

/// The deployment invocation, built once from the resolved configuration
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushCommand {
    args: Vec<String>,
}

impl PushCommand {
    /// Build the deployment command, or `None` when the configuration has
    /// no docker image to push. A non-image deployment path is an
    /// unsupported configuration, not a silent no-op.
    pub fn from_config(config: &DeployConfig) -> Option<Self> {
        config.docker_image.as_ref().map(|image| Self {
            args: vec![
                "push".to_string(),
                config.app_name.clone(),
                "-o".to_string(),
                image.clone(),
            ],
        })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command line as shown to the user.
    pub fn display(&self) -> String {
        format!("{} {}", CF_BINARY, self.args.join(" "))
    }
}

/// Run the full deployment sequence.
pub fn execute(config: &DeployConfig, cli_url: &str, style: Style) -> DeployResult<()> {
    install_cli(cli_url, style)?;
    login(config)?;
    let command = build_push_command(config, style)?;
    push(&command)?;
    Ok(())
}

/// Fetch and unpack the cf CLI unless a working one is already on PATH.
fn install_cli(cli_url: &str, style: Style) -> DeployResult<()> {
    println!("Downloading and installing the cf CLI...");

    if process::probe(CF_BINARY) {
        println!(
            "{}",
            style.status(Icon::Success, "cf CLI already installed, skipping download")
        );
        return Ok(());
    }

    let download = [
        "-O".to_string(),
        CLI_ARCHIVE.to_string(),
        cli_url.to_string(),
    ];
    let outcome = process::run_streamed("wget", &download);
    if !outcome.is_success() {
        return Err(DeployError::Install(format!(
            "error retrieving cf archive: {}",
            outcome.into_diagnostic()
        )));
    }

    let extract = ["-zxf".to_string(), CLI_ARCHIVE.to_string()];
    let outcome = process::run_streamed("tar", &extract);
    if !outcome.is_success() {
        return Err(DeployError::Install(format!(
            "error unpacking cf archive: {}",
            outcome.into_diagnostic()
        )));
    }

    println!("{}", style.status(Icon::Success, "cf CLI installed"));
    Ok(())
}

fn login(config: &DeployConfig) -> DeployResult<()> {
    println!("Logging in to Cloud Foundry...");

    let outcome = process::run_streamed(CF_BINARY, &login_args(config));
    if !outcome.is_success() {
        return Err(DeployError::Login(outcome.into_diagnostic()));
    }
    Ok(())
}

fn login_args(config: &DeployConfig) -> Vec<String> {
    vec![
        "login".to_string(),
        "-a".to_string(),
        config.api.clone(),
        "-u".to_string(),
        config.user.clone(),
        "-p".to_string(),
        config.password.clone(),
        "-o".to_string(),
        config.org.clone(),
        "-s".to_string(),
        config.space.clone(),
    ]
}

fn build_push_command(config: &DeployConfig, style: Style) -> DeployResult<PushCommand> {
    println!("Generating cf push command...");

    match PushCommand::from_config(config) {
        Some(command) => {
            println!("Generated command: {}", command.display());
            Ok(command)
        }
        None => {
            eprintln!(
                "{}",
                style.status(Icon::Error, "push command not created; resolved configuration:")
            );
            for line in config.summary_lines() {
                eprintln!("  {line}");
            }
            Err(DeployError::Unbuildable {
                app_name: config.app_name.clone(),
            })
        }
    }
}

fn push(command: &PushCommand) -> DeployResult<()> {
    println!("Deploying app...");

    let outcome = process::run_streamed(CF_BINARY, command.args());
    if !outcome.is_success() {
        return Err(DeployError::Push(outcome.into_diagnostic()));
    }
    Ok(())
}
