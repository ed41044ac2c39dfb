//! cfdeploy - Cloud Foundry deployment runner for CI pipelines
//!
//! cfdeploy resolves deployment parameters from flags and environment
//! variables, installs the `cf` CLI when it is missing, logs in to the
//! target API endpoint, and pushes the configured application while
//! relaying the CLI's output to the console.

pub mod config;
pub mod deploy;
pub mod error;
pub mod process;
pub mod ui;

// Re-exports for convenience
pub use config::{ConfigError, DeployConfig, FlagOverrides};
pub use deploy::{PushCommand, DEFAULT_CLI_URL};
pub use error::{DeployError, DeployResult};
pub use process::RunOutcome;
