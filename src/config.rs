//! Configuration resolution for cfdeploy
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CF_DEPLOY_*)
//!
//! An unset flag is `None`, which is distinct from an explicitly empty
//! value: `--api ""` resolves to the empty string and fails validation for
//! a required field rather than falling back to the environment.
//!
//! Resolution collects one error per missing required field instead of
//! failing on the first, so a single run reports everything the pipeline
//! forgot to set.

use thiserror::Error;

/// Environment variable consulted when `--api` is unset
pub const ENV_API: &str = "CF_DEPLOY_API";
/// Environment variable consulted when `--user` is unset
pub const ENV_USER: &str = "CF_DEPLOY_USER";
/// Environment variable consulted when `--password` is unset
pub const ENV_PASSWORD: &str = "CF_DEPLOY_PASSWORD";
/// Environment variable consulted when `--org` is unset
pub const ENV_ORG: &str = "CF_DEPLOY_ORG";
/// Environment variable consulted when `--space` is unset
pub const ENV_SPACE: &str = "CF_DEPLOY_SPACE";
/// Environment variable consulted when `--appname` is unset
pub const ENV_APPNAME: &str = "CF_DEPLOY_APPNAME";
/// Environment variable consulted when `--docker-image` is unset (optional)
pub const ENV_DOCKER_IMAGE: &str = "CF_DEPLOY_DOCKER_IMAGE";

const REDACTED: &str = "********";

/// Validation failure recorded while resolving the configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither the flag nor the environment supplied a value
    #[error("{key} not supplied via flag or environment")]
    Missing { key: &'static str },
}

/// Raw flag values as parsed from the command line.
///
/// `None` means the flag was not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub api: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub org: Option<String>,
    pub space: Option<String>,
    pub app_name: Option<String>,
    pub docker_image: Option<String>,
}

/// The effective deployment configuration, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub api: String,
    pub user: String,
    pub password: String,
    pub org: String,
    pub space: String,
    pub app_name: String,
    pub docker_image: Option<String>,
}

impl DeployConfig {
    /// Resolve the configuration from flags and the process environment.
    pub fn resolve(flags: &FlagOverrides) -> Result<Self, Vec<ConfigError>> {
        Self::resolve_with(flags, |key| std::env::var(key).ok())
    }

    /// Resolve against an injectable environment lookup.
    ///
    /// Returns the configuration, or every validation error found.
    pub fn resolve_with(
        flags: &FlagOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Vec<ConfigError>> {
        let mut errors = Vec::new();

        let api = required(&flags.api, ENV_API, &env, &mut errors);
        let user = required(&flags.user, ENV_USER, &env, &mut errors);
        let password = required(&flags.password, ENV_PASSWORD, &env, &mut errors);
        let org = required(&flags.org, ENV_ORG, &env, &mut errors);
        let space = required(&flags.space, ENV_SPACE, &env, &mut errors);
        let app_name = required(&flags.app_name, ENV_APPNAME, &env, &mut errors);
        let docker_image = optional(&flags.docker_image, ENV_DOCKER_IMAGE, &env);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            api,
            user,
            password,
            org,
            space,
            app_name,
            docker_image,
        })
    }

    /// Resolved fields rendered for diagnostics. The password is masked.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("API: {}", self.api),
            format!("User: {}", self.user),
            format!("Password: {}", REDACTED),
            format!("Org: {}", self.org),
            format!("Space: {}", self.space),
            format!("App name: {}", self.app_name),
            format!(
                "Docker image: {}",
                self.docker_image.as_deref().unwrap_or("<none>")
            ),
        ]
    }
}

fn resolve_value(
    flag: &Option<String>,
    key: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> String {
    match flag {
        Some(value) => value.clone(),
        None => env(key).unwrap_or_default(),
    }
}

fn required(
    flag: &Option<String>,
    key: &'static str,
    env: &impl Fn(&str) -> Option<String>,
    errors: &mut Vec<ConfigError>,
) -> String {
    let value = resolve_value(flag, key, env);
    if value.is_empty() {
        errors.push(ConfigError::Missing { key });
    }
    value
}

fn optional(flag: &Option<String>, key: &str, env: &impl Fn(&str) -> Option<String>) -> Option<String> {
    let value = resolve_value(flag, key, env);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
