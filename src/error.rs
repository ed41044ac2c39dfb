//! Error types for cfdeploy
//!
//! Uses `thiserror` for library errors. Configuration errors are collected
//! separately (see [`crate::config::ConfigError`]) so a run can report every
//! missing field at once; the errors here are fail-fast stage failures.

use thiserror::Error;

/// Result type alias for deployment operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Stage failures during a deployment run
#[derive(Error, Debug)]
pub enum DeployError {
    /// Fetching or unpacking the cf CLI archive failed
    #[error("unable to install the cf CLI: {0}")]
    Install(String),

    /// `cf login` failed or could not be launched
    #[error("unable to log in to Cloud Foundry: {0}")]
    Login(String),

    /// No deployable command could be built from the resolved configuration
    #[error("no deployable command for app '{app_name}' - no docker image supplied")]
    Unbuildable { app_name: String },

    /// `cf push` failed or could not be launched
    #[error("deploy failed: {0}")]
    Push(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_install() {
        let err = DeployError::Install("error retrieving cf archive: exited with code 4".to_string());
        assert_eq!(
            err.to_string(),
            "unable to install the cf CLI: error retrieving cf archive: exited with code 4"
        );
    }

    #[test]
    fn test_error_display_unbuildable() {
        let err = DeployError::Unbuildable {
            app_name: "myapp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no deployable command for app 'myapp' - no docker image supplied"
        );
    }

    #[test]
    fn test_error_display_login() {
        let err = DeployError::Login("exited with code 1".to_string());
        assert_eq!(
            err.to_string(),
            "unable to log in to Cloud Foundry: exited with code 1"
        );
    }
}
