use cfdeploy::config::FlagOverrides;
use cfdeploy::deploy;
use cfdeploy::ui::ColorWhen;
use clap::Parser;

/// cfdeploy - Cloud Foundry deployment runner for CI pipelines
#[derive(Parser, Debug)]
#[command(name = "cfdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target CF API URL. Overrides CF_DEPLOY_API
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,

    /// CF user. Overrides CF_DEPLOY_USER
    #[arg(long)]
    pub user: Option<String>,

    /// CF password. Overrides CF_DEPLOY_PASSWORD
    #[arg(long)]
    pub password: Option<String>,

    /// CF org. Overrides CF_DEPLOY_ORG
    #[arg(long)]
    pub org: Option<String>,

    /// CF space. Overrides CF_DEPLOY_SPACE
    #[arg(long)]
    pub space: Option<String>,

    /// Name of the application to push. Overrides CF_DEPLOY_APPNAME
    #[arg(long)]
    pub appname: Option<String>,

    /// Docker image to deploy. Overrides CF_DEPLOY_DOCKER_IMAGE
    #[arg(long)]
    pub docker_image: Option<String>,

    /// URL of the cf CLI archive installed when cf is missing
    #[arg(long, value_name = "URL", default_value = deploy::DEFAULT_CLI_URL)]
    pub cli_url: String,

    /// When to use colored output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorWhen,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The deployment value flags, detached from the output/installer
    /// switches, for the config resolver.
    pub fn overrides(&self) -> FlagOverrides {
        FlagOverrides {
            api: self.api.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            org: self.org.clone(),
            space: self.space.clone(),
            app_name: self.appname.clone(),
            docker_image: self.docker_image.clone(),
        }
    }
}
