//! Property tests for push-command construction.

use proptest::prelude::*;

use cfdeploy::config::DeployConfig;
use cfdeploy::deploy::PushCommand;

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._:/@-]{1,24}").unwrap()
}

fn config(app_name: String, docker_image: Option<String>) -> DeployConfig {
    DeployConfig {
        api: "https://api.example.com".to_string(),
        user: "deployer".to_string(),
        password: "hunter2".to_string(),
        org: "acme".to_string(),
        space: "staging".to_string(),
        app_name,
        docker_image,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: With an image present, construction is deterministic and
    /// produces exactly `push <appname> -o <image>`.
    #[test]
    fn property_push_command_shape(app in value(), image in value()) {
        let config = config(app.clone(), Some(image.clone()));

        let command = PushCommand::from_config(&config).expect("image is present");
        prop_assert_eq!(command.args(), &["push".to_string(), app, "-o".to_string(), image]);

        // Idempotent: building again yields a byte-identical command.
        let again = PushCommand::from_config(&config).expect("image is present");
        prop_assert_eq!(command, again);
    }

    /// PROPERTY: Without an image there is never a command.
    #[test]
    fn property_no_image_no_command(app in value()) {
        let config = config(app, None);
        prop_assert!(PushCommand::from_config(&config).is_none());
    }
}
