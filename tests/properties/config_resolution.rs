//! Property tests for flag/environment resolution.

use std::collections::HashMap;

use proptest::prelude::*;

use cfdeploy::config::{
    ConfigError, DeployConfig, FlagOverrides, ENV_API, ENV_APPNAME, ENV_DOCKER_IMAGE, ENV_ORG,
    ENV_PASSWORD, ENV_SPACE, ENV_USER,
};

const REQUIRED_KEYS: [&str; 6] = [
    ENV_API,
    ENV_USER,
    ENV_PASSWORD,
    ENV_ORG,
    ENV_SPACE,
    ENV_APPNAME,
];

fn value() -> impl Strategy<Value = String> {
    // Deployment parameters are URLs, names, and image references.
    proptest::string::string_regex("[A-Za-z0-9._:/@-]{1,24}").unwrap()
}

fn full_env(values: &[String; 6]) -> HashMap<String, String> {
    REQUIRED_KEYS
        .iter()
        .zip(values.iter())
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A supplied flag always wins over the environment value.
    #[test]
    fn property_flag_beats_environment(
        env_values in proptest::array::uniform6(value()),
        flag_value in value(),
    ) {
        let env = full_env(&env_values);
        let flags = FlagOverrides {
            app_name: Some(flag_value.clone()),
            ..FlagOverrides::default()
        };

        let config = DeployConfig::resolve_with(&flags, |key| env.get(key).cloned())
            .expect("all required fields are supplied");

        prop_assert_eq!(config.app_name, flag_value);
    }

    /// PROPERTY: Resolution with a fully populated environment succeeds and
    /// carries the environment values through unchanged.
    #[test]
    fn property_environment_round_trips(
        env_values in proptest::array::uniform6(value()),
        image in proptest::option::of(value()),
    ) {
        let mut env = full_env(&env_values);
        if let Some(image) = &image {
            env.insert(ENV_DOCKER_IMAGE.to_string(), image.clone());
        }

        let config = DeployConfig::resolve_with(&FlagOverrides::default(), |key| env.get(key).cloned())
            .expect("all required fields are supplied");

        prop_assert_eq!(&config.api, &env_values[0]);
        prop_assert_eq!(&config.space, &env_values[4]);
        prop_assert_eq!(config.docker_image, image);
    }

    /// PROPERTY: Resolution never panics, and every required field that is
    /// absent produces exactly one error naming its environment key.
    #[test]
    fn property_missing_fields_map_to_errors(
        present in proptest::array::uniform6(any::<bool>()),
        env_values in proptest::array::uniform6(value()),
    ) {
        let mut env = HashMap::new();
        let mut missing = Vec::new();
        for i in 0..REQUIRED_KEYS.len() {
            if present[i] {
                env.insert(REQUIRED_KEYS[i].to_string(), env_values[i].clone());
            } else {
                missing.push(REQUIRED_KEYS[i]);
            }
        }

        match DeployConfig::resolve_with(&FlagOverrides::default(), |key| env.get(key).cloned()) {
            Ok(_) => prop_assert!(missing.is_empty()),
            Err(errors) => {
                prop_assert_eq!(errors.len(), missing.len());
                for key in missing {
                    prop_assert!(errors.iter().any(|e| matches!(e, ConfigError::Missing { key: k } if *k == key)), "missing key {} not reported", key);
                }
            }
        }
    }
}
