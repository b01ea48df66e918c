//! Configuration file tests

#[cfg(test)]
mod tests {
    use invite_relay::config::{Config, LogFormat};
    use invite_relay::core::invite::EnvironmentCode;
    use std::collections::HashMap;

    const EXAMPLE: &str = include_str!("../../config/relay.yaml.example");

    #[test]
    fn test_example_config_is_valid() {
        let config = Config::from_yaml(EXAMPLE).expect("example config parses");

        assert_eq!(config.server().port, 3000);
        assert_eq!(config.processing().environment_code, EnvironmentCode(1));
        assert_eq!(config.logging().format, LogFormat::Text);
    }

    #[test]
    fn test_deployment_overrides_apply_to_example() {
        let env = HashMap::from([
            ("CASE_HOST", "https://case.example.com"),
            ("UP_STAGE", "production"),
            ("ENV_CODE", "3"),
        ]);

        let config = Config::from_yaml(EXAMPLE)
            .and_then(|c| c.with_overrides(|k| env.get(k).map(|v| v.to_string())))
            .expect("overrides apply");

        assert_eq!(config.upstream().base_url, "https://case.example.com");
        assert_eq!(config.processing().environment_code, EnvironmentCode(3));
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.build().version, "production");
    }

    #[tokio::test]
    async fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.yaml")).await.unwrap();

        assert!(config.validate().is_ok());
    }
}
