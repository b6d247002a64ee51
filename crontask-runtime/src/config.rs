use config::{Config, ConfigError, File, FileFormat};
use std::path::Path;

/// Load config from a specific TOML file
pub fn load_toml_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .add_source(config::Environment::with_prefix("CRONTASK").separator("_"))
        .build()
}

/// Load config from a specific YAML file
pub fn load_yaml_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
        .add_source(config::Environment::with_prefix("CRONTASK").separator("_"))
        .build()
}

/// Resolve a schedule placeholder like `${backup.cron}` or
/// `${backup.cron:0 2 * * *}` against the loaded config.
///
/// Plain strings pass through unchanged. A placeholder with a `:default`
/// part falls back to the default when the key is missing.
pub fn resolve_config_value(value: &str, config: &Config) -> Result<String, ConfigError> {
    if value.starts_with("${") && value.ends_with('}') {
        let inner = &value[2..value.len() - 1];

        if let Some((key, default_value)) = inner.split_once(':') {
            match config.get_string(key) {
                Ok(resolved) => Ok(resolved),
                Err(_) => Ok(default_value.to_string()),
            }
        } else {
            config.get_string(inner)
        }
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(key: &str, value: &str) -> Config {
        Config::builder()
            .set_override(key, value)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn plain_value_passes_through() {
        let config = Config::default();
        assert_eq!(
            resolve_config_value("0 2 * * *", &config).unwrap(),
            "0 2 * * *"
        );
    }

    #[test]
    fn placeholder_resolves_from_config() {
        let config = config_with("backup.cron", "30 1 * * *");
        assert_eq!(
            resolve_config_value("${backup.cron}", &config).unwrap(),
            "30 1 * * *"
        );
    }

    #[test]
    fn placeholder_default_applies_when_key_missing() {
        let config = Config::default();
        assert_eq!(
            resolve_config_value("${backup.cron:0 2 * * *}", &config).unwrap(),
            "0 2 * * *"
        );
    }

    #[test]
    fn missing_key_without_default_is_an_error() {
        let config = Config::default();
        assert!(resolve_config_value("${backup.cron}", &config).is_err());
    }
}
