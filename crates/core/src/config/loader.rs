use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `TICKETS_OUTPUT__INDENT=4`
pub const ENV_PREFIX: &str = "TICKETS_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    base_figment()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from defaults and environment variables only
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    base_figment()
        .merge(env_provider())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn env_provider() -> Env {
    // `__` separates nesting levels so keys like `image_url` survive
    Env::prefixed(ENV_PREFIX).split("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[output]
indent = 0
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.output.indent, 0);
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let toml = r#"
[output]
indent = "wide"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[input]
path = "sheet.csv"

[output]
format = "import"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.input.path.to_str().unwrap(), "sheet.csv");
        assert_eq!(config.output.format, OutputFormat::Import);
        // untouched sections keep defaults
        assert_eq!(config.output.path.to_str().unwrap(), "tickets.json");
        assert_eq!(config.input.delimiter, ',');
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "tickets.toml",
                r#"
[output]
indent = 2
"#,
            )?;
            jail.set_env("TICKETS_OUTPUT__INDENT", "8");
            jail.set_env("TICKETS_COLUMNS__IMAGE_URL", "Image");

            let config = load_config(Path::new("tickets.toml")).expect("config loads");
            assert_eq!(config.output.indent, 8);
            assert_eq!(config.columns.image_url, "Image");
            Ok(())
        });
    }
}
