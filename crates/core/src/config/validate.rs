use std::collections::HashMap;

use super::{types::Config, ConfigError};

/// Widest indentation accepted for the output document
pub const MAX_INDENT: usize = 16;

/// Validate configuration
/// Currently validates:
/// - Delimiter is a single ASCII character other than a quote or line break
/// - Output indent is at most `MAX_INDENT`
/// - Column labels are non-empty and distinct
/// - Input and output paths differ
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let delimiter = config.input.delimiter;
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
        return Err(ConfigError::ValidationError(format!(
            "input.delimiter must be a single ASCII character, got {:?}",
            delimiter
        )));
    }

    if config.output.indent > MAX_INDENT {
        return Err(ConfigError::ValidationError(format!(
            "output.indent cannot exceed {}",
            MAX_INDENT
        )));
    }

    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (field, label) in config.columns.iter() {
        if label.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "columns.{} cannot be empty",
                field
            )));
        }
        if let Some(previous) = seen.insert(label, field.key()) {
            return Err(ConfigError::ValidationError(format!(
                "columns.{} and columns.{} share the label {:?}",
                previous, field, label
            )));
        }
    }

    if config.input.path == config.output.path {
        return Err(ConfigError::ValidationError(
            "input.path and output.path must differ".to_string(),
        ));
    }

    Ok(())
}

/// The configured delimiter as a byte.
///
/// Only meaningful after [`validate_config`] accepted the config.
pub fn delimiter_byte(config: &Config) -> u8 {
    u8::try_from(config.input.delimiter).unwrap_or(b',')
}
