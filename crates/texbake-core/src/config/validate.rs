//! Configuration validation.

use image::ImageFormat;

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values are usable.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (key, ext) in [
            ("naming.source_extension", &self.naming.source_extension),
            ("naming.target_extension", &self.naming.target_extension),
        ] {
            if ext.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must not be empty"
                )));
            }
            if ext.starts_with('.') {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must not start with '.' (got {ext:?})"
                )));
            }
        }
        // The rotate step has to decode and re-encode whatever the converter wrote
        let target = &self.naming.target_extension;
        let supported = ImageFormat::from_extension(target)
            .is_some_and(|format| format.reading_enabled() && format.writing_enabled());
        if !supported {
            return Err(ConfigError::ValidationError(format!(
                "naming.target_extension {target:?} is not a raster format this build can rotate"
            )));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {LOG_LEVELS:?}"
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {LOG_FORMATS:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let mut config = Config::default();
        config.naming.target_extension = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("target_extension"));
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let mut config = Config::default();
        config.naming.source_extension = ".dds".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("source_extension"));
    }

    #[test]
    fn test_validate_rejects_target_format_without_codec() {
        let mut config = Config::default();
        config.naming.target_extension = "jpg".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("target_extension"));

        config.naming.target_extension = "tex".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_png_in_any_case() {
        let mut config = Config::default();
        config.naming.target_extension = "PNG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_empty_marker() {
        let mut config = Config::default();
        config.naming.marker_suffix = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
