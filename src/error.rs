//! Crate-level error type.

use crate::theme::ThemeError;

/// Errors that stop the application from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The configured theme could not be resolved.
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_theme_errors() {
        let err: AppError = ThemeError::Unknown("neon".to_string()).into();
        assert_eq!(err.to_string(), "Theme error: Unknown theme: neon");
    }

    #[test]
    fn wraps_config_errors() {
        let err: AppError = config::ConfigError::Message("bad port".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("bad port"));
    }
}
