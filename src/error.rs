//! Error types and handling for the `ClimateDiff` application

use thiserror::Error;

/// Main error type for the `ClimateDiff` application
#[derive(Error, Debug)]
pub enum ClimateDiffError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream Open-Meteo communication errors
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl ClimateDiffError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ClimateDiffError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            ClimateDiffError::Upstream { .. } => {
                "Unable to reach the weather service. Please try again later.".to_string()
            }
            ClimateDiffError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            ClimateDiffError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ClimateDiffError::config("missing endpoint URL");
        assert!(matches!(config_err, ClimateDiffError::Config { .. }));

        let upstream_err = ClimateDiffError::upstream("connection failed");
        assert!(matches!(upstream_err, ClimateDiffError::Upstream { .. }));

        let validation_err = ClimateDiffError::validation("missing coordinates");
        assert!(matches!(validation_err, ClimateDiffError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = ClimateDiffError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let upstream_err = ClimateDiffError::upstream("test");
        assert!(upstream_err.user_message().contains("Unable to reach"));

        let validation_err = ClimateDiffError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }
}
