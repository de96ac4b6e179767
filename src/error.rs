//! Error types and handling for the Costa Rica Climate API

use thiserror::Error;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream forecast provider errors
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// I/O operation errors (binding the listener, serving)
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GatewayError {
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

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Config { message } => {
                format!("Configuration error: {message}. Check crclimate.toml and environment variables.")
            }
            GatewayError::Upstream { .. } => {
                "Unable to reach the forecast provider. Please check your internet connection."
                    .to_string()
            }
            GatewayError::Io { .. } => {
                "Server I/O failed. Is the port already in use?".to_string()
            }
        }
    }
}

/// Text shown to the operator when startup fails: the friendly message for
/// typed gateway errors, the full error chain otherwise.
#[must_use]
pub fn startup_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<GatewayError>() {
        Some(gateway) => gateway.user_message(),
        None => format!("{err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = GatewayError::config("bad port");
        assert!(matches!(config_err, GatewayError::Config { .. }));

        let upstream_err = GatewayError::upstream("status 503");
        assert!(matches!(upstream_err, GatewayError::Upstream { .. }));
        assert_eq!(upstream_err.to_string(), "Upstream error: status 503");
    }

    #[test]
    fn test_user_messages() {
        let config_err = GatewayError::config("bad port");
        assert!(config_err.user_message().contains("bad port"));

        let upstream_err = GatewayError::upstream("test");
        assert!(upstream_err.user_message().contains("forecast provider"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let gateway_err: GatewayError = io_err.into();
        assert!(matches!(gateway_err, GatewayError::Io { .. }));
    }

    #[test]
    fn test_startup_message_for_wrapped_config_error() {
        let err = anyhow::Error::from(GatewayError::config("Invalid log level 'loud'"))
            .context("Failed to load configuration");
        let message = startup_message(&err);
        assert!(message.starts_with("Configuration error: Invalid log level 'loud'"));
    }

    #[test]
    fn test_startup_message_for_untyped_error() {
        let err = anyhow::anyhow!("tls backend unavailable").context("Failed to create HTTP client");
        assert_eq!(
            startup_message(&err),
            "Failed to create HTTP client: tls backend unavailable"
        );
    }
}
