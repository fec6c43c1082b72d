//! Error handling for the plugmill pipeline

use thiserror::Error;

/// Core error type used throughout plugmill.
///
/// Every variant here is fatal to a run; per-plugin failures are data,
/// not errors (see [`crate::report::PluginStatus`]).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PlugmillError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {message}")]
    Manifest { message: String },

    #[error("Host build failed: {status}")]
    HostBuild { status: String },

    #[error("Environment error: {message}")]
    Environment { message: String },
}

impl PlugmillError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new manifest error
    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }

    /// Create a new host build error from the child's exit status
    pub fn host_build(status: impl Into<String>) -> Self {
        Self::HostBuild {
            status: status.into(),
        }
    }

    /// Create a new environment error
    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type PlugmillResult<T> = Result<T, PlugmillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_build_error_carries_the_exit_status() {
        let err = PlugmillError::host_build("exit status: 101");
        assert_eq!(err.to_string(), "Host build failed: exit status: 101");
    }

    #[test]
    fn io_errors_convert_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PlugmillError::from(io);
        assert!(matches!(err, PlugmillError::Io(_)));
    }
}
