//! Error types for the discovery CLI.
//!
//! CliError wraps ScanError from the shared library and adds CLI-specific variants.

use kdeconnect_discovery_core::error::ScanError;
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const NETWORK_ERROR: i32 = 2;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Scan(_) => exit_codes::NETWORK_ERROR,
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_failure_is_network_error() {
        let err: CliError = ScanError::Bind {
            port: 1714,
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        }
        .into();

        assert_eq!(err.exit_code(), exit_codes::NETWORK_ERROR);
        assert!(err.to_string().contains("Failed to bind UDP port 1714"));
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        let err = CliError::InvalidArgument("--timeout must be greater than zero".to_string());
        assert_eq!(err.exit_code(), exit_codes::INVALID_ARGS);
        assert_eq!(
            err.to_string(),
            "Invalid argument: --timeout must be greater than zero"
        );
    }
}
