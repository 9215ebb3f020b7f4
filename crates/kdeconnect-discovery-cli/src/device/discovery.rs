//! UDP discovery for KDE Connect devices.
//!
//! Thin wrapper around core's registry with CLI-specific options.

use std::time::Duration;

use kdeconnect_discovery_core::{Device, DeviceRegistry, ScanConfig};

use crate::cli::Cli;
use crate::error::CliError;

/// Discovery options
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Port to listen on
    pub port: u16,
    /// Per-read receive timeout
    pub timeout: Duration,
    /// Receive buffer size
    pub buffer_size: usize,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        let config = ScanConfig::default();
        Self {
            port: config.port,
            timeout: config.receive_timeout,
            buffer_size: config.buffer_size,
        }
    }
}

impl DiscoveryOptions {
    /// Build options from the global flags, rejecting values that would
    /// make the scan meaningless.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.timeout == 0 {
            return Err(CliError::InvalidArgument(
                "--timeout must be greater than zero".to_string(),
            ));
        }

        if cli.buffer_size == 0 {
            return Err(CliError::InvalidArgument(
                "--buffer-size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            port: cli.port,
            timeout: Duration::from_millis(cli.timeout),
            buffer_size: cli.buffer_size,
        })
    }

    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::default()
            .with_port(self.port)
            .with_receive_timeout(self.timeout)
            .with_buffer_size(self.buffer_size)
    }
}

/// Discover devices on the network.
///
/// Delegates to core's `DeviceRegistry::scan_once`.
pub async fn discover_devices(options: &DiscoveryOptions) -> Result<Vec<Device>, CliError> {
    let registry = DeviceRegistry::new(options.scan_config());
    let devices = registry.scan_once().await?;
    Ok(devices)
}
