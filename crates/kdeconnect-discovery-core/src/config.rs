//! Scan configuration.

use std::time::Duration;

/// UDP port KDE Connect devices broadcast their identity on.
pub const DISCOVERY_PORT: u16 = 1714;

/// Per-read wait before a scan is considered finished.
pub const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest datagram read in one go; longer ones are truncated.
pub const MAX_DATAGRAM_SIZE: usize = 1024;

/// Settings for one discovery scan.
///
/// The timeout applies to each read separately: every datagram that arrives
/// restarts the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Port to listen on
    pub port: u16,
    /// How long a single read waits for a datagram
    pub receive_timeout: Duration,
    /// Receive buffer size in bytes
    pub buffer_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            port: DISCOVERY_PORT,
            receive_timeout: DISCOVERY_TIMEOUT,
            buffer_size: MAX_DATAGRAM_SIZE,
        }
    }
}

impl ScanConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_receive_timeout(mut self, timeout: Duration) -> Self {
        self.receive_timeout = timeout;
        self
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.port, 1714);
        assert_eq!(config.receive_timeout, Duration::from_secs(5));
        assert_eq!(config.buffer_size, 1024);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScanConfig::default()
            .with_port(41714)
            .with_receive_timeout(Duration::from_millis(250))
            .with_buffer_size(4096);

        assert_eq!(config.port, 41714);
        assert_eq!(config.receive_timeout, Duration::from_millis(250));
        assert_eq!(config.buffer_size, 4096);
    }
}
