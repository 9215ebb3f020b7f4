//! Error types for KDE Connect discovery.

use std::net::IpAddr;

use thiserror::Error;

/// Errors that stop a scan before it starts listening.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to bind UDP port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Port the failed scan tried to listen on.
    pub fn port(&self) -> u16 {
        match self {
            ScanError::Bind { port, .. } => *port,
        }
    }
}

/// Announcement decoding errors.
///
/// A datagram that is valid JSON but simply not an identity announcement is
/// not an error; see [`crate::parse_announcement`].
#[derive(Debug, Error)]
pub enum AnnouncementError {
    #[error("Malformed announcement from {addr}: {reason}")]
    Malformed { addr: IpAddr, reason: String },
}
