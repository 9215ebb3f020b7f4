//! Device registry: runs scans and keeps the latest result.

use std::net::IpAddr;

use tokio::sync::Mutex;
use tracing::instrument::WithSubscriber;
use tracing::{debug, error, info, trace, Dispatch};

use super::announcement::parse_announcement;
use super::scanner::Scanner;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::types::Device;

/// Collects KDE Connect devices announced on the local network.
///
/// The entry list is locked for the whole scan, bind through drain, so two
/// `scan_once` calls on one registry run back to back rather than racing for
/// the port or clearing each other's results.
pub struct DeviceRegistry {
    config: ScanConfig,
    entries: Mutex<Vec<Device>>,
    dispatch: Dispatch,
}

impl DeviceRegistry {
    /// Create a registry that logs to the caller's current default subscriber.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_dispatch(config, tracing::dispatcher::get_default(Dispatch::clone))
    }

    /// Create a registry whose scans log to `dispatch`.
    pub fn with_dispatch(config: ScanConfig, dispatch: Dispatch) -> Self {
        Self {
            config,
            entries: Mutex::new(Vec::new()),
            dispatch,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run one scan and return the devices found, in arrival order.
    ///
    /// Only a failure to bind is reported as an error. A scan that ends on a
    /// socket error returns whatever was collected before it.
    pub async fn scan_once(&self) -> Result<Vec<Device>, ScanError> {
        self.scan().with_subscriber(self.dispatch.clone()).await
    }

    /// Devices found by the most recent scan.
    pub async fn entries(&self) -> Vec<Device> {
        self.entries.lock().await.clone()
    }

    #[tracing::instrument(name = "kdeconnect_scan", skip(self), fields(port = self.config.port))]
    async fn scan(&self) -> Result<Vec<Device>, ScanError> {
        let mut entries = self.entries.lock().await;
        entries.clear();

        let scanner = Scanner::open(&self.config)?;
        let exit = scanner
            .receive_loop(|addr, data| collect(&mut entries, addr.ip(), data))
            .await;

        debug!(?exit, found = entries.len(), "Scan finished");
        Ok(entries.clone())
    }
}

/// Parse one datagram and append it to `entries` if it is an identity announcement.
fn collect(entries: &mut Vec<Device>, addr: IpAddr, data: &[u8]) {
    match parse_announcement(addr, data) {
        Ok(Some(device)) => {
            info!("KDEConnect, found device {}", device);
            entries.push(device);
        }
        Ok(None) => trace!(%addr, len = data.len(), "Ignoring non-identity datagram"),
        Err(e) => error!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity(name: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "type": "kdeconnect.identity",
            "body": {
                "deviceName": name,
                "deviceType": "laptop",
                "deviceId": format!("id-{}", name),
                "protocolVersion": 7,
                "incomingCapabilities": ["kdeconnect.ping"],
                "outgoingCapabilities": ["kdeconnect.ping"],
                "tcpPort": 1716
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_collect_keeps_only_identities_in_order() {
        let addr: IpAddr = "10.0.0.5".parse().unwrap();
        let mut entries = Vec::new();

        collect(&mut entries, addr, b"{\"type\": \"kdeconnect.ping\", \"body\": {}}");
        collect(&mut entries, addr, &identity("alpha"));
        collect(&mut entries, addr, b"{\"type\": \"kdeconnect.iden");
        collect(&mut entries, addr, &identity("beta"));
        collect(&mut entries, addr, &[0xc3, 0x28]);

        let names: Vec<&str> = entries.iter().map(Device::name).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn test_collect_does_not_deduplicate() {
        let addr: IpAddr = "10.0.0.5".parse().unwrap();
        let mut entries = Vec::new();

        collect(&mut entries, addr, &identity("alpha"));
        collect(&mut entries, addr, &identity("alpha"));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[tokio::test]
    async fn test_entries_empty_before_first_scan() {
        let registry = DeviceRegistry::new(ScanConfig::default());
        assert!(registry.entries().await.is_empty());
        assert_eq!(registry.config().port, 1714);
    }
}
