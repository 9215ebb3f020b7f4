//! Scan command implementation.

use colored::*;
use kdeconnect_discovery_core::Device;
use tracing::debug;

use crate::cli::{KindFilter, ScanArgs};
use crate::device::discovery::{discover_devices, DiscoveryOptions};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the scan command
pub async fn run_scan(args: ScanArgs, options: DiscoveryOptions, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    if !json {
        eprintln!(
            "{}",
            format!(
                "Listening for KDE Connect announcements on UDP port {}...",
                options.port
            )
            .dimmed()
        );
    }

    debug!(?options, "Starting scan");
    let devices = discover_devices(&options).await?;
    let devices = filter_devices(devices, args.kind);

    println!("{}", formatter.format_devices(&devices));

    Ok(())
}

fn filter_devices(devices: Vec<Device>, filter: Option<KindFilter>) -> Vec<Device> {
    match filter {
        Some(kind) => devices
            .into_iter()
            .filter(|d| d.kind() == kind.device_kind())
            .collect(),
        None => devices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdeconnect_discovery_core::parse_announcement;
    use serde_json::json;

    fn device(name: &str, device_type: &str) -> Device {
        let data = serde_json::to_vec(&json!({
            "type": "kdeconnect.identity",
            "body": {
                "deviceName": name,
                "deviceType": device_type,
                "deviceId": name,
                "protocolVersion": 7,
                "incomingCapabilities": [],
                "outgoingCapabilities": [],
                "tcpPort": 1716
            }
        }))
        .unwrap();
        parse_announcement("10.0.0.2".parse().unwrap(), &data)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_filter_by_kind() {
        let devices = vec![
            device("pixel", "smartphone"),
            device("tower", "desktop"),
            device("old-phone", "phone"),
        ];

        let phones = filter_devices(devices.clone(), Some(KindFilter::Phone));
        let names: Vec<&str> = phones.iter().map(Device::name).collect();
        assert_eq!(names, ["pixel", "old-phone"]);

        assert_eq!(filter_devices(devices.clone(), None), devices);
        assert!(filter_devices(devices, Some(KindFilter::Tv)).is_empty());
    }
}
