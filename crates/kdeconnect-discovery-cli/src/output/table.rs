//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};
use kdeconnect_discovery_core::Device;

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn capability_summary(device: &Device) -> String {
        format!(
            "{} in / {} out",
            device.incoming_capabilities().len(),
            device.outgoing_capabilities().len()
        )
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_devices(&self, devices: &[Device]) -> String {
        if devices.is_empty() {
            return "No devices found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Name", "Type", "ID", "Address", "Protocol", "Capabilities"]);

        for device in devices {
            table.add_row(vec![
                Cell::new(device.name()),
                Cell::new(device.kind().display_name()),
                Cell::new(device.device_id()),
                Cell::new(format!("{}:{}", device.addr(), device.port())),
                Cell::new(device.protocol_version()),
                Cell::new(Self::capability_summary(device)),
            ]);
        }

        format!(
            "{}\n\nFound {} device(s)",
            table,
            devices.len().to_string().bold()
        )
    }
}
