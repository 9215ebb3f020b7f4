//! Type definitions for discovered KDE Connect devices.

use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

use crate::discovery::announcement::IdentityBody;

/// A KDE Connect device seen during a scan.
///
/// Every field is captured from a single identity announcement and never
/// changes afterwards. Serializes to the flat form handed to discovery
/// consumers (`name`, `device_id`, `addr`, `port`, ...).
///
/// The only way to obtain one is [`crate::parse_announcement`]; the hand-off
/// form is write-only:
///
/// ```compile_fail
/// use kdeconnect_discovery_core::Device;
///
/// let device: Device = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    name: String,
    device_id: String,
    addr: IpAddr,
    port: u16,
    protocol_version: u32,
    #[serde(rename = "type")]
    device_type: String,
    #[serde(rename = "incoming_caps")]
    incoming_capabilities: Vec<String>,
    #[serde(rename = "outgoing_caps")]
    outgoing_capabilities: Vec<String>,
}

impl Device {
    pub(crate) fn from_identity(addr: IpAddr, body: IdentityBody) -> Self {
        Self {
            name: body.device_name,
            device_id: body.device_id,
            addr,
            port: body.tcp_port,
            protocol_version: body.protocol_version,
            device_type: body.device_type,
            incoming_capabilities: body.incoming_capabilities,
            outgoing_capabilities: body.outgoing_capabilities,
        }
    }

    /// Name as reported by the device.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw device type tag, e.g. `"phone"` or `"desktop"`.
    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    pub fn kind(&self) -> DeviceKind {
        DeviceKind::from_tag(&self.device_type)
    }

    /// Opaque unique identifier.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn protocol_version(&self) -> u32 {
        self.protocol_version
    }

    /// Packet types the device accepts, in advertised order.
    pub fn incoming_capabilities(&self) -> &[String] {
        &self.incoming_capabilities
    }

    /// Packet types the device sends, in advertised order.
    pub fn outgoing_capabilities(&self) -> &[String] {
        &self.outgoing_capabilities
    }

    pub fn supports_incoming(&self, capability: &str) -> bool {
        self.incoming_capabilities.iter().any(|c| c == capability)
    }

    pub fn supports_outgoing(&self, capability: &str) -> bool {
        self.outgoing_capabilities.iter().any(|c| c == capability)
    }

    /// Address the announcement came from.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// TCP port for connecting to the device.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<KDEConnectDevice {}, id={}, host={}:{}, v={}, type={}>",
            self.name, self.device_id, self.addr, self.port, self.protocol_version, self.device_type
        )
    }
}

/// Device form factor, parsed from the announcement's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Desktop,
    Laptop,
    /// `"phone"` or `"smartphone"`
    Phone,
    Tablet,
    Tv,
    /// Unknown/unrecognized tag
    Unknown,
}

impl DeviceKind {
    /// Parse a type tag from an identity body
    pub fn from_tag(s: &str) -> Self {
        match s {
            "desktop" => DeviceKind::Desktop,
            "laptop" => DeviceKind::Laptop,
            "phone" | "smartphone" => DeviceKind::Phone,
            "tablet" => DeviceKind::Tablet,
            "tv" => DeviceKind::Tv,
            _ => DeviceKind::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceKind::Desktop => "Desktop",
            DeviceKind::Laptop => "Laptop",
            DeviceKind::Phone => "Phone",
            DeviceKind::Tablet => "Tablet",
            DeviceKind::Tv => "TV",
            DeviceKind::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_device() -> Device {
        Device::from_identity(
            "192.168.1.20".parse().unwrap(),
            IdentityBody {
                device_name: "Pixel 7".to_string(),
                device_type: "smartphone".to_string(),
                device_id: "a1b2c3d4".to_string(),
                protocol_version: 7,
                incoming_capabilities: vec![
                    "kdeconnect.ping".to_string(),
                    "kdeconnect.clipboard".to_string(),
                ],
                outgoing_capabilities: vec!["kdeconnect.battery".to_string()],
                tcp_port: 1716,
            },
        )
    }

    #[test]
    fn test_display_matches_repr_form() {
        let device = make_device();
        assert_eq!(
            device.to_string(),
            "<KDEConnectDevice Pixel 7, id=a1b2c3d4, host=192.168.1.20:1716, v=7, type=smartphone>"
        );
    }

    #[test]
    fn test_serialize_handoff_keys() {
        let device = make_device();
        let value = serde_json::to_value(&device).unwrap();

        assert_eq!(value["name"], "Pixel 7");
        assert_eq!(value["device_id"], "a1b2c3d4");
        assert_eq!(value["addr"], "192.168.1.20");
        assert_eq!(value["port"], 1716);
        assert_eq!(value["protocol_version"], 7);
        assert_eq!(value["type"], "smartphone");
        assert_eq!(value["incoming_caps"][1], "kdeconnect.clipboard");
        assert_eq!(value["outgoing_caps"][0], "kdeconnect.battery");
        assert_eq!(value.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_capability_queries() {
        let device = make_device();
        assert!(device.supports_incoming("kdeconnect.ping"));
        assert!(!device.supports_incoming("kdeconnect.battery"));
        assert!(device.supports_outgoing("kdeconnect.battery"));
    }

    #[test]
    fn test_all_device_kinds() {
        let cases = [
            ("desktop", DeviceKind::Desktop),
            ("laptop", DeviceKind::Laptop),
            ("phone", DeviceKind::Phone),
            ("smartphone", DeviceKind::Phone),
            ("tablet", DeviceKind::Tablet),
            ("tv", DeviceKind::Tv),
            ("toaster", DeviceKind::Unknown),
        ];

        for (tag, expected) in cases {
            assert_eq!(DeviceKind::from_tag(tag), expected, "tag: {}", tag);
        }
        assert_eq!(make_device().kind(), DeviceKind::Phone);
    }
}
