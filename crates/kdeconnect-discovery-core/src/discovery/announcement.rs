//! Identity announcement parsing.

use std::net::IpAddr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::AnnouncementError;
use crate::types::Device;

/// Packet type carried by identity announcements.
pub const KDECONNECT_ID: &str = "kdeconnect.identity";

/// The `body` object of an identity announcement.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdentityBody {
    pub(crate) device_name: String,
    pub(crate) device_type: String,
    pub(crate) device_id: String,
    pub(crate) protocol_version: u32,
    pub(crate) incoming_capabilities: Vec<String>,
    pub(crate) outgoing_capabilities: Vec<String>,
    pub(crate) tcp_port: u16,
}

/// Parse one datagram into a [`Device`].
///
/// Returns `Ok(None)` for anything that decodes as JSON but is not an identity
/// announcement: not an object, no `"type"`, another `"type"`, or no `"body"`.
/// Bytes that are not UTF-8 JSON, and identity bodies that are missing
/// fields or carry the wrong types, are [`AnnouncementError::Malformed`].
pub fn parse_announcement(addr: IpAddr, data: &[u8]) -> Result<Option<Device>, AnnouncementError> {
    let text = std::str::from_utf8(data).map_err(|e| malformed(addr, e))?;
    let mut packet: Value = serde_json::from_str(text).map_err(|e| malformed(addr, e))?;

    let Some(object) = packet.as_object_mut() else {
        return Ok(None);
    };

    if object.get("type").and_then(Value::as_str) != Some(KDECONNECT_ID) {
        return Ok(None);
    }

    let Some(body) = object.remove("body") else {
        return Ok(None);
    };

    let body: IdentityBody = serde_json::from_value(body).map_err(|e| malformed(addr, e))?;

    Ok(Some(Device::from_identity(addr, body)))
}

fn malformed(addr: IpAddr, reason: impl std::fmt::Display) -> AnnouncementError {
    AnnouncementError::Malformed {
        addr,
        reason: reason.to_string(),
    }
}
