use serde::{Deserialize, Serialize};

/// Port sentinel for a device with no communication path (disconnected).
pub const NO_PORT: &str = "N/A";

/// Connection status, derived from presence in the latest live scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Connected,
    Disconnected,
}

/// Composite hardware identity: `(vendor_id, product_id, serial-or-empty)`.
///
/// Port is never part of identity — the OS may reassign it on every
/// reconnect.  A device that exposes no serial number keys as `""`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceKey {
    pub vendor_id: u16,
    pub product_id: u16,
    pub serial_number: String,
}

impl DeviceKey {
    pub fn new(vendor_id: u16, product_id: u16, serial_number: impl Into<String>) -> Self {
        Self {
            vendor_id,
            product_id,
            serial_number: serial_number.into(),
        }
    }
}

impl std::fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04x}:{:04x}:{}",
            self.vendor_id, self.product_id, self.serial_number
        )
    }
}

/// One physical hardware unit, known or currently connected.
///
/// `custom_name` is the user-assigned alias.  It is persistent: the
/// reconciliation engine only ever copies it forward from the known record,
/// never sets or clears it.  The separate rename operation
/// ([`set_custom_name`](crate::set_custom_name)) is the one write surface
/// for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub vendor_id: u16,
    pub product_id: u16,
    pub serial_number: Option<String>,
    /// Current OS-assigned path; [`NO_PORT`] when disconnected.
    pub port: String,
    pub product_name: Option<String>,
    pub board_name: Option<String>,
    pub custom_name: Option<String>,
    pub status: DeviceStatus,
}

impl Device {
    /// Hardware identity key for roster matching.
    pub fn key(&self) -> DeviceKey {
        DeviceKey::new(
            self.vendor_id,
            self.product_id,
            self.serial_number.as_deref().unwrap_or(""),
        )
    }

    /// The shape every unplugged device settles into: disconnected, no port,
    /// ephemeral descriptors cleared.  A device already in this shape is
    /// returned as-is by reconciliation, keeping its identity stable for
    /// no-op detection.
    pub fn is_canonical_disconnected(&self) -> bool {
        self.status == DeviceStatus::Disconnected
            && self.port == NO_PORT
            && self.product_name.is_none()
            && self.board_name.is_none()
    }
}

/// A device as reported by one hardware enumeration pass.
///
/// Deliberately narrower than [`Device`]: the scanner knows nothing about
/// aliases and everything it reports is connected, so neither field exists
/// here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanDevice {
    pub vendor_id: u16,
    pub product_id: u16,
    pub serial_number: Option<String>,
    pub port: String,
    pub product_name: Option<String>,
    pub board_name: Option<String>,
}

impl ScanDevice {
    pub fn key(&self) -> DeviceKey {
        DeviceKey::new(
            self.vendor_id,
            self.product_id,
            self.serial_number.as_deref().unwrap_or(""),
        )
    }
}
