use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use mdk_roster::{
    roster_from_persisted, Device, DeviceStatus, PersistedDevice, ScanDevice, NO_PORT,
};

/// Known-roster entry in the canonical disconnected shape, as the store
/// adapter would load it.
pub fn offline_device(vid: u16, pid: u16, serial: &str, custom_name: Option<&str>) -> Arc<Device> {
    Arc::new(Device {
        vendor_id: vid,
        product_id: pid,
        serial_number: Some(serial.to_string()),
        port: NO_PORT.to_string(),
        product_name: None,
        board_name: None,
        custom_name: custom_name.map(str::to_string),
        status: DeviceStatus::Disconnected,
    })
}

/// Known-roster entry for a device currently on a port.
pub fn connected_device(
    vid: u16,
    pid: u16,
    serial: &str,
    port: &str,
    custom_name: Option<&str>,
) -> Arc<Device> {
    Arc::new(Device {
        vendor_id: vid,
        product_id: pid,
        serial_number: Some(serial.to_string()),
        port: port.to_string(),
        product_name: Some("Uno".to_string()),
        board_name: Some("Arduino Uno".to_string()),
        custom_name: custom_name.map(str::to_string),
        status: DeviceStatus::Connected,
    })
}

/// Live-scan entry for an Uno on the given port.
pub fn uno_scan(serial: &str, port: &str) -> ScanDevice {
    ScanDevice {
        vendor_id: 0x2341,
        product_id: 0x0043,
        serial_number: Some(serial.to_string()),
        port: port.to_string(),
        product_name: Some("Uno".to_string()),
        board_name: Some("Arduino Uno".to_string()),
    }
}

/// Live-scan entry for a Mega on the given port.
pub fn mega_scan(serial: &str, port: &str) -> ScanDevice {
    ScanDevice {
        vendor_id: 0x2341,
        product_id: 0x0010,
        serial_number: Some(serial.to_string()),
        port: port.to_string(),
        product_name: Some("Mega 2560".to_string()),
        board_name: Some("Arduino Mega 2560".to_string()),
    }
}

/// Read a persisted-roster JSON file (one array of rows) into a startup
/// roster, the way the store collaborator would at launch.
pub fn load_roster_file(path: impl AsRef<Path>) -> Result<Vec<Arc<Device>>> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).with_context(|| format!("read roster file: {path:?}"))?;
    let rows: Vec<PersistedDevice> = serde_json::from_str(&s).context("parse roster json")?;
    Ok(roster_from_persisted(&rows))
}

/// Write persisted rows as a JSON array, the store collaborator's format.
pub fn save_roster_file(path: impl AsRef<Path>, rows: &[PersistedDevice]) -> Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(rows).context("serialize roster rows")?;
    fs::write(path, s).with_context(|| format!("write roster file: {path:?}"))?;
    Ok(())
}
