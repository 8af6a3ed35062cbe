//! Store Adapter — the persisted roster row shape and its mapping to and
//! from in-memory rosters.
//!
//! # Purpose
//! The store keeps one row per device ever seen: identity, alias, and a
//! last-seen timestamp.  Ephemeral fields (port, product/board descriptors,
//! status) are never persisted — they are rediscovered by the next scan.  A
//! roster loaded at startup therefore comes up with every device in the
//! canonical disconnected shape, which makes the first post-load reconcile
//! against an unchanged machine a cheap pass.
//!
//! Storage access itself (database, file, whatever the store collaborator
//! uses) stays outside this crate; only the row shape and the pure mapping
//! live here.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_value;
use crate::types::{Device, DeviceKey, DeviceStatus, NO_PORT};

/// One persisted roster row: hardware identity plus the user's alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDevice {
    pub vid: u16,
    pub pid: u16,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub custom_name: Option<String>,
    /// Last time the device was observed connected.  Informational; the
    /// reconciler never reads it.
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Build the startup roster from persisted rows.
///
/// Every row becomes a canonical-disconnected [`Device`]; string fields pass
/// through [`normalize_value`] so legacy rows with stray whitespace load
/// clean.  Duplicate keys collapse to the last row, mirroring the store's
/// upsert-by-key semantics; first-seen position order is kept.
pub fn roster_from_persisted(rows: &[PersistedDevice]) -> Vec<Arc<Device>> {
    let mut order: Vec<DeviceKey> = Vec::with_capacity(rows.len());
    let mut by_key: HashMap<DeviceKey, Arc<Device>> = HashMap::with_capacity(rows.len());

    for row in rows {
        let serial_number = normalize_value(row.serial_number.as_deref());
        let device = Device {
            vendor_id: row.vid,
            product_id: row.pid,
            serial_number,
            port: NO_PORT.to_string(),
            product_name: None,
            board_name: None,
            custom_name: normalize_value(row.custom_name.as_deref()),
            status: DeviceStatus::Disconnected,
        };
        let key = device.key();
        if by_key.insert(key.clone(), Arc::new(device)).is_none() {
            order.push(key);
        }
    }

    order
        .iter()
        .map(|key| Arc::clone(&by_key[key]))
        .collect()
}

/// Write-back shape for the current roster.
///
/// `last_seen` is stamped with the caller-supplied clock for connected
/// devices and omitted for disconnected ones; the store is expected to keep
/// its previous value for rows it already has (COALESCE on upsert).
pub fn roster_to_persisted(roster: &[Arc<Device>], now: DateTime<Utc>) -> Vec<PersistedDevice> {
    roster
        .iter()
        .map(|d| PersistedDevice {
            vid: d.vendor_id,
            pid: d.product_id,
            serial_number: d.serial_number.clone(),
            custom_name: d.custom_name.clone(),
            last_seen: match d.status {
                DeviceStatus::Connected => Some(now),
                DeviceStatus::Disconnected => None,
            },
        })
        .collect()
}
