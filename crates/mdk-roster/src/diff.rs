use std::collections::HashSet;

use serde::Serialize;

use crate::types::{DeviceKey, ScanDevice};

/// Devices that appeared or vanished between two consecutive scans.
///
/// Keyed by hardware identity, not port: a device the OS re-enumerated onto
/// a different port is neither added nor removed — the reconciler handles
/// port moves.  Useful for the "device plugged/unplugged" notification edge,
/// where only genuine arrivals and departures should fire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScanDiff {
    /// In `next` but not `prev`, in scan order.
    pub added: Vec<ScanDevice>,
    /// In `prev` but not `next`, in scan order.
    pub removed: Vec<ScanDevice>,
}

impl ScanDiff {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Key-indexed set difference between two scan snapshots, O(prev + next).
pub fn diff_scans(prev: &[ScanDevice], next: &[ScanDevice]) -> ScanDiff {
    let prev_keys: HashSet<DeviceKey> = prev.iter().map(ScanDevice::key).collect();
    let next_keys: HashSet<DeviceKey> = next.iter().map(ScanDevice::key).collect();

    ScanDiff {
        added: next
            .iter()
            .filter(|d| !prev_keys.contains(&d.key()))
            .cloned()
            .collect(),
        removed: prev
            .iter()
            .filter(|d| !next_keys.contains(&d.key()))
            .cloned()
            .collect(),
    }
}
