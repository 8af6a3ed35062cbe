use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::normalize::{normalize_string, normalize_value};
use crate::types::{Device, DeviceKey, DeviceStatus, ScanDevice, NO_PORT};

fn norm(s: Option<&str>) -> String {
    normalize_string(s.unwrap_or(""))
}

fn normalized_live_port(live: &ScanDevice) -> String {
    normalize_value(Some(&live.port)).unwrap_or_else(|| NO_PORT.to_string())
}

/// Matched device: the known record's key also appears in the live scan.
///
/// Decision order, first match wins:
/// - identity stable + port stable: the original entry, untouched
/// - identity stable, port moved: shallow copy with the new port
/// - identity not stable (reconnect after disconnect, or reflashed
///   descriptors): rebuilt from the live record, alias copied forward
fn merge_matched(known: &Arc<Device>, live: &ScanDevice) -> Arc<Device> {
    let port = normalized_live_port(live);

    let identity_stable = known.status == DeviceStatus::Connected
        && norm(known.product_name.as_deref()) == norm(live.product_name.as_deref())
        && norm(known.board_name.as_deref()) == norm(live.board_name.as_deref());
    let port_stable = known.port == port;

    if identity_stable && port_stable {
        return Arc::clone(known);
    }

    if identity_stable {
        let mut updated = Device::clone(known);
        updated.port = port;
        return Arc::new(updated);
    }

    Arc::new(Device {
        vendor_id: live.vendor_id,
        product_id: live.product_id,
        serial_number: live.serial_number.clone(),
        port,
        product_name: normalize_value(live.product_name.as_deref()),
        board_name: normalize_value(live.board_name.as_deref()),
        // The one field the scan can never supply. An alias survives any
        // identity reset as long as the vid/pid/serial key still matches.
        custom_name: known.custom_name.clone(),
        status: DeviceStatus::Connected,
    })
}

/// Known device absent from the live scan: mark disconnected, unless it is
/// already in the canonical disconnected shape, in which case the original
/// entry is returned untouched.
fn mark_disconnected(known: &Arc<Device>) -> Arc<Device> {
    if known.is_canonical_disconnected() {
        return Arc::clone(known);
    }

    let mut updated = Device::clone(known);
    updated.port = NO_PORT.to_string();
    updated.status = DeviceStatus::Disconnected;
    updated.product_name = None;
    updated.board_name = None;
    Arc::new(updated)
}

/// Never-seen live device: admitted with no alias.
fn admit_new(live: &ScanDevice) -> Arc<Device> {
    Arc::new(Device {
        vendor_id: live.vendor_id,
        product_id: live.product_id,
        serial_number: live.serial_number.clone(),
        port: normalized_live_port(live),
        product_name: normalize_value(live.product_name.as_deref()),
        board_name: normalize_value(live.board_name.as_deref()),
        custom_name: None,
        status: DeviceStatus::Connected,
    })
}

/// Reconcile the known roster against one live hardware scan.
///
/// Every key in `known` appears exactly once in the output, in its original
/// position; live devices with unseen keys are appended in scan order.
/// Entries the scan does not change keep their `Arc` identity, so callers
/// can detect a no-op pass with [`is_same_roster`] and skip downstream
/// publish/persist work.
///
/// O(known + live): the live scan is indexed by [`DeviceKey`] up front.
/// Should the scanner ever emit two entries with the same key, the first
/// occurrence wins and the rest are ignored.
pub fn reconcile(known: &[Arc<Device>], live: &[ScanDevice]) -> Vec<Arc<Device>> {
    let mut live_by_key: HashMap<DeviceKey, &ScanDevice> = HashMap::with_capacity(live.len());
    for d in live {
        live_by_key.entry(d.key()).or_insert(d);
    }

    let mut next: Vec<Arc<Device>> = Vec::with_capacity(known.len() + live.len());
    let mut seen: HashSet<DeviceKey> = HashSet::with_capacity(known.len() + live.len());

    for entry in known {
        let key = entry.key();
        match live_by_key.get(&key) {
            Some(live_dev) => next.push(merge_matched(entry, live_dev)),
            None => next.push(mark_disconnected(entry)),
        }
        seen.insert(key);
    }

    for d in live {
        if seen.insert(d.key()) {
            next.push(admit_new(d));
        }
    }

    next
}

/// List-wise identity check: same length and every element is the *same*
/// allocation as before (`Arc::ptr_eq`, not value equality).
///
/// Value equality is deliberately not used here — downstream consumers skip
/// re-render/persist work on pointer-unchanged state, and a rebuilt-but-equal
/// list would defeat that.
pub fn is_same_roster(prev: &[Arc<Device>], next: &[Arc<Device>]) -> bool {
    prev.len() == next.len()
        && prev
            .iter()
            .zip(next.iter())
            .all(|(a, b)| Arc::ptr_eq(a, b))
}

/// Outcome of a reconciliation pass, with the no-op case short-circuited.
#[derive(Clone, Debug)]
pub enum ReconcileOutcome {
    /// The scan reproduced the roster exactly; nothing to publish.
    Unchanged,
    /// At least one entry changed; this is the next roster.
    Updated(Vec<Arc<Device>>),
}

impl ReconcileOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ReconcileOutcome::Unchanged)
    }

    /// The new roster, if the pass produced one.
    pub fn into_roster(self) -> Option<Vec<Arc<Device>>> {
        match self {
            ReconcileOutcome::Unchanged => None,
            ReconcileOutcome::Updated(roster) => Some(roster),
        }
    }
}

/// [`reconcile`] plus the list-wise no-op check.
///
/// This is the entry point callers should fold scan events through: on
/// [`ReconcileOutcome::Unchanged`] the previous roster value is still
/// current and no store write or publish is needed.
pub fn reconcile_outcome(known: &[Arc<Device>], live: &[ScanDevice]) -> ReconcileOutcome {
    let next = reconcile(known, live);
    if is_same_roster(known, &next) {
        ReconcileOutcome::Unchanged
    } else {
        ReconcileOutcome::Updated(next)
    }
}
