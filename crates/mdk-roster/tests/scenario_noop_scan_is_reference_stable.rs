//! Scenario: a scan that exactly reproduces the current state is a no-op.
//!
//! # Invariants under test
//!
//! 1. A connected entry whose descriptors and port match the scan is
//!    returned as the *same* allocation.
//! 2. A canonical-disconnected entry absent from the scan is returned as the
//!    same allocation.
//! 3. The list-wise check reports the whole pass as unchanged, and the
//!    outcome entry point short-circuits.

use std::sync::Arc;

use mdk_roster::{
    is_same_roster, reconcile, reconcile_outcome, Device, DeviceStatus, ReconcileOutcome,
    ScanDevice, NO_PORT,
};

fn connected_entry() -> Arc<Device> {
    Arc::new(Device {
        vendor_id: 9025,
        product_id: 67,
        serial_number: Some("AB1".to_string()),
        port: "COM3".to_string(),
        product_name: Some("Uno".to_string()),
        board_name: Some("Arduino Uno".to_string()),
        custom_name: Some("Lab Unit 1".to_string()),
        status: DeviceStatus::Connected,
    })
}

fn offline_entry() -> Arc<Device> {
    Arc::new(Device {
        vendor_id: 9025,
        product_id: 16,
        serial_number: Some("XY9".to_string()),
        port: NO_PORT.to_string(),
        product_name: None,
        board_name: None,
        custom_name: Some("Ward 3 Mega".to_string()),
        status: DeviceStatus::Disconnected,
    })
}

fn matching_scan() -> Vec<ScanDevice> {
    vec![ScanDevice {
        vendor_id: 9025,
        product_id: 67,
        serial_number: Some("AB1".to_string()),
        port: "COM3".to_string(),
        product_name: Some("Uno".to_string()),
        board_name: Some("Arduino Uno".to_string()),
    }]
}

#[test]
fn stable_scan_returns_every_original_reference() {
    let known = vec![connected_entry(), offline_entry()];
    let next = reconcile(&known, &matching_scan());

    assert_eq!(next.len(), 2);
    assert!(Arc::ptr_eq(&known[0], &next[0]), "stable connected entry must not be copied");
    assert!(Arc::ptr_eq(&known[1], &next[1]), "settled offline entry must not be copied");
    assert!(is_same_roster(&known, &next));
}

#[test]
fn outcome_short_circuits_on_noop() {
    let known = vec![connected_entry(), offline_entry()];
    assert!(reconcile_outcome(&known, &matching_scan()).is_unchanged());
}

#[test]
fn scan_descriptor_whitespace_still_counts_as_stable() {
    let known = vec![connected_entry()];
    let mut scan = matching_scan();
    scan[0].product_name = Some("  Uno ".to_string());
    scan[0].board_name = Some("Arduino\u{a0}Uno".to_string());
    scan[0].port = " COM3 ".to_string();

    let outcome = reconcile_outcome(&known, &scan);
    assert!(
        outcome.is_unchanged(),
        "whitespace pollution must not read as an identity change"
    );
}

#[test]
fn value_equal_copy_is_not_reference_equal() {
    // Guard the contract direction: is_same_roster is pointer identity,
    // not value equality.
    let known = vec![connected_entry()];
    let copy = vec![Arc::new(Device::clone(&known[0]))];
    assert!(!is_same_roster(&known, &copy));
    assert_eq!(*known[0], *copy[0]);
}

#[test]
fn same_reconcile_twice_is_idempotent() {
    let known = vec![connected_entry(), offline_entry()];
    let once = reconcile(&known, &matching_scan());
    let twice = reconcile(&once, &matching_scan());
    assert!(is_same_roster(&once, &twice));
}

#[test]
fn unchanged_outcome_yields_no_roster() {
    let known = vec![connected_entry()];
    let outcome = reconcile_outcome(&known, &matching_scan());
    assert!(matches!(outcome, ReconcileOutcome::Unchanged));
    assert!(outcome.into_roster().is_none());
}
