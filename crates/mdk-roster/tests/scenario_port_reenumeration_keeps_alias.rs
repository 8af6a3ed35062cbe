//! Scenario: the OS re-enumerates a connected device onto another port.
//!
//! # Invariants under test
//!
//! 1. Identity-stable + port-changed takes the shallow-copy path:
//!    only `port` differs from the known record.
//! 2. The alias and every other field carry over from the known record.
//! 3. The result is a new allocation (the roster did change), and the pass
//!    reports updated.

use std::sync::Arc;

use mdk_roster::{reconcile, reconcile_outcome, Device, DeviceStatus, ScanDevice};

fn known_on_com3() -> Arc<Device> {
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

fn scan_on(port: &str) -> Vec<ScanDevice> {
    vec![ScanDevice {
        vendor_id: 9025,
        product_id: 67,
        serial_number: Some("AB1".to_string()),
        port: port.to_string(),
        product_name: Some("Uno".to_string()),
        board_name: Some("Arduino Uno".to_string()),
    }]
}

#[test]
fn port_move_updates_port_and_nothing_else() {
    let known = vec![known_on_com3()];
    let next = reconcile(&known, &scan_on("COM5"));

    assert_eq!(next.len(), 1);
    assert!(!Arc::ptr_eq(&known[0], &next[0]), "port did change");

    let moved = &next[0];
    assert_eq!(moved.port, "COM5");
    assert_eq!(moved.custom_name, Some("Lab Unit 1".to_string()));
    assert_eq!(moved.product_name, Some("Uno".to_string()));
    assert_eq!(moved.board_name, Some("Arduino Uno".to_string()));
    assert_eq!(moved.status, DeviceStatus::Connected);
}

#[test]
fn port_move_reports_updated() {
    let known = vec![known_on_com3()];
    assert!(!reconcile_outcome(&known, &scan_on("COM5")).is_unchanged());
}

#[test]
fn scan_port_is_normalized_before_comparison() {
    // " COM5 " and "COM5" are the same port; two scans reporting them must
    // converge after the first pass.
    let known = vec![known_on_com3()];
    let moved = reconcile(&known, &scan_on(" COM5 "));
    assert_eq!(moved[0].port, "COM5");

    let settled = reconcile(&moved, &scan_on("COM5"));
    assert!(Arc::ptr_eq(&moved[0], &settled[0]));
}
