//! Scenario: a never-seen device shows up in the live scan.
//!
//! # Invariants under test
//!
//! 1. The newcomer is appended after all known entries, in scan order.
//! 2. It arrives with no alias and `status = connected`.
//! 3. Existing entries keep their positions and their references.
//! 4. A scan device duplicated by key is admitted once.

use std::sync::Arc;

use mdk_roster::{reconcile, Device, DeviceStatus, ScanDevice, NO_PORT};

fn known_offline() -> Arc<Device> {
    Arc::new(Device {
        vendor_id: 9025,
        product_id: 67,
        serial_number: Some("AB1".to_string()),
        port: NO_PORT.to_string(),
        product_name: None,
        board_name: None,
        custom_name: Some("Lab Unit 1".to_string()),
        status: DeviceStatus::Disconnected,
    })
}

fn newcomer(serial: &str, port: &str) -> ScanDevice {
    ScanDevice {
        vendor_id: 9025,
        product_id: 16,
        serial_number: Some(serial.to_string()),
        port: port.to_string(),
        product_name: Some("Mega".to_string()),
        board_name: Some("Arduino Mega 2560".to_string()),
    }
}

#[test]
fn newcomer_appended_with_no_alias() {
    let known = vec![known_offline()];
    let next = reconcile(&known, &[newcomer("NEW1", "COM7")]);

    assert_eq!(next.len(), 2);
    assert!(Arc::ptr_eq(&known[0], &next[0]), "existing entry untouched");

    let added = &next[1];
    assert_eq!(added.serial_number, Some("NEW1".to_string()));
    assert_eq!(added.port, "COM7");
    assert_eq!(added.custom_name, None);
    assert_eq!(added.status, DeviceStatus::Connected);
}

#[test]
fn multiple_newcomers_keep_scan_order() {
    let next = reconcile(
        &[],
        &[
            newcomer("N3", "COM9"),
            newcomer("N1", "COM4"),
            newcomer("N2", "COM5"),
        ],
    );
    let serials: Vec<_> = next
        .iter()
        .map(|d| d.serial_number.clone().unwrap())
        .collect();
    assert_eq!(serials, vec!["N3", "N1", "N2"]);
}

#[test]
fn duplicate_scan_key_admitted_once() {
    let next = reconcile(&[], &[newcomer("N1", "COM4"), newcomer("N1", "COM5")]);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].port, "COM4", "first occurrence wins");
}

#[test]
fn newcomer_fields_normalized_on_admission() {
    let mut raw = newcomer("N1", " COM4 ");
    raw.product_name = Some("  Mega   2560 ".to_string());
    raw.board_name = Some("   ".to_string());

    let next = reconcile(&[], &[raw]);
    assert_eq!(next[0].port, "COM4");
    assert_eq!(next[0].product_name, Some("Mega 2560".to_string()));
    assert_eq!(next[0].board_name, None);
}
