//! Measurement-board recognition among enumerated USB serial hardware.
//!
//! Enumeration surfaces every USB serial adapter on the machine; only a
//! small family of boards is ours.  Official hardware is recognized by
//! vendor id alone.  Boards behind generic USB-serial bridge chips (CH340,
//! CP210x, FTDI) only reveal themselves through their product or serial
//! strings.

use crate::types::ScanDevice;

const OFFICIAL_VID: u16 = 0x2341;
const BRIDGE_VIDS: [u16; 3] = [0x1A86, 0x10C4, 0x0403];

/// `true` if this scan entry is one of our boards rather than an unrelated
/// serial adapter.
pub fn is_recognized_board(device: &ScanDevice) -> bool {
    if device.vendor_id == OFFICIAL_VID {
        return true;
    }
    if BRIDGE_VIDS.contains(&device.vendor_id) {
        let product = device
            .product_name
            .as_deref()
            .unwrap_or("")
            .to_lowercase();
        let serial = device
            .serial_number
            .as_deref()
            .unwrap_or("")
            .to_lowercase();
        return product.contains("arduino") || serial.contains("arduino");
    }
    false
}

/// Human-readable board name for a vid/pid pair.
///
/// Known official pairs map to fixed names; anything else falls back to the
/// product string the hardware reported, or `None` when there is nothing
/// usable.
pub fn board_display_name(vendor_id: u16, product_id: u16, product: Option<&str>) -> Option<String> {
    match (vendor_id, product_id) {
        (0x2341, 0x0043) => Some("Arduino Uno".to_string()),
        (0x2341, 0x0010) => Some("Arduino Mega 2560".to_string()),
        (0x2341, 0x8036) => Some("Arduino Leonardo".to_string()),
        (0x2341, 0x8037) => Some("Arduino Micro".to_string()),
        _ => product.map(str::to_string),
    }
}
