//! Scan Adapter — deserialize the scanner wire payload and normalize to
//! internal types.
//!
//! # Purpose
//! The native scanner emits its enumeration results as a JSON list, one
//! object per detected device, with descriptor strings exactly as the OS
//! reported them — inconsistent whitespace and all.  This module defines the
//! raw (wire-level) struct mirroring that payload and provides the
//! normalization into the [`ScanDevice`] values the reconciliation engine
//! consumes.
//!
//! # Design constraints
//! - Pure, deterministic conversion. No IO, no serial access, no async.
//! - All normalization errors are surfaced as [`ScanAdapterError`]; callers
//!   decide whether to drop the scan or skip the entry.
//! - Unknown payload fields are silently ignored so scanner-side additions
//!   don't break deserialization.

use serde::Deserialize;

use crate::boards::board_display_name;
use crate::normalize::normalize_value;
use crate::types::ScanDevice;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// All errors that can occur during scan normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAdapterError {
    /// A scan entry carried no usable port.  Connected hardware always has
    /// one; an entry without it is malformed.
    EmptyPort {
        /// Position of the entry in the raw payload.
        index: usize,
    },
}

impl std::fmt::Display for ScanAdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPort { index } => {
                write!(f, "scan entry {index} has no usable port")
            }
        }
    }
}

impl std::error::Error for ScanAdapterError {}

// ---------------------------------------------------------------------------
// Raw wire-level struct  (scanner JSON → this → ScanDevice)
// ---------------------------------------------------------------------------

/// Wire-level device entry as emitted by the scanner.
///
/// Field names follow the scanner payload convention (`vid`/`pid` rather
/// than the internal `vendor_id`/`product_id`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawScanDevice {
    /// USB vendor id.  Always present for enumerated USB hardware.
    pub vid: u16,
    /// USB product id.  Always present for enumerated USB hardware.
    pub pid: u16,
    /// Device serial, when the hardware exposes one.
    #[serde(default)]
    pub serial_number: Option<String>,
    /// OS-assigned path (`COM3`, `/dev/ttyUSB0`, …).
    #[serde(default)]
    pub port: Option<String>,
    /// Product descriptor as reported by the hardware.
    #[serde(default)]
    pub product: Option<String>,
    /// Board classification, when the scanner already resolved one.
    #[serde(default)]
    pub board_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

fn normalize_device(index: usize, raw: &RawScanDevice) -> Result<ScanDevice, ScanAdapterError> {
    let port = normalize_value(raw.port.as_deref()).ok_or(ScanAdapterError::EmptyPort { index })?;

    let product_name = normalize_value(raw.product.as_deref());
    // Scanner-resolved board name wins; otherwise classify from vid/pid.
    let board_name = normalize_value(raw.board_name.as_deref())
        .or_else(|| board_display_name(raw.vid, raw.pid, product_name.as_deref()));

    Ok(ScanDevice {
        vendor_id: raw.vid,
        product_id: raw.pid,
        serial_number: normalize_value(raw.serial_number.as_deref()),
        port,
        product_name,
        board_name,
    })
}

/// Normalize a raw scan payload into [`ScanDevice`] values.
///
/// # Errors
/// Returns the first [`ScanAdapterError`] encountered.  Entries are
/// processed in payload order.  For a best-effort variant that skips
/// malformed entries, see [`normalize_scan_lenient`].
pub fn normalize_scan(raw: &[RawScanDevice]) -> Result<Vec<ScanDevice>, ScanAdapterError> {
    raw.iter()
        .enumerate()
        .map(|(i, d)| normalize_device(i, d))
        .collect()
}

/// Lenient variant: skip malformed entries rather than failing.
///
/// The caller receives both the usable devices and the errors for any
/// skipped entries, for logging.
pub fn normalize_scan_lenient(raw: &[RawScanDevice]) -> (Vec<ScanDevice>, Vec<ScanAdapterError>) {
    let mut devices = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();

    for (i, d) in raw.iter().enumerate() {
        match normalize_device(i, d) {
            Ok(dev) => devices.push(dev),
            Err(e) => errors.push(e),
        }
    }

    (devices, errors)
}

/// Deserialize a scanner JSON payload directly into [`ScanDevice`] values.
///
/// Convenience wrapper: `json → Vec<RawScanDevice> → Vec<ScanDevice>`.
/// Returns a boxed error so callers don't need to import serde_json.
pub fn scan_from_json(json: &str) -> Result<Vec<ScanDevice>, Box<dyn std::error::Error>> {
    let raw: Vec<RawScanDevice> = serde_json::from_str(json)?;
    let devices = normalize_scan(&raw)?;
    Ok(devices)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
