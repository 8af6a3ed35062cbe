//! mdk-roster
//!
//! Device roster reconciliation core.
//!
//! Architectural decisions:
//! - Hardware identity is the vid/pid/serial triple; port is never identity
//! - User-assigned aliases are only ever copied forward, never derived
//! - Unchanged entries keep their `Arc` identity so a no-op scan is
//!   detectable by pointer comparison and costs no downstream work
//! - Store load must precede the first scan; enforced by a state machine,
//!   not timing
//!
//! Deterministic, pure logic. No IO. No serial access. No clocks.

mod boards;
mod diff;
mod engine;
mod normalize;
mod roster;
mod scan_adapter;
mod session;
mod store_adapter;
mod types;

pub use boards::{board_display_name, is_recognized_board};
pub use diff::{diff_scans, ScanDiff};
pub use engine::{is_same_roster, reconcile, reconcile_outcome, ReconcileOutcome};
pub use normalize::{normalize_string, normalize_value};
pub use roster::{find_by_key, set_custom_name, RenameOutcome};
pub use scan_adapter::{
    normalize_scan, normalize_scan_lenient, scan_from_json, RawScanDevice, ScanAdapterError,
};
pub use session::{RosterSession, ScanApplied, SessionError, SessionState};
pub use store_adapter::{roster_from_persisted, roster_to_persisted, PersistedDevice};
pub use types::{Device, DeviceKey, DeviceStatus, ScanDevice, NO_PORT};
