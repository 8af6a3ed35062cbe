//! Roster session — the explicit two-phase initialization contract.
//!
//! # Purpose
//! The startup roster load (from the store) and the live-scan subscription
//! are independent asynchronous sources, but correctness requires the first
//! reconcile to see the persisted roster: reconciling against an empty
//! roster misclassifies every historical device as new and rebuilds the
//! whole list for nothing.  Rather than sequencing the two by timing, the
//! session makes the ordering a state machine:
//!
//! `Uninitialized → RosterLoaded → Reconciling`
//!
//! Scans arriving before the load are rejected with an error the caller can
//! log and drop — never silently merged.
//!
//! # Invariants
//! - **Strictly sequential fold**: each applied scan's output roster is the
//!   next scan's input.  The session owns the single current roster value.
//! - **Generation advances only on change**: a no-op scan leaves both the
//!   roster value and the generation untouched, so callers key publish /
//!   persist work off [`ScanApplied::Updated`].
//! - **Pure, no IO**: deterministic; all logging is `tracing`
//!   instrumentation, no subscriber is installed here.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::{reconcile_outcome, ReconcileOutcome};
use crate::types::{Device, ScanDevice};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No roster yet; scans are rejected.
    Uninitialized,
    /// Roster loaded from the store; no scan applied yet.
    RosterLoaded,
    /// At least one scan has been folded in.
    Reconciling,
}

/// Ordering violations the session refuses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// A scan arrived before the persisted roster was loaded.
    ScanBeforeRosterLoad,
    /// The roster was already loaded; the session is single-load.
    RosterAlreadyLoaded,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScanBeforeRosterLoad => {
                write!(f, "live scan rejected: persisted roster not loaded yet")
            }
            Self::RosterAlreadyLoaded => {
                write!(f, "roster already loaded: session is single-load")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Result of applying one scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanApplied {
    /// The scan reproduced the roster exactly; skip publishing.
    Unchanged,
    /// The roster changed; `generation` identifies the new value.
    Updated { generation: u64 },
}

impl ScanApplied {
    pub fn is_updated(&self) -> bool {
        matches!(self, ScanApplied::Updated { .. })
    }
}

/// Owns the current roster and folds live scans into it, in order.
#[derive(Debug, Default)]
pub struct RosterSession {
    roster: Vec<Arc<Device>>,
    generation: u64,
    loaded: bool,
    reconciling: bool,
}

impl RosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match (self.loaded, self.reconciling) {
            (false, _) => SessionState::Uninitialized,
            (true, false) => SessionState::RosterLoaded,
            (true, true) => SessionState::Reconciling,
        }
    }

    /// The current roster value.  Entries are shared (`Arc`), so publishing
    /// a clone of this slice is cheap.
    pub fn roster(&self) -> &[Arc<Device>] {
        &self.roster
    }

    /// Monotone counter of roster changes; starts at 0, bumps only when a
    /// scan actually updates the roster.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Install the persisted roster.  Legal exactly once, before any scan.
    pub fn load_roster(&mut self, roster: Vec<Arc<Device>>) -> Result<(), SessionError> {
        if self.loaded {
            warn!("rejected second roster load");
            return Err(SessionError::RosterAlreadyLoaded);
        }
        info!(devices = roster.len(), "roster loaded");
        self.roster = roster;
        self.loaded = true;
        Ok(())
    }

    /// Fold one live scan into the roster.
    ///
    /// Rejected until [`load_roster`][Self::load_roster] has run.  Returns
    /// [`ScanApplied::Unchanged`] when the scan is a no-op, in which case
    /// the roster value (and every entry's identity) is exactly as before.
    pub fn apply_scan(&mut self, live: &[ScanDevice]) -> Result<ScanApplied, SessionError> {
        if !self.loaded {
            warn!(scanned = live.len(), "rejected scan before roster load");
            return Err(SessionError::ScanBeforeRosterLoad);
        }
        self.reconciling = true;

        match reconcile_outcome(&self.roster, live) {
            ReconcileOutcome::Unchanged => {
                debug!(generation = self.generation, "scan applied: no change");
                Ok(ScanApplied::Unchanged)
            }
            ReconcileOutcome::Updated(next) => {
                self.roster = next;
                self.generation += 1;
                debug!(
                    generation = self.generation,
                    devices = self.roster.len(),
                    "scan applied: roster updated"
                );
                Ok(ScanApplied::Updated {
                    generation: self.generation,
                })
            }
        }
    }
}
