//! Roster-level operations outside the reconciliation path.
//!
//! Renaming is the one write surface for `custom_name`.  Reconciliation
//! only ever copies the alias forward; the store collaborator applies the
//! transformations below when the user renames a device, then persists and
//! publishes the result itself.

use std::sync::Arc;

use crate::normalize::normalize_value;
use crate::types::{Device, DeviceKey};

/// Result of an alias write.
#[derive(Clone, Debug)]
pub enum RenameOutcome {
    /// The alias changed; this is the next roster.  Untouched entries keep
    /// their `Arc` identity.
    Renamed(Vec<Arc<Device>>),
    /// The requested alias equals the current one; nothing to publish.
    Unchanged,
    /// No roster entry has this key.
    UnknownDevice,
}

impl RenameOutcome {
    pub fn into_roster(self) -> Option<Vec<Arc<Device>>> {
        match self {
            RenameOutcome::Renamed(roster) => Some(roster),
            _ => None,
        }
    }
}

/// Look up a roster entry by hardware identity.
pub fn find_by_key<'a>(roster: &'a [Arc<Device>], key: &DeviceKey) -> Option<&'a Arc<Device>> {
    roster.iter().find(|d| d.key() == *key)
}

/// Set (or clear) the user alias of the device with the given key.
///
/// The name goes through [`normalize_value`], so a whitespace-only rename
/// clears the alias.  Renaming to the current value returns
/// [`RenameOutcome::Unchanged`] without rebuilding the list.
pub fn set_custom_name(
    roster: &[Arc<Device>],
    key: &DeviceKey,
    name: Option<&str>,
) -> RenameOutcome {
    let target = normalize_value(name);

    let Some(idx) = roster.iter().position(|d| d.key() == *key) else {
        return RenameOutcome::UnknownDevice;
    };

    if roster[idx].custom_name == target {
        return RenameOutcome::Unchanged;
    }

    let mut next: Vec<Arc<Device>> = roster.to_vec();
    let mut updated = Device::clone(&roster[idx]);
    updated.custom_name = target;
    next[idx] = Arc::new(updated);
    RenameOutcome::Renamed(next)
}
