//! Saved build records.
//!
//! The adapter between the live build state and the external store's
//! record shape. It only shapes data: the store owns the records and
//! does the actual I/O, querying and deletion.

use crate::build::{BuildState, SlotSelections};
use crate::catalog::Part;
use crate::error::BuildError;
use crate::ids::OwnerId;
use crate::money::Money;
use crate::slot::SlotKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A persisted snapshot of a build.
///
/// `total_price` is frozen at save time: later catalog price changes
/// never retroactively alter a saved record. `components` always
/// carries all 8 canonical slot keys, empty slots as null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedBuildRecord {
    /// Owner of the saved build.
    pub owner_id: OwnerId,
    /// User-chosen name.
    pub build_name: String,
    /// Unix timestamp of the save.
    pub created_at: i64,
    /// Selected part per slot, all 8 keys present.
    pub components: BTreeMap<SlotKind, Option<Part>>,
    /// The build total at save time.
    pub total_price: Money,
}

impl SavedBuildRecord {
    /// Freeze a build into a record.
    pub fn from_state(
        state: &BuildState,
        build_name: impl Into<String>,
        owner_id: OwnerId,
    ) -> Self {
        let mut components = BTreeMap::new();
        for slot in SlotKind::ALL {
            components.insert(slot, state.get(slot).cloned());
        }
        Self {
            owner_id,
            build_name: build_name.into(),
            created_at: current_timestamp(),
            components,
            total_price: state.total(),
        }
    }

    /// Serialize to the store's JSON record shape.
    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from the store's JSON record shape.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the record back into selections for `BuildState::replace_all`.
    ///
    /// No compatibility re-validation and no catalog reconciliation:
    /// parts the catalog has since dropped are carried forward as
    /// stored.
    pub fn into_slots(self) -> SlotSelections {
        let mut slots = SlotSelections::new();
        for (slot, part) in self.components {
            slots.set(slot, part);
        }
        slots
    }
}

/// Storage seam for saved builds, keyed by owner and build name.
pub trait BuildStore {
    /// Save a record, replacing any record with the same owner and name.
    fn save(&mut self, record: SavedBuildRecord) -> Result<(), BuildError>;

    /// Load a record by owner and build name.
    fn load(&self, owner: &OwnerId, build_name: &str) -> Result<SavedBuildRecord, BuildError>;

    /// All of an owner's records, newest first.
    fn list_for_owner(&self, owner: &OwnerId) -> Vec<SavedBuildRecord>;

    /// Delete a record. Returns true if one existed.
    fn delete(&mut self, owner: &OwnerId, build_name: &str) -> bool;
}

/// An in-memory build store for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBuildStore {
    records: HashMap<(String, String), SavedBuildRecord>,
}

impl InMemoryBuildStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(owner: &OwnerId, build_name: &str) -> (String, String) {
        (owner.as_str().to_string(), build_name.to_string())
    }
}

impl BuildStore for InMemoryBuildStore {
    fn save(&mut self, record: SavedBuildRecord) -> Result<(), BuildError> {
        let key = Self::key(&record.owner_id, &record.build_name);
        self.records.insert(key, record);
        Ok(())
    }

    fn load(&self, owner: &OwnerId, build_name: &str) -> Result<SavedBuildRecord, BuildError> {
        self.records
            .get(&Self::key(owner, build_name))
            .cloned()
            .ok_or_else(|| BuildError::BuildNotFound(build_name.to_string()))
    }

    fn list_for_owner(&self, owner: &OwnerId) -> Vec<SavedBuildRecord> {
        let mut records: Vec<_> = self
            .records
            .values()
            .filter(|r| &r.owner_id == owner)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    fn delete(&mut self, owner: &OwnerId, build_name: &str) -> bool {
        self.records.remove(&Self::key(owner, build_name)).is_some()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
