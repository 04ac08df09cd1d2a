//! Core ProgressTracker implementation
//!
//! Single source of truth for what the user has discovered and where they
//! have been. `found`, `visited` and `destroyed` are one-way latches and
//! room interaction lists are append-only sets; only `reset_all_progress`
//! clears them, all at once. Every mutation rewrites the whole snapshot
//! through the storage boundary; a storage fault is logged and swallowed,
//! leaving the in-memory state authoritative for the rest of the session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::STORAGE_KEY;
use crate::catalog::{EasterEgg, RoomState, default_easter_eggs, default_rooms};
use crate::storage::KvStorage;

/// Snapshot shape written to storage on every mutation
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    easter_eggs: &'a [EasterEgg],
    rooms: &'a [RoomState],
    last_updated: String,
}

/// Snapshot shape read back from storage
///
/// Both top-level fields are optional: a snapshot missing one leaves the
/// corresponding default catalog untouched. Loaded ids are trusted as-is;
/// there is no schema version and no migration.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    easter_eggs: Option<Vec<EasterEgg>>,
    #[serde(default)]
    rooms: Option<Vec<RoomState>>,
}

/// The progress tracker
pub struct ProgressTracker<S: KvStorage> {
    storage: S,
    easter_eggs: Vec<EasterEgg>,
    rooms: Vec<RoomState>,
    initialized: bool,
}

impl<S: KvStorage> ProgressTracker<S> {
    /// Create a tracker over the given storage, loading any persisted
    /// snapshot immediately
    pub fn new(storage: S) -> Self {
        let mut tracker = Self {
            storage,
            easter_eggs: default_easter_eggs(),
            rooms: default_rooms(),
            initialized: false,
        };
        tracker.load_state();
        tracker
    }

    /// Idempotent initialization; reloads from storage at most once
    ///
    /// Safe to call from every screen mount. Repeated calls after the
    /// first are free.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.load_state();
        self.initialized = true;
    }

    fn load_state(&mut self) {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "Failed to load state, keeping defaults");
                return;
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => {
                if let Some(eggs) = snapshot.easter_eggs {
                    self.easter_eggs = eggs;
                }
                if let Some(rooms) = snapshot.rooms {
                    self.rooms = rooms;
                }
                debug!("Loaded persisted state");
            }
            Err(e) => {
                warn!(error = %e, "Malformed snapshot, keeping defaults");
            }
        }
    }

    fn save_state(&mut self) {
        let snapshot = SnapshotRef {
            easter_eggs: &self.easter_eggs,
            rooms: &self.rooms,
            last_updated: chrono::Utc::now().to_rfc3339(),
        };

        let payload = match serde_json::to_string(&snapshot) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize state");
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &payload) {
            warn!(error = %e, "Failed to save state, in-memory state still current");
        }
    }

    /// Mark an egg found; returns true only on a first-time discovery
    ///
    /// Unknown ids and already-found eggs are no-ops returning false.
    pub fn find_easter_egg(&mut self, id: &str) -> bool {
        let Some(egg) = self.easter_eggs.iter_mut().find(|egg| egg.id == id) else {
            return false;
        };
        if egg.found {
            return false;
        }
        egg.found = true;
        info!(id, "Easter egg discovered");
        self.save_state();
        true
    }

    /// Eggs discovered so far, in catalog order
    pub fn found_easter_eggs(&self) -> Vec<&EasterEgg> {
        self.easter_eggs.iter().filter(|egg| egg.found).collect()
    }

    /// Size of the egg catalog (constant)
    pub fn total_easter_eggs(&self) -> usize {
        self.easter_eggs.len()
    }

    /// The full egg catalog, in catalog order
    pub fn easter_eggs(&self) -> &[EasterEgg] {
        &self.easter_eggs
    }

    /// Mark a room visited; unknown ids are a no-op
    pub fn visit_room(&mut self, id: &str) {
        if let Some(room) = self.rooms.iter_mut().find(|room| room.id == id) {
            room.visited = true;
            self.save_state();
        }
    }

    /// Mark a room's content permanently removed; unknown ids are a no-op
    pub fn destroy_room(&mut self, id: &str) {
        if let Some(room) = self.rooms.iter_mut().find(|room| room.id == id) {
            room.destroyed = true;
            info!(id, "Room destroyed");
            self.save_state();
        }
    }

    /// Whether a room's content has been destroyed; unknown ids are false
    pub fn is_room_destroyed(&self, id: &str) -> bool {
        self.rooms.iter().find(|room| room.id == id).map(|room| room.destroyed).unwrap_or(false)
    }

    /// Whether a room has been visited; unknown ids are false
    pub fn is_room_visited(&self, id: &str) -> bool {
        self.rooms.iter().find(|room| room.id == id).map(|room| room.visited).unwrap_or(false)
    }

    /// Record an interaction kind for a room, once; duplicates and
    /// unknown room ids are no-ops
    pub fn track_interaction(&mut self, room_id: &str, interaction_id: &str) {
        if let Some(room) = self.rooms.iter_mut().find(|room| room.id == room_id)
            && !room.interactions.iter().any(|i| i == interaction_id)
        {
            room.interactions.push(interaction_id.to_string());
            self.save_state();
        }
    }

    /// Whether an interaction kind was previously recorded for a room
    pub fn has_interacted(&self, room_id: &str, interaction_id: &str) -> bool {
        self.rooms
            .iter()
            .find(|room| room.id == room_id)
            .map(|room| room.interactions.iter().any(|i| i == interaction_id))
            .unwrap_or(false)
    }

    /// The full room catalog, in catalog order
    pub fn rooms(&self) -> &[RoomState] {
        &self.rooms
    }

    /// Clear every latch and interaction list back to initial values,
    /// persisting the cleared state immediately
    pub fn reset_all_progress(&mut self) {
        for egg in &mut self.easter_eggs {
            egg.found = false;
        }
        for room in &mut self.rooms {
            room.visited = false;
            room.destroyed = false;
            room.interactions.clear();
        }
        info!("All progress reset");
        self.save_state();
    }
}
