//! Fixed catalogs of easter eggs and rooms
//!
//! The set of valid ids is frozen at process start: seven eggs, eight
//! rooms (one per narrative screen). Runtime state only ever flips the
//! latches on these records; records are never added or removed.

use serde::{Deserialize, Serialize};

/// A hidden discovery the user can make exactly once per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterEgg {
    /// Stable catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// One-way latch, cleared only by a full reset
    pub found: bool,
}

impl EasterEgg {
    fn hidden(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            found: false,
        }
    }
}

/// Per-screen progress record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    /// Stable catalog id, one per narrative screen
    pub id: String,
    /// Set the first time the screen is shown
    pub visited: bool,
    /// Set when a self-destructing screen's content is removed
    pub destroyed: bool,
    /// Interaction kinds recorded for this room, duplicates ignored
    pub interactions: Vec<String>,
}

impl RoomState {
    fn fresh(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visited: false,
            destroyed: false,
            interactions: Vec::new(),
        }
    }
}

/// The full egg catalog with initial values
pub fn default_easter_eggs() -> Vec<EasterEgg> {
    vec![
        EasterEgg::hidden("egg1", "Terminal Access", "Found the hidden terminal"),
        EasterEgg::hidden("egg2", "Glitch in the Matrix", "Discovered the pattern"),
        EasterEgg::hidden("egg3", "Digital Ghost", "Saw what wasn't there"),
        EasterEgg::hidden("egg4", "Memory Leak", "Accessed restricted data"),
        EasterEgg::hidden("egg5", "Void Caller", "Spoke to the void"),
        EasterEgg::hidden("egg6", "Time Paradox", "Broke the timeline"),
        EasterEgg::hidden("egg7", "Root Access", "Gained administrator privileges"),
    ]
}

/// The full room catalog with initial values
pub fn default_rooms() -> Vec<RoomState> {
    vec![
        RoomState::fresh("boot"),
        RoomState::fresh("audio"),
        RoomState::fresh("surveillance"),
        RoomState::fresh("button"),
        RoomState::fresh("game"),
        RoomState::fresh("counter"),
        RoomState::fresh("stream"),
        RoomState::fresh("matrix"),
    ]
}
