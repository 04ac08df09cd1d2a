//! ProgressTracker - persistent discovery/progress store for the
//! CTRL+ALT+DEL experience
//!
//! Tracks what the user has discovered (easter eggs) and where they have
//! been (rooms), durable across sessions on one device. Screens call the
//! mutators on user gestures and read the accessors to decide what to
//! render; every mutation rewrites the whole snapshot through the storage
//! boundary.
//!
//! # Architecture
//!
//! ```text
//! {store_path}/
//! └── ctrl_alt_del_state.json    # whole-catalog snapshot
//!     { "easterEggs": [...], "rooms": [...], "lastUpdated": "..." }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use progresstracker::{FileStorage, ProgressTracker};
//!
//! let storage = FileStorage::open(".progress")?;
//! let mut tracker = ProgressTracker::new(storage);
//! tracker.init();
//! tracker.visit_room("boot");
//! if tracker.find_easter_egg("egg1") {
//!     println!("first discovery!");
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
mod storage;
mod tracker;

pub use catalog::{EasterEgg, RoomState};
pub use storage::{FileStorage, KvStorage, MemoryStorage};
pub use tracker::ProgressTracker;

/// Fixed key the snapshot is stored under
pub const STORAGE_KEY: &str = "ctrl_alt_del_state";
