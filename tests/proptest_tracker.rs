//! Property-based tests for tracker operation sequences
//!
//! Verifies the latch invariants over arbitrary interleavings of
//! operations, valid and unknown ids mixed:
//! - found count always equals the number of distinct valid eggs found
//! - the egg catalog size never changes
//! - interaction lists stay duplicate-free
//! - reset clears everything at once

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use progresstracker::{MemoryStorage, ProgressTracker};

const EGG_IDS: &[&str] = &["egg1", "egg2", "egg3", "egg4", "egg5", "egg6", "egg7"];
const INTERACTION_KINDS: &[&str] = &["primary", "secondary", "hover"];
const ROOM_IDS: &[&str] = &[
    "boot",
    "audio",
    "surveillance",
    "button",
    "game",
    "counter",
    "stream",
    "matrix",
];

#[derive(Debug, Clone)]
enum Op {
    Find(String),
    Visit(String),
    Destroy(String),
    Track(String, String),
    Reset,
}

/// Egg ids weighted toward the catalog, with the occasional unknown id
fn arb_egg_id() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(EGG_IDS).prop_map(String::from),
        1 => Just("egg99".to_string()),
    ]
}

/// Room ids weighted toward the catalog, with the occasional unknown id
fn arb_room_id() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(ROOM_IDS).prop_map(String::from),
        1 => Just("basement".to_string()),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => arb_egg_id().prop_map(Op::Find),
        3 => arb_room_id().prop_map(Op::Visit),
        2 => arb_room_id().prop_map(Op::Destroy),
        3 => (arb_room_id(), prop::sample::select(INTERACTION_KINDS))
            .prop_map(|(r, k)| Op::Track(r, k.to_string())),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_found_count_matches_distinct_discoveries(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut tracker = ProgressTracker::new(MemoryStorage::new());

        let mut found: HashSet<String> = HashSet::new();
        let mut destroyed: HashSet<String> = HashSet::new();
        let mut interactions: HashMap<String, HashSet<String>> = HashMap::new();

        for op in &ops {
            match op {
                Op::Find(id) => {
                    let first_time = tracker.find_easter_egg(id);
                    let expected = EGG_IDS.contains(&id.as_str()) && !found.contains(id);
                    prop_assert_eq!(first_time, expected);
                    if expected {
                        found.insert(id.clone());
                    }
                }
                Op::Visit(id) => tracker.visit_room(id),
                Op::Destroy(id) => {
                    tracker.destroy_room(id);
                    if ROOM_IDS.contains(&id.as_str()) {
                        destroyed.insert(id.clone());
                    }
                }
                Op::Track(room, kind) => {
                    tracker.track_interaction(room, kind);
                    if ROOM_IDS.contains(&room.as_str()) {
                        interactions.entry(room.clone()).or_default().insert(kind.clone());
                    }
                }
                Op::Reset => {
                    tracker.reset_all_progress();
                    found.clear();
                    destroyed.clear();
                    interactions.clear();
                }
            }

            prop_assert_eq!(tracker.found_easter_eggs().len(), found.len());
            prop_assert_eq!(tracker.total_easter_eggs(), EGG_IDS.len());
        }

        for id in ROOM_IDS {
            prop_assert_eq!(tracker.is_room_destroyed(id), destroyed.contains(*id));
        }
        for (room, kinds) in &interactions {
            for kind in kinds {
                prop_assert!(tracker.has_interacted(room, kind));
            }
        }
        // Interaction lists are sets: no duplicates survive any sequence
        for room in tracker.rooms() {
            let mut kinds = room.interactions.clone();
            kinds.sort();
            kinds.dedup();
            prop_assert_eq!(kinds.len(), room.interactions.len());
        }
    }

    #[test]
    fn prop_found_eggs_stay_in_catalog_order(ids in prop::collection::vec(arb_egg_id(), 0..20)) {
        let mut tracker = ProgressTracker::new(MemoryStorage::new());
        for id in &ids {
            tracker.find_easter_egg(id);
        }

        let positions: Vec<usize> = tracker
            .found_easter_eggs()
            .iter()
            .map(|egg| EGG_IDS.iter().position(|c| *c == egg.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
