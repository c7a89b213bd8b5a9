//! Three-lane reclassification driven by drag-and-drop gestures.
//!
//! # Responsibility
//! - Move a topic between lanes, or reorder it within one, preserving id
//!   and title.
//!
//! # Invariants
//! - The gesture layer guarantees valid indices by construction; this
//!   operation still bounds-checks defensively and no-ops on violations.
//! - Replacement collections are fully built before any lane is assigned,
//!   so a cross-lane move is all-or-nothing.

use crate::model::topic::Lane;
use crate::store::board::Board;
use log::debug;

/// Moves the topic at `source_index` of `source` to `dest_index` of `dest`.
///
/// Same-lane moves are reorders; cross-lane moves change membership only.
/// The destination index clamps to the destination length, so "drop at the
/// end" gestures insert as the last element. Returns `false` when the
/// source index is out of range.
pub fn move_topic(
    board: &mut Board,
    source: Lane,
    source_index: usize,
    dest: Lane,
    dest_index: usize,
) -> bool {
    if source_index >= board.lane(source).len() {
        return false;
    }

    if source == dest {
        let mut lane = board.lane(source).to_vec();
        let topic = lane.remove(source_index);
        let insert_at = dest_index.min(lane.len());
        lane.insert(insert_at, topic.clone());
        board.replace_lane(source, lane);
        debug!(
            "event=topic_reordered module=reclassify lane={} topic={}",
            source.label(),
            topic.id
        );
        return true;
    }

    let mut source_lane = board.lane(source).to_vec();
    let topic = source_lane.remove(source_index);
    let mut dest_lane = board.lane(dest).to_vec();
    let insert_at = dest_index.min(dest_lane.len());
    dest_lane.insert(insert_at, topic.clone());

    board.replace_lane(source, source_lane);
    board.replace_lane(dest, dest_lane);
    debug!(
        "event=topic_moved module=reclassify from={} to={} topic={}",
        source.label(),
        dest.label(),
        topic.id
    );
    true
}
