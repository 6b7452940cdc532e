//! Busy-block merging and free-range extraction.
//!
//! [`merge_busy_blocks`] reduces an event list to the disjoint intervals during
//! which anyone from a target attendee set is occupied; [`find_free_ranges`]
//! walks those intervals and emits the day's gaps that can hold a meeting of a
//! given length.

use std::collections::BTreeSet;

use crate::time::TimeRange;
use crate::types::Event;

/// Merge the busy intervals of everyone in `attendees`, coalescing
/// overlapping or touching intervals into one block.
///
/// Events whose attendee set is disjoint from `attendees` are ignored; with an
/// empty target set, every event is ignored and the result is empty. Events
/// must already be sorted by `(start, end)` — the solver sorts once per query.
///
/// Returns sorted, pairwise non-overlapping blocks whose union equals the
/// union of the retained event intervals. Input events are never mutated.
pub fn merge_busy_blocks(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    debug_assert!(
        events.windows(2).all(|w| w[0].when() <= w[1].when()),
        "events must be pre-sorted by (start, end)"
    );

    let mut merged: Vec<TimeRange> = Vec::new();
    for event in events {
        if event.attendees().is_disjoint(attendees) {
            continue;
        }
        let when = event.when();
        if let Some(last) = merged.last_mut() {
            if when.start() <= last.end() {
                if when.end() > last.end() {
                    // Overlapping or touching — widen the current block.
                    *last = TimeRange::from_start_end(last.start(), when.end());
                }
                // Fully contained otherwise; either way the block list stays merged.
                continue;
            }
        }
        merged.push(when);
    }
    merged
}

/// Find every maximal free interval of at least `duration_minutes` across the
/// whole day, given the merged busy blocks of one attendee configuration.
///
/// With no busy blocks at all, the whole day is the single free range (when it
/// is long enough to qualify). Output is sorted by construction, and
/// zero-length gaps are never emitted.
pub fn find_free_ranges(busy: &[TimeRange], duration_minutes: u32) -> Vec<TimeRange> {
    if busy.is_empty() {
        if duration_minutes <= TimeRange::WHOLE_DAY.duration() {
            return vec![TimeRange::WHOLE_DAY];
        }
        return Vec::new();
    }

    let mut free = Vec::new();
    let mut cursor = TimeRange::START_OF_DAY;

    for block in busy {
        if block.start() > cursor && block.start() - cursor >= duration_minutes {
            free.push(TimeRange::from_start_end(cursor, block.start()));
        }
        cursor = cursor.max(block.end());
    }

    // Trailing gap after the last busy block.
    if TimeRange::END_OF_DAY > cursor && TimeRange::END_OF_DAY - cursor >= duration_minutes {
        free.push(TimeRange::from_start_end(cursor, TimeRange::END_OF_DAY));
    }

    free
}
