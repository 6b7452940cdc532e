//! Optional-attendee subset search.
//!
//! Descends the subset lattice of the optional-attendee set one cardinality
//! level at a time, always keeping every mandatory attendee in play, and stops
//! at the first level where some subset leaves room for the meeting. Among the
//! successful subsets of that level, the one producing the most free ranges
//! wins.

use std::collections::BTreeSet;

use crate::freebusy::{find_free_ranges, merge_busy_blocks};
use crate::time::TimeRange;
use crate::types::{Event, MeetingRequest};

/// Find the free ranges of the largest optional-attendee subset that still
/// admits the meeting, alongside all mandatory attendees.
///
/// Levels are explored in decreasing cardinality, so a level with any workable
/// subset always beats every smaller subset below it. Within a level, more
/// free ranges win; on a count tie the first configuration in `BTreeSet`
/// iteration order wins, which makes the lexicographically smallest attendee
/// subset the deterministic tie winner.
///
/// Returns `None` when the descent exhausts the lattice without any subset
/// (empty one included) yielding a free range — the caller decides whether the
/// mandatory-only answer is a meaningful fallback. A `Some` result is always
/// non-empty.
///
/// The loop replaces the natural recursion over levels; the worst case visits
/// the full subset lattice, exponential in the optional-attendee count.
pub(crate) fn best_optional_ranges(
    events: &[Event],
    request: &MeetingRequest,
) -> Option<Vec<TimeRange>> {
    let mut level: BTreeSet<BTreeSet<String>> = BTreeSet::new();
    level.insert(request.optional_attendees().clone());

    loop {
        let mut best: Option<Vec<TimeRange>> = None;
        let mut next_level: BTreeSet<BTreeSet<String>> = BTreeSet::new();

        for config in &level {
            if config.is_empty() {
                // Bottom of the lattice; no level above produced a range.
                return None;
            }

            let mut combined = config.clone();
            combined.extend(request.mandatory_attendees().iter().cloned());
            let busy = merge_busy_blocks(events, &combined);
            let ranges = find_free_ranges(&busy, request.duration_minutes());

            if !ranges.is_empty() {
                let improves = match &best {
                    Some(current) => ranges.len() > current.len(),
                    None => true,
                };
                if improves {
                    best = Some(ranges);
                }
            }

            // Build the next level regardless; it is only used if this whole
            // level fails.
            for attendee in config {
                let mut smaller = config.clone();
                smaller.remove(attendee);
                next_level.insert(smaller);
            }
        }

        if best.is_some() {
            return best;
        }
        level = next_level;
    }
}
