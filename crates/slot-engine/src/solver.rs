//! The meeting-time query entry point.

use crate::freebusy::{find_free_ranges, merge_busy_blocks};
use crate::search::best_optional_ranges;
use crate::time::TimeRange;
use crate::types::{Event, MeetingRequest};

/// Compute every time-of-day range where the requested meeting fits.
///
/// All mandatory attendees are free for every returned range. When the request
/// names optional attendees, the largest subset of them that still leaves room
/// for the meeting is accommodated too (see the `search` module for the exact
/// selection policy); their ranges replace the mandatory-only answer, which
/// they always refine. When no optional subset works and the request has no
/// mandatory attendees either, nobody at all can meet and the result is empty.
///
/// The result is sorted by `(start, end)` and pairwise non-overlapping. The
/// function is pure: inputs are not mutated and repeated calls with the same
/// inputs return the same answer.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    if request.duration_minutes() > TimeRange::WHOLE_DAY.duration() {
        return Vec::new();
    }

    // Sort once; the merge step relies on (start, end) order.
    let mut sorted: Vec<Event> = events.to_vec();
    sorted.sort_by_key(|e| e.when());

    let busy = merge_busy_blocks(&sorted, request.mandatory_attendees());
    let mut ranges = find_free_ranges(&busy, request.duration_minutes());

    if !request.optional_attendees().is_empty() {
        match best_optional_ranges(&sorted, request) {
            Some(optional_ranges) => ranges = optional_ranges,
            None if request.mandatory_attendees().is_empty() => return Vec::new(),
            None => {}
        }
    }

    ranges.sort();
    ranges
}
