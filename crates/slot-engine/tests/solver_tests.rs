//! End-to-end tests for the meeting-time query.
//!
//! Covers the classic single-day calendar scenarios: no attendees, split
//! schedules, overlapping and nested events, double-booked people, and the
//! day-boundary edge cases.

use slot_engine::{query, Event, MeetingRequest, TimeRange};

const DURATION_30: u32 = 30;
const DURATION_60: u32 = 60;

fn event(start: u32, end: u32, attendees: &[&str]) -> Event {
    Event::new("event", TimeRange::from_start_end(start, end), attendees.iter().copied())
}

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end)
}

#[test]
fn options_for_no_attendees() {
    // Scenario A: no events, no attendees → the whole day.
    let request = MeetingRequest::new(DURATION_30, Vec::<String>::new());
    assert_eq!(query(&[], &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_options_for_too_long_of_a_request() {
    let request = MeetingRequest::new(TimeRange::WHOLE_DAY.duration() + 1, ["alice"]);
    assert_eq!(query(&[], &request), Vec::<TimeRange>::new());
}

#[test]
fn whole_day_booked_attendee_has_no_options() {
    // Scenario B: Alice is busy all day.
    let events = vec![event(0, 1440, &["alice"])];
    let request = MeetingRequest::new(DURATION_30, ["alice"]);
    assert_eq!(query(&events, &request), Vec::<TimeRange>::new());
}

#[test]
fn event_splits_restriction() {
    // Scenario C: Alice busy [0,60) and [120,180) → free [60,120) and
    // [180,1440).
    let events = vec![event(0, 60, &["alice"]), event(120, 180, &["alice"])];
    let request = MeetingRequest::new(DURATION_30, ["alice"]);
    assert_eq!(
        query(&events, &request),
        vec![range(60, 120), range(180, 1440)]
    );
}

#[test]
fn every_attendee_is_considered() {
    // Alice and Bob have separate events; both constrain the answer.
    let events = vec![
        event(480, 540, &["alice"]),
        event(540, 600, &["bob"]),
    ];
    let request = MeetingRequest::new(DURATION_30, ["alice", "bob"]);
    assert_eq!(
        query(&events, &request),
        vec![range(0, 480), range(600, 1440)]
    );
}

#[test]
fn overlapping_events_block_together() {
    let events = vec![
        event(480, 570, &["alice"]),
        event(540, 600, &["bob"]),
    ];
    let request = MeetingRequest::new(DURATION_30, ["alice", "bob"]);
    assert_eq!(
        query(&events, &request),
        vec![range(0, 480), range(600, 1440)]
    );
}

#[test]
fn nested_events_block_as_the_outer_event() {
    // Bob's event sits inside Alice's.
    let events = vec![
        event(480, 600, &["alice"]),
        event(510, 540, &["bob"]),
    ];
    let request = MeetingRequest::new(DURATION_30, ["alice", "bob"]);
    assert_eq!(
        query(&events, &request),
        vec![range(0, 480), range(600, 1440)]
    );
}

#[test]
fn double_booked_attendee_counts_once() {
    let events = vec![
        event(480, 540, &["alice"]),
        event(480, 600, &["alice"]),
    ];
    let request = MeetingRequest::new(DURATION_30, ["alice"]);
    assert_eq!(
        query(&events, &request),
        vec![range(0, 480), range(600, 1440)]
    );
}

#[test]
fn just_enough_room() {
    // Exactly 60 minutes free before Alice's day-filling event.
    let events = vec![event(60, 1440, &["alice"])];
    let request = MeetingRequest::new(DURATION_60, ["alice"]);
    assert_eq!(query(&events, &request), vec![range(0, 60)]);
}

#[test]
fn not_enough_room() {
    let events = vec![event(59, 1440, &["alice"])];
    let request = MeetingRequest::new(DURATION_60, ["alice"]);
    assert_eq!(query(&events, &request), Vec::<TimeRange>::new());
}

#[test]
fn ignores_people_not_attending() {
    // Bob's schedule is irrelevant to Alice's meeting.
    let events = vec![event(480, 540, &["bob"])];
    let request = MeetingRequest::new(DURATION_30, ["alice"]);
    assert_eq!(query(&events, &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn unsorted_input_events_are_handled() {
    // The solver sorts; callers need not.
    let events = vec![event(120, 180, &["alice"]), event(0, 60, &["alice"])];
    let request = MeetingRequest::new(DURATION_30, ["alice"]);
    assert_eq!(
        query(&events, &request),
        vec![range(60, 120), range(180, 1440)]
    );
}

#[test]
fn zero_duration_request_gets_every_gap() {
    // Scenario E: duration 0, no events → the whole day, once.
    let request = MeetingRequest::new(0, ["alice"]);
    assert_eq!(query(&[], &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn exactly_whole_day_duration_fits_an_empty_calendar() {
    let request = MeetingRequest::new(1440, ["alice"]);
    assert_eq!(query(&[], &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn result_is_sorted_and_non_overlapping() {
    let events = vec![
        event(840, 900, &["alice"]),
        event(120, 180, &["alice"]),
        event(480, 540, &["bob"]),
    ];
    let request = MeetingRequest::new(DURATION_30, ["alice", "bob"]);
    let result = query(&events, &request);

    assert_eq!(
        result,
        vec![
            range(0, 120),
            range(180, 480),
            range(540, 840),
            range(900, 1440),
        ]
    );
    for pair in result.windows(2) {
        assert!(pair[0].start() < pair[1].start(), "sorted by start");
        assert!(!pair[0].overlaps(&pair[1]), "pairwise non-overlapping");
    }
}

#[test]
fn query_is_deterministic() {
    let events = vec![
        event(0, 600, &["alice"]),
        event(300, 900, &["bob"]),
        event(1200, 1440, &["carol"]),
    ];
    let request =
        MeetingRequest::new(DURATION_30, ["alice"]).with_optional_attendees(["bob", "carol"]);

    let first = query(&events, &request);
    let second = query(&events, &request);
    assert_eq!(first, second);
}

#[test]
fn inputs_survive_the_query_untouched() {
    let events = vec![event(0, 60, &["alice"]), event(120, 180, &["alice"])];
    let request = MeetingRequest::new(DURATION_30, ["alice"]);
    let events_before = events.clone();
    let request_before = request.clone();

    let _ = query(&events, &request);

    assert_eq!(events, events_before);
    assert_eq!(request, request_before);
}
