//! # slot-engine
//!
//! Single-day meeting-time solver: given the day's events (each tagged with
//! its attendees) and a request naming a duration, mandatory attendees, and
//! optional attendees, compute every time-of-day range where the meeting fits.
//! Mandatory attendees are satisfied unconditionally; as many optional
//! attendees as possible are accommodated on top, never at the expense of
//! mandatory feasibility.
//!
//! The solver is a pure function over minute-of-day intervals on one
//! representative day — no recurrence, no timezones, no I/O, no state.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! // Alice has a 9:00-9:30 standup; find an hour for a meeting with her.
//! let events = vec![Event::new(
//!     "standup",
//!     TimeRange::from_start_end(540, 570),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(60, ["alice"]);
//!
//! let free = query(&events, &request);
//! assert_eq!(
//!     free,
//!     vec![
//!         TimeRange::from_start_end(0, 540),
//!         TimeRange::from_start_end(570, 1440),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time`] — [`TimeRange`], the minute-of-day interval vocabulary
//! - [`types`] — [`Event`] and [`MeetingRequest`]
//! - [`freebusy`] — busy-block merging and free-range extraction
//! - `search` — optional-attendee subset descent (crate-internal)
//! - [`solver`] — the [`query`] entry point
//! - [`error`] — error types for the validated input paths

pub mod error;
pub mod freebusy;
mod search;
pub mod solver;
pub mod time;
pub mod types;

pub use error::SlotError;
pub use freebusy::{find_free_ranges, merge_busy_blocks};
pub use solver::query;
pub use time::TimeRange;
pub use types::{Event, MeetingRequest};
