//! Calendar event and meeting request types.
//!
//! Both types are immutable value objects: constructed once, read through
//! accessors, never mutated. The solver builds new collections rather than
//! touching its inputs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time::TimeRange;

/// A calendar event: a titled time range plus the set of people in it.
///
/// The title is display-only; the solver never reads it. Attendee uniqueness
/// is enforced by the set type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Creates an event. Duplicate attendee names collapse into one.
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Display title of the event.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// When the event occupies its attendees.
    pub fn when(&self) -> TimeRange {
        self.when
    }

    /// The people attending this event.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }
}

/// The parameters of a meeting-time query.
///
/// Mandatory attendees must be free for every returned range; optional
/// attendees are satisfied on a best-effort basis. The two sets are usually
/// disjoint, but the solver does not require it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    duration_minutes: u32,
    mandatory_attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    /// Creates a request for a meeting of the given length with the given
    /// mandatory attendees and no optional attendees.
    pub fn new<I, S>(duration_minutes: u32, mandatory_attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration_minutes,
            mandatory_attendees: mandatory_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        }
    }

    /// Adds optional attendees, replacing any previously set.
    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = attendees.into_iter().map(Into::into).collect();
        self
    }

    /// Required meeting length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Attendees who must be free for every returned range.
    pub fn mandatory_attendees(&self) -> &BTreeSet<String> {
        &self.mandatory_attendees
    }

    /// Attendees accommodated when possible.
    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }
}
