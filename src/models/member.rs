//! Team member and unavailability models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::WeekdaySet;

/// Access role of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Can manage members, schedules, and swap decisions.
    Admin,
    /// Regular team member.
    #[default]
    Member,
}

/// A team member.
///
/// Members are created by collaborators and never destroyed by the
/// scheduler; departures are soft-deactivations via `active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Days of the week the member works from the office.
    pub office_days: WeekdaySet,
    /// Contact address, if known.
    pub email: Option<String>,
    /// Access role.
    pub role: Role,
    /// Whether the member participates in scheduling.
    pub active: bool,
}

impl Member {
    /// Creates an active member with Mon..Fri office days.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            office_days: WeekdaySet::MON_FRI,
            email: None,
            role: Role::Member,
            active: true,
        }
    }

    /// Sets the office days.
    pub fn with_office_days(mut self, days: WeekdaySet) -> Self {
        self.office_days = days;
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Marks the member inactive.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// A whole-day unavailability window, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailablePeriod {
    /// Member the period belongs to.
    pub member_id: String,
    /// First unavailable day.
    pub start: NaiveDate,
    /// Last unavailable day.
    pub end: NaiveDate,
    /// Optional free-text reason.
    pub reason: Option<String>,
}

impl UnavailablePeriod {
    /// Creates a period covering `[start, end]`.
    pub fn new(member_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            member_id: member_id.into(),
            start,
            end,
            reason: None,
        }
    }

    /// Creates a single-day period.
    pub fn single_day(member_id: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(member_id, date, date)
    }

    /// Sets the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Whether `date` falls inside the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
