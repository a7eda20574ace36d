//! Calendar arithmetic for day-granular rosters.
//!
//! All scheduled events are whole civil days; timezone handling stops at
//! the boundary (the configured IANA zone names which civil day a wall
//! clock belongs to, collaborators resolve it). Inside the core a day is a
//! `chrono::NaiveDate` and a week is the Monday..Saturday bucket that
//! contains it.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Adds (or subtracts, for negative `days`) whole days to a civil date.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date + Days::new(days as u64)
    } else {
        date - Days::new(days.unsigned_abs())
    }
}

/// Inclusive iterator over `[start, end]`.
///
/// Yields nothing when `end < start`.
pub fn iter_days(start: NaiveDate, end: NaiveDate) -> DayIter {
    DayIter {
        next: start,
        end,
        done: end < start,
    }
}

/// Iterator returned by [`iter_days`].
#[derive(Debug, Clone)]
pub struct DayIter {
    next: NaiveDate,
    end: NaiveDate,
    done: bool,
}

impl Iterator for DayIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.done {
            return None;
        }
        let current = self.next;
        if current == self.end {
            self.done = true;
        } else {
            self.next = add_days(current, 1);
        }
        Some(current)
    }
}

/// A Monday-keyed week bucket.
///
/// `monday` is the week start; `saturday` is the end of the assignable
/// span. Sunday belongs to the bucket's calendar week but is never part
/// of the weekly assignment span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekBucket {
    /// First day of the week.
    pub monday: NaiveDate,
    /// Last assignable day of the week.
    pub saturday: NaiveDate,
}

impl WeekBucket {
    /// Whether a date falls within `[monday, saturday]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.monday && date <= self.saturday
    }

    /// Iterates the Mon..Sat span.
    pub fn days(&self) -> DayIter {
        iter_days(self.monday, self.saturday)
    }
}

/// Returns the week bucket containing `date`.
pub fn week_bucket(date: NaiveDate) -> WeekBucket {
    let back = date.weekday().num_days_from_monday() as i64;
    let monday = add_days(date, -back);
    WeekBucket {
        monday,
        saturday: add_days(monday, 5),
    }
}

/// A set of weekdays, stored as a 7-bit mask (bit 0 = Monday).
///
/// Mirrors the office-day bitmap the member store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Monday through Friday.
    pub const MON_FRI: WeekdaySet = WeekdaySet(0b001_1111);

    /// Monday through Saturday.
    pub const MON_SAT: WeekdaySet = WeekdaySet(0b011_1111);

    /// Every day of the week.
    pub const ALL: WeekdaySet = WeekdaySet(0b111_1111);

    /// Builds a set from individual weekdays.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = WeekdaySet::EMPTY;
        for day in days {
            set = set.with(day);
        }
        set
    }

    /// Returns the set with `day` added.
    pub fn with(self, day: Weekday) -> Self {
        WeekdaySet(self.0 | 1 << day.num_days_from_monday())
    }

    /// Whether `day` is in the set.
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & 1 << day.num_days_from_monday() != 0
    }

    /// Whether every day of `other` is also in `self`.
    pub fn is_superset_of(self, other: WeekdaySet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of days in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained weekdays in Monday..Sunday order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        const ORDER: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        ORDER.into_iter().filter(move |d| self.contains(*d))
    }
}
