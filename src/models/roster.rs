//! Read view over members and their unavailability.
//!
//! The roster is a pure query surface snapshotted at the start of a
//! generation. It answers "is M available on D" from unavailable periods
//! only; rest days are generation-local state and live in the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Member, UnavailablePeriod};

/// Snapshot of the team used by one generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Member>,
    unavailable: Vec<UnavailablePeriod>,
}

impl Roster {
    /// Creates a roster from members and their unavailable periods.
    pub fn new(members: Vec<Member>, unavailable: Vec<UnavailablePeriod>) -> Self {
        Self {
            members,
            unavailable,
        }
    }

    /// All members, active or not, in input order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// All unavailable periods.
    pub fn unavailable_periods(&self) -> &[UnavailablePeriod] {
        &self.unavailable
    }

    /// Looks up a member by id.
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Active members in input order.
    ///
    /// Input order is the deterministic candidate order downstream;
    /// identical inputs produce identical iteration.
    pub fn active_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.active)
    }

    /// Whether the member is available on `date`.
    ///
    /// A member is unavailable iff the date falls inside one of their
    /// unavailable periods. Office days are a separate, per-task concern.
    pub fn is_available(&self, member_id: &str, date: NaiveDate) -> bool {
        !self
            .unavailable
            .iter()
            .any(|p| p.member_id == member_id && p.contains(date))
    }

    /// Whether the member is available on every day yielded by `days`.
    pub fn is_available_all(
        &self,
        member_id: &str,
        days: impl IntoIterator<Item = NaiveDate>,
    ) -> bool {
        days.into_iter().all(|d| self.is_available(member_id, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::iter_days;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_roster() -> Roster {
        Roster::new(
            vec![
                Member::new("alice", "Alice"),
                Member::new("bob", "Bob"),
                Member::new("carol", "Carol").deactivated(),
            ],
            vec![UnavailablePeriod::new("bob", d(2025, 1, 7), d(2025, 1, 9))],
        )
    }

    #[test]
    fn test_member_lookup() {
        let roster = sample_roster();
        assert_eq!(roster.member("alice").unwrap().name, "Alice");
        assert!(roster.member("dave").is_none());
    }

    #[test]
    fn test_active_members_skip_deactivated() {
        let roster = sample_roster();
        let ids: Vec<_> = roster.active_members().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["alice", "bob"]);
    }

    #[test]
    fn test_is_available() {
        let roster = sample_roster();
        assert!(roster.is_available("bob", d(2025, 1, 6)));
        assert!(!roster.is_available("bob", d(2025, 1, 7)));
        assert!(!roster.is_available("bob", d(2025, 1, 9)));
        assert!(roster.is_available("bob", d(2025, 1, 10)));
        // Alice has no periods at all
        assert!(roster.is_available("alice", d(2025, 1, 7)));
    }

    #[test]
    fn test_is_available_all() {
        let roster = sample_roster();
        assert!(roster.is_available_all("alice", iter_days(d(2025, 1, 6), d(2025, 1, 11))));
        assert!(!roster.is_available_all("bob", iter_days(d(2025, 1, 6), d(2025, 1, 11))));
        assert!(roster.is_available_all("bob", iter_days(d(2025, 1, 10), d(2025, 1, 11))));
    }
}
