//! Assignment records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TaskKind;

/// Identifier of an assignment within its schedule's store.
pub type AssignmentId = u64;

/// Identifier of a schedule.
pub type ScheduleId = u64;

/// Whether an assignment is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// In force; participates in constraints and the fairness window.
    #[default]
    Active,
    /// Replaced by a swap or reassignment; kept for audit history.
    Superseded,
}

/// One member assigned to one slot on one date.
///
/// A `(member, date, kind, shift_label)` tuple is unique while active.
/// Weekly kinds additionally carry the Monday of their week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Identifier, unique within the schedule.
    pub id: AssignmentId,
    /// Owning schedule.
    pub schedule_id: ScheduleId,
    /// Civil date of the duty.
    pub date: NaiveDate,
    /// Task kind.
    pub kind: TaskKind,
    /// Shift label; empty for weekly kinds.
    pub shift_label: String,
    /// Assigned member.
    pub member_id: String,
    /// Monday of the week, for weekly kinds.
    pub week_start: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: AssignmentStatus,
    /// Generation date the record was created on.
    pub created_on: NaiveDate,
}

impl Assignment {
    /// Creates an active assignment.
    pub fn new(
        id: AssignmentId,
        schedule_id: ScheduleId,
        date: NaiveDate,
        kind: TaskKind,
        shift_label: impl Into<String>,
        member_id: impl Into<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            schedule_id,
            date,
            kind,
            shift_label: shift_label.into(),
            member_id: member_id.into(),
            week_start: None,
            status: AssignmentStatus::Active,
            created_on,
        }
    }

    /// Sets the week the assignment belongs to.
    pub fn with_week_start(mut self, monday: NaiveDate) -> Self {
        self.week_start = Some(monday);
        self
    }

    /// Whether the assignment is in force.
    pub fn is_active(&self) -> bool {
        self.status == AssignmentStatus::Active
    }

    /// Stable export ordering key: date, canonical kind order, label.
    pub fn sort_key(&self) -> (NaiveDate, TaskKind, &str) {
        (self.date, self.kind, self.shift_label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_is_active() {
        let a = Assignment::new(
            1,
            7,
            d(2025, 1, 6),
            TaskKind::AtmMorning,
            "Morning",
            "alice",
            d(2025, 1, 6),
        );
        assert!(a.is_active());
        assert_eq!(a.schedule_id, 7);
        assert!(a.week_start.is_none());
    }

    #[test]
    fn test_week_start_builder() {
        let a = Assignment::new(
            2,
            7,
            d(2025, 1, 8),
            TaskKind::SysaidMaker,
            "",
            "bob",
            d(2025, 1, 6),
        )
        .with_week_start(d(2025, 1, 6));
        assert_eq!(a.week_start, Some(d(2025, 1, 6)));
    }

    #[test]
    fn test_sort_key_ordering() {
        let morning = Assignment::new(
            1,
            1,
            d(2025, 1, 6),
            TaskKind::AtmMorning,
            "Morning",
            "a",
            d(2025, 1, 6),
        );
        let midnight = Assignment::new(
            2,
            1,
            d(2025, 1, 6),
            TaskKind::AtmMidnight,
            "Mid/Night",
            "b",
            d(2025, 1, 6),
        );
        let maker = Assignment::new(
            3,
            1,
            d(2025, 1, 6),
            TaskKind::SysaidMaker,
            "",
            "c",
            d(2025, 1, 6),
        );
        let next_day = Assignment::new(
            4,
            1,
            d(2025, 1, 7),
            TaskKind::AtmMorning,
            "Morning",
            "a",
            d(2025, 1, 6),
        );

        let mut rows = vec![&next_day, &maker, &midnight, &morning];
        rows.sort_by_key(|a| a.sort_key());
        let ids: Vec<_> = rows.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
