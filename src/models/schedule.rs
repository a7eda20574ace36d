//! Schedule record and its status machine.
//!
//! A schedule owns the assignments produced by one generation. Status
//! moves draft -> published -> archived, never backwards: drafts permit
//! free editing, published schedules change only through validated swap
//! or reassignment, archived schedules are read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Assignment, AssignmentId, ScheduleId, TaskKind};

/// Lifecycle status of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Freshly generated; freely editable.
    #[default]
    Draft,
    /// Visible to the team; changes require the swap workflow.
    Published,
    /// Historical; read-only.
    Archived,
}

/// Error for an illegal status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransitionError {
    /// Status the schedule was in.
    pub from: ScheduleStatus,
    /// Status that was requested.
    pub to: ScheduleStatus,
}

impl fmt::Display for StatusTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "illegal schedule status transition {:?} -> {:?}",
            self.from, self.to
        )
    }
}

impl std::error::Error for StatusTransitionError {}

/// A generated roster for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Identifier assigned by the caller's store.
    pub id: ScheduleId,
    /// First scheduled day.
    pub start: NaiveDate,
    /// Last scheduled day, inclusive.
    pub end: NaiveDate,
    /// Lifecycle status.
    pub status: ScheduleStatus,
    /// Seed the generation ran with; replaying it reproduces the output.
    pub seed: u64,
    /// Fairness aggressiveness the generation ran with (1..=5).
    pub aggressiveness: u8,
    /// Date the schedule was generated on.
    pub created_on: NaiveDate,
    /// Owned assignments, in emission order.
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    /// Creates an empty draft schedule.
    pub fn new(
        id: ScheduleId,
        start: NaiveDate,
        end: NaiveDate,
        seed: u64,
        aggressiveness: u8,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            start,
            end,
            status: ScheduleStatus::Draft,
            seed,
            aggressiveness,
            created_on,
            assignments: Vec::new(),
        }
    }

    /// Publishes a draft.
    pub fn publish(&mut self) -> Result<(), StatusTransitionError> {
        self.transition(ScheduleStatus::Published)
    }

    /// Archives a published schedule.
    pub fn archive(&mut self) -> Result<(), StatusTransitionError> {
        self.transition(ScheduleStatus::Archived)
    }

    fn transition(&mut self, to: ScheduleStatus) -> Result<(), StatusTransitionError> {
        let legal = matches!(
            (self.status, to),
            (ScheduleStatus::Draft, ScheduleStatus::Published)
                | (ScheduleStatus::Published, ScheduleStatus::Archived)
        );
        if !legal {
            return Err(StatusTransitionError {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Whether assignments may be changed at all (draft or published).
    pub fn allows_change(&self) -> bool {
        self.status != ScheduleStatus::Archived
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Next free assignment id within this schedule.
    pub fn next_assignment_id(&self) -> AssignmentId {
        self.assignments.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    /// Looks up an assignment by id.
    pub fn assignment(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Assignments currently in force.
    pub fn active_assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| a.is_active())
    }

    /// Active assignments on a date.
    pub fn active_on(&self, date: NaiveDate) -> impl Iterator<Item = &Assignment> {
        self.active_assignments().filter(move |a| a.date == date)
    }

    /// Active assignments of one member.
    pub fn active_for_member<'a>(
        &'a self,
        member_id: &'a str,
    ) -> impl Iterator<Item = &'a Assignment> {
        self.active_assignments()
            .filter(move |a| a.member_id == member_id)
    }

    /// Active assignments in the stable export order:
    /// date ascending, canonical kind order, shift label ascending.
    pub fn assignments_sorted(&self) -> Vec<&Assignment> {
        let mut rows: Vec<_> = self.active_assignments().collect();
        rows.sort_by_key(|a| a.sort_key());
        rows
    }

    /// Active assignment count for a kind.
    pub fn count_of_kind(&self, kind: TaskKind) -> usize {
        self.active_assignments().filter(|a| a.kind == kind).count()
    }
}
