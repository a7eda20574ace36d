//! Fairness ledger.
//!
//! Per-member, per-kind assignment counts inside a rolling window. The
//! ledger is the single source of fairness truth during a generation:
//! seeded from persisted history at the start, mutated by each selection,
//! and written back as a snapshot on success. Weekly roles count once per
//! week, not once per emitted day row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Assignment, Cadence, TaskKind};
use crate::time::{add_days, week_bucket};

/// Persistable snapshot row of one (member, kind) count.
///
/// The window is half-open: `(window_start, window_end]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessCount {
    /// Member the count belongs to.
    pub member_id: String,
    /// Counted task kind.
    pub kind: TaskKind,
    /// Assignments inside the window.
    pub count: u32,
    /// Exclusive window start.
    pub window_start: NaiveDate,
    /// Inclusive window end.
    pub window_end: NaiveDate,
}

/// Rolling-window assignment counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessLedger {
    window_days: u32,
    counts: BTreeMap<String, BTreeMap<TaskKind, u32>>,
}

impl FairnessLedger {
    /// Creates an empty ledger with the given window length.
    pub fn new(window_days: u32) -> Self {
        Self {
            window_days,
            counts: BTreeMap::new(),
        }
    }

    /// Creates a ledger seeded from assignment history.
    pub fn seeded_from(window_days: u32, history: &[Assignment], as_of: NaiveDate) -> Self {
        let mut ledger = Self::new(window_days);
        ledger.recompute_from_history(history, as_of);
        ledger
    }

    /// Window length in days.
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Count for one member and kind.
    pub fn count(&self, member_id: &str, kind: TaskKind) -> u32 {
        self.counts
            .get(member_id)
            .and_then(|kinds| kinds.get(&kind))
            .copied()
            .unwrap_or(0)
    }

    /// Total count for a member across all kinds.
    pub fn total(&self, member_id: &str) -> u32 {
        self.counts
            .get(member_id)
            .map(|kinds| kinds.values().sum())
            .unwrap_or(0)
    }

    /// Adds one to a member's count for a kind.
    pub fn increment(&mut self, member_id: &str, kind: TaskKind) {
        *self
            .counts
            .entry(member_id.to_string())
            .or_default()
            .entry(kind)
            .or_insert(0) += 1;
    }

    /// Removes one from a member's count for a kind, saturating at zero.
    pub fn decrement(&mut self, member_id: &str, kind: TaskKind) {
        if let Some(count) = self
            .counts
            .get_mut(member_id)
            .and_then(|kinds| kinds.get_mut(&kind))
        {
            *count = count.saturating_sub(1);
        }
    }

    /// Rebuilds all counts from assignment history.
    ///
    /// Counts active assignments with `window_start < date <= as_of`
    /// where `window_start = as_of - window_days`. Daily kinds count one
    /// per row; weekly kinds count one per distinct week per member.
    pub fn recompute_from_history(&mut self, history: &[Assignment], as_of: NaiveDate) {
        self.counts.clear();
        let window_start = add_days(as_of, -i64::from(self.window_days));
        let mut seen_weeks: BTreeSet<(&str, TaskKind, NaiveDate)> = BTreeSet::new();

        for assignment in history {
            if !assignment.is_active() {
                continue;
            }
            if assignment.date <= window_start || assignment.date > as_of {
                continue;
            }
            if assignment.kind.cadence() == Cadence::Weekly {
                let week = assignment
                    .week_start
                    .unwrap_or_else(|| week_bucket(assignment.date).monday);
                if !seen_weeks.insert((assignment.member_id.as_str(), assignment.kind, week)) {
                    continue;
                }
            }
            self.increment(&assignment.member_id, assignment.kind);
        }
    }

    /// Snapshot rows for persistence, covering `(end - window, end]`.
    ///
    /// Rows are emitted in (member, kind) order; zero counts are skipped.
    pub fn snapshot(&self, window_end: NaiveDate) -> Vec<FairnessCount> {
        let window_start = add_days(window_end, -i64::from(self.window_days));
        let mut rows = Vec::new();
        for (member_id, kinds) in &self.counts {
            for (kind, count) in kinds {
                if *count == 0 {
                    continue;
                }
                rows.push(FairnessCount {
                    member_id: member_id.clone(),
                    kind: *kind,
                    count: *count,
                    window_start,
                    window_end,
                });
            }
        }
        rows
    }
}
