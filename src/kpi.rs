//! Roster quality metrics.
//!
//! Computes load-distribution indicators from a generated schedule for
//! operator review: per-member load, per-kind spread between the most
//! and least loaded members, and how many slots went unfilled.
//!
//! Weekly roles count once per week, matching the fairness ledger.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::audit::AuditLog;
use crate::models::{Cadence, Roster, Schedule, TaskKind};
use crate::time::week_bucket;

/// Min and max member load for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSpread {
    /// Lowest count across active members.
    pub min: u32,
    /// Highest count across active members.
    pub max: u32,
}

impl LoadSpread {
    /// Difference between the most and least loaded member.
    pub fn spread(&self) -> u32 {
        self.max - self.min
    }
}

/// Load-distribution indicators for one schedule.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Active assignment rows.
    pub assignment_count: usize,
    /// Slots the generation could not fill.
    pub unfilled_slots: usize,
    /// Total load per active member (weekly roles counted once).
    pub load_by_member: BTreeMap<String, u32>,
    /// Load spread per kind across active members.
    pub spread_by_kind: BTreeMap<TaskKind, LoadSpread>,
}

impl RosterKpi {
    /// Computes KPIs from a schedule, its audit log, and the roster.
    ///
    /// The roster supplies the active member set so that members with
    /// zero assignments still count toward the spread.
    pub fn calculate(schedule: &Schedule, audit: &AuditLog, roster: &Roster) -> Self {
        let mut counts: BTreeMap<(String, TaskKind), u32> = BTreeMap::new();
        let mut seen_weeks: BTreeSet<(String, TaskKind, NaiveDate)> = BTreeSet::new();

        for a in schedule.active_assignments() {
            if a.kind.cadence() == Cadence::Weekly {
                let week = a
                    .week_start
                    .unwrap_or_else(|| week_bucket(a.date).monday);
                if !seen_weeks.insert((a.member_id.clone(), a.kind, week)) {
                    continue;
                }
            }
            *counts.entry((a.member_id.clone(), a.kind)).or_insert(0) += 1;
        }

        let mut load_by_member: BTreeMap<String, u32> = roster
            .active_members()
            .map(|m| (m.id.clone(), 0))
            .collect();
        for ((member_id, _), count) in &counts {
            if let Some(load) = load_by_member.get_mut(member_id) {
                *load += count;
            }
        }

        let mut spread_by_kind = BTreeMap::new();
        for kind in TaskKind::ALL {
            let mut min = u32::MAX;
            let mut max = 0;
            for member in roster.active_members() {
                let count = counts
                    .get(&(member.id.clone(), kind))
                    .copied()
                    .unwrap_or(0);
                min = min.min(count);
                max = max.max(count);
            }
            if min == u32::MAX {
                min = 0;
            }
            spread_by_kind.insert(kind, LoadSpread { min, max });
        }

        let unfilled_slots = audit
            .entries()
            .iter()
            .filter(|e| e.chosen.is_none())
            .count();

        Self {
            assignment_count: schedule.active_assignments().count(),
            unfilled_slots,
            load_by_member,
            spread_by_kind,
        }
    }

    /// Largest spread across all kinds.
    pub fn max_spread(&self) -> u32 {
        self.spread_by_kind
            .values()
            .map(LoadSpread::spread)
            .max()
            .unwrap_or(0)
    }
}
