//! Hard-constraint filtering of candidates.
//!
//! Produces the candidate set for a (date, kind) or (week, kind) slot.
//! Soft ordering is the selector's job; everything here is a hard drop,
//! and each drop names the constraint so the swap validator can reuse
//! the same checks and report the failing one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::config::SchedulingConfig;
use crate::models::{Assignment, Member, Roster, TaskKind};
use crate::time::{add_days, WeekBucket};

/// The constraint that removed a member from a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disqualifier {
    /// Member is deactivated.
    Inactive,
    /// Member has an unavailable period covering the slot.
    Unavailability,
    /// Member is resting after a B-shift.
    RestRule,
    /// Member's last B-shift is too recent.
    Cooldown,
    /// Member already holds an ATM shift that day.
    SameDayDuty,
    /// Member's office days do not cover the required set.
    OfficeDays,
}

impl fmt::Display for Disqualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Disqualifier::Inactive => "inactive",
            Disqualifier::Unavailability => "unavailability",
            Disqualifier::RestRule => "rest-rule",
            Disqualifier::Cooldown => "cooldown",
            Disqualifier::SameDayDuty => "same-day distinctness",
            Disqualifier::OfficeDays => "office-day",
        };
        f.write_str(text)
    }
}

/// Rest and cooldown bookkeeping local to one generation.
///
/// Never shared between generations; the ATM phase writes it and the
/// SysAid phase (and swap validation) read it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestState {
    rest_days: BTreeMap<String, BTreeSet<NaiveDate>>,
    last_midnight: BTreeMap<String, NaiveDate>,
}

impl RestState {
    /// Creates empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays active B-shift assignments into rest and cooldown state.
    ///
    /// Used to seed a generation from history, and by the swap validator
    /// to rebuild context from a schedule minus the assignment under
    /// change.
    pub fn from_assignments<'a>(
        assignments: impl IntoIterator<Item = &'a Assignment>,
        config: &SchedulingConfig,
    ) -> Self {
        let mut state = Self::new();
        for a in assignments {
            if a.is_active() && a.kind.triggers_rest() {
                state.record_b_shift(&a.member_id, a.date, config);
            }
        }
        state
    }

    /// Records a B-shift: updates the cooldown date and, when the rest
    /// rule is on, flags the policy's rest day.
    pub fn record_b_shift(&mut self, member_id: &str, date: NaiveDate, config: &SchedulingConfig) {
        let last = self
            .last_midnight
            .entry(member_id.to_string())
            .or_insert(date);
        if date > *last {
            *last = date;
        }
        if config.atm_rest_rule_enabled {
            if let Some(rest_day) = config.rest_day_policy.rest_day_for(date) {
                self.rest_days
                    .entry(member_id.to_string())
                    .or_default()
                    .insert(rest_day);
            }
        }
    }

    /// Whether the member rests on `date`.
    pub fn is_resting(&self, member_id: &str, date: NaiveDate) -> bool {
        self.rest_days
            .get(member_id)
            .is_some_and(|days| days.contains(&date))
    }

    /// Whether any rest day of the member falls on one of `days`.
    pub fn rests_during(
        &self,
        member_id: &str,
        days: impl IntoIterator<Item = NaiveDate>,
    ) -> bool {
        days.into_iter().any(|d| self.is_resting(member_id, d))
    }

    /// The member's most recent recorded B-shift date.
    pub fn last_b_shift(&self, member_id: &str) -> Option<NaiveDate> {
        self.last_midnight.get(member_id).copied()
    }

    /// Whether a B-shift on `date` would violate the cooldown.
    pub fn in_cooldown(&self, member_id: &str, date: NaiveDate, cooldown_days: u32) -> bool {
        self.last_b_shift(member_id)
            .is_some_and(|last| date > last && date <= add_days(last, i64::from(cooldown_days)))
    }
}

/// Builds candidate sets from the hard constraints.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityFilter<'a> {
    roster: &'a Roster,
    config: &'a SchedulingConfig,
}

impl<'a> EligibilityFilter<'a> {
    /// Creates a filter over a roster snapshot.
    pub fn new(roster: &'a Roster, config: &'a SchedulingConfig) -> Self {
        Self { roster, config }
    }

    /// First constraint that removes `member` from an ATM slot, if any.
    ///
    /// `assigned_today` holds members already on an ATM shift that date.
    pub fn atm_disqualifier(
        &self,
        rest: &RestState,
        member: &Member,
        date: NaiveDate,
        kind: TaskKind,
        assigned_today: &BTreeSet<String>,
    ) -> Option<Disqualifier> {
        if !member.active {
            return Some(Disqualifier::Inactive);
        }
        if !self.roster.is_available(&member.id, date) {
            return Some(Disqualifier::Unavailability);
        }
        if rest.is_resting(&member.id, date) {
            return Some(Disqualifier::RestRule);
        }
        if kind.has_cooldown()
            && rest.in_cooldown(&member.id, date, self.config.atm_b_cooldown_days)
        {
            return Some(Disqualifier::Cooldown);
        }
        if assigned_today.contains(&member.id) {
            return Some(Disqualifier::SameDayDuty);
        }
        None
    }

    /// Candidate ids for an ATM slot, in roster order.
    pub fn atm_candidates(
        &self,
        rest: &RestState,
        date: NaiveDate,
        kind: TaskKind,
        assigned_today: &BTreeSet<String>,
    ) -> Vec<String> {
        self.roster
            .active_members()
            .filter(|m| {
                self.atm_disqualifier(rest, m, date, kind, assigned_today)
                    .is_none()
            })
            .map(|m| m.id.clone())
            .collect()
    }

    /// Days of the week's assignable span, per the configured week days.
    pub fn sysaid_span(&self, week: &WeekBucket) -> Vec<NaiveDate> {
        self.config
            .sysaid_week_days
            .iter()
            .map(|day| add_days(week.monday, i64::from(day.num_days_from_monday())))
            .collect()
    }

    /// First constraint that removes `member` from a SysAid week, if any.
    pub fn sysaid_disqualifier(
        &self,
        rest: &RestState,
        member: &Member,
        week: &WeekBucket,
    ) -> Option<Disqualifier> {
        if !member.active {
            return Some(Disqualifier::Inactive);
        }
        if !member
            .office_days
            .is_superset_of(self.config.sysaid_required_office_days)
        {
            return Some(Disqualifier::OfficeDays);
        }
        let span = self.sysaid_span(week);
        if !self
            .roster
            .is_available_all(&member.id, span.iter().copied())
        {
            return Some(Disqualifier::Unavailability);
        }
        if rest.rests_during(&member.id, span) {
            return Some(Disqualifier::RestRule);
        }
        None
    }

    /// Candidate ids for a SysAid week, in roster order.
    ///
    /// `exclude` removes the already-chosen maker when picking a checker.
    pub fn sysaid_candidates(
        &self,
        rest: &RestState,
        week: &WeekBucket,
        exclude: Option<&str>,
    ) -> Vec<String> {
        self.roster
            .active_members()
            .filter(|m| Some(m.id.as_str()) != exclude)
            .filter(|m| self.sysaid_disqualifier(rest, m, week).is_none())
            .map(|m| m.id.clone())
            .collect()
    }
}
