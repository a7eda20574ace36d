//! Swap and reassignment validation.
//!
//! Re-runs every hard constraint of an assignment's kind against a
//! proposed replacement member, using a context built from the schedule
//! minus the assignment under change (plus prior history). On success
//! the old row is superseded, a new active row is inserted, and the
//! ledger moves one count from the old member to the new one. On
//! failure the specific constraint is returned and nothing mutates.

use std::collections::BTreeSet;
use std::fmt;
use tracing::info;

use crate::audit::{AuditAction, AuditEntry, AuditLog, SlotKey};
use crate::config::SchedulingConfig;
use crate::eligibility::{Disqualifier, EligibilityFilter, RestState};
use crate::ledger::FairnessLedger;
use crate::models::{
    Assignment, AssignmentId, AssignmentStatus, Member, Roster, Schedule, SwapRequest,
    SwapStateError, TaskKind,
};
use crate::time::week_bucket;

/// Why a swap or reassignment was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapError {
    /// No assignment with that id.
    UnknownAssignment(AssignmentId),
    /// The assignment was already superseded.
    AssignmentInactive(AssignmentId),
    /// The proposed member is not on the roster.
    UnknownMember(String),
    /// The proposed member already holds the assignment.
    SameMember(String),
    /// The swap requester no longer holds the assignment.
    NotAssignmentHolder(String),
    /// Archived schedules are read-only.
    ScheduleArchived,
    /// A named hard constraint failed for the proposed member.
    Constraint(Disqualifier),
    /// The proposed member holds the paired weekly role.
    WeeklyDistinctness,
    /// The swap request was not awaiting an admin decision.
    Workflow(SwapStateError),
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::UnknownAssignment(id) => write!(f, "unknown assignment {id}"),
            SwapError::AssignmentInactive(id) => {
                write!(f, "assignment {id} is no longer active")
            }
            SwapError::UnknownMember(id) => write!(f, "unknown member '{id}'"),
            SwapError::SameMember(id) => {
                write!(f, "'{id}' already holds this assignment")
            }
            SwapError::NotAssignmentHolder(id) => {
                write!(f, "'{id}' does not hold this assignment")
            }
            SwapError::ScheduleArchived => f.write_str("schedule is archived"),
            SwapError::Constraint(d) => write!(f, "constraint violated: {d}"),
            SwapError::WeeklyDistinctness => {
                f.write_str("constraint violated: maker and checker must differ")
            }
            SwapError::Workflow(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SwapError {}

/// Read-only inputs shared by swap validation.
#[derive(Debug, Clone, Copy)]
pub struct SwapContext<'a> {
    /// Member snapshot.
    pub roster: &'a Roster,
    /// Scheduling rules.
    pub config: &'a SchedulingConfig,
    /// Active assignments outside this schedule (for rest and cooldown).
    pub history: &'a [Assignment],
}

impl<'a> SwapContext<'a> {
    /// Creates a context without outside history.
    pub fn new(roster: &'a Roster, config: &'a SchedulingConfig) -> Self {
        Self {
            roster,
            config,
            history: &[],
        }
    }

    /// Sets outside history.
    pub fn with_history(mut self, history: &'a [Assignment]) -> Self {
        self.history = history;
        self
    }

    /// Active rows in scope, excluding the assignment under change.
    fn rows_excluding<'s>(
        &'s self,
        schedule: &'s Schedule,
        target: &Assignment,
    ) -> Vec<&'s Assignment> {
        self.history
            .iter()
            .filter(|a| a.is_active())
            .chain(schedule.active_assignments())
            .filter(|a| !(a.schedule_id == target.schedule_id && a.id == target.id))
            .collect()
    }
}

/// Validates replacing `target`'s member with `proposed`.
fn validate_replacement(
    ctx: &SwapContext<'_>,
    schedule: &Schedule,
    target: &Assignment,
    proposed: &Member,
) -> Result<(), SwapError> {
    let filter = EligibilityFilter::new(ctx.roster, ctx.config);
    let rows = ctx.rows_excluding(schedule, target);
    let rest = RestState::from_assignments(rows.iter().copied(), ctx.config);

    if target.kind.is_atm() {
        let assigned_today: BTreeSet<String> = rows
            .iter()
            .filter(|a| a.date == target.date && a.kind.is_atm())
            .map(|a| a.member_id.clone())
            .collect();
        if let Some(d) =
            filter.atm_disqualifier(&rest, proposed, target.date, target.kind, &assigned_today)
        {
            return Err(SwapError::Constraint(d));
        }

        if target.kind.has_cooldown() {
            // The filter checks the gap to the last B-shift before the
            // date; a swap can also land before an existing B-shift.
            let cooldown = i64::from(ctx.config.atm_b_cooldown_days);
            let too_close = rows.iter().any(|a| {
                a.kind == target.kind
                    && a.member_id == proposed.id
                    && (a.date - target.date).num_days().abs() <= cooldown
            });
            if too_close {
                return Err(SwapError::Constraint(Disqualifier::Cooldown));
            }
        }

        if target.kind.triggers_rest() && ctx.config.atm_rest_rule_enabled {
            // Taking over a B-shift must not collide with the member's
            // own duty on the earned rest day.
            if let Some(rest_day) = ctx.config.rest_day_policy.rest_day_for(target.date) {
                let busy_on_rest_day = rows.iter().any(|a| {
                    a.date == rest_day && a.kind.is_atm() && a.member_id == proposed.id
                });
                if busy_on_rest_day {
                    return Err(SwapError::Constraint(Disqualifier::RestRule));
                }
            }
        }
    } else {
        let monday = target
            .week_start
            .unwrap_or_else(|| week_bucket(target.date).monday);
        let week = week_bucket(monday);
        if let Some(d) = filter.sysaid_disqualifier(&rest, proposed, &week) {
            return Err(SwapError::Constraint(d));
        }

        let paired = match target.kind {
            TaskKind::SysaidMaker => TaskKind::SysaidChecker,
            _ => TaskKind::SysaidMaker,
        };
        let holds_paired_role = rows.iter().any(|a| {
            a.kind == paired
                && a.member_id == proposed.id
                && a.week_start.unwrap_or_else(|| week_bucket(a.date).monday) == monday
        });
        if holds_paired_role {
            return Err(SwapError::WeeklyDistinctness);
        }
    }

    Ok(())
}

fn apply_change(
    action: AuditAction,
    ctx: &SwapContext<'_>,
    schedule: &mut Schedule,
    assignment_id: AssignmentId,
    proposed_member_id: &str,
    ledger: &mut FairnessLedger,
    audit: &mut AuditLog,
) -> Result<AssignmentId, SwapError> {
    if !schedule.allows_change() {
        return Err(SwapError::ScheduleArchived);
    }

    let target = schedule
        .assignment(assignment_id)
        .ok_or(SwapError::UnknownAssignment(assignment_id))?;
    if !target.is_active() {
        return Err(SwapError::AssignmentInactive(assignment_id));
    }
    if target.member_id == proposed_member_id {
        return Err(SwapError::SameMember(proposed_member_id.to_string()));
    }
    let proposed = ctx
        .roster
        .member(proposed_member_id)
        .ok_or_else(|| SwapError::UnknownMember(proposed_member_id.to_string()))?;

    let target = target.clone();
    validate_replacement(ctx, schedule, &target, proposed)?;

    // All checks passed; mutate schedule and ledger together.
    let slot = SlotKey::Day(target.date);
    let replacement_id = schedule.next_assignment_id();
    if let Some(row) = schedule
        .assignments
        .iter_mut()
        .find(|a| a.id == assignment_id)
    {
        row.status = AssignmentStatus::Superseded;
    }
    let mut replacement = Assignment::new(
        replacement_id,
        schedule.id,
        target.date,
        target.kind,
        target.shift_label.clone(),
        proposed_member_id,
        target.created_on,
    );
    replacement.week_start = target.week_start;
    schedule.add_assignment(replacement);

    ledger.decrement(&target.member_id, target.kind);
    ledger.increment(proposed_member_id, target.kind);

    audit.push(AuditEntry::change(
        action,
        schedule.id,
        slot,
        target.kind,
        target.shift_label.clone(),
        &target.member_id,
        proposed_member_id,
    ));
    info!(
        assignment = assignment_id,
        from = %target.member_id,
        to = %proposed_member_id,
        ?action,
        "assignment replaced"
    );

    Ok(replacement_id)
}

/// Applies a peer swap to an assignment.
///
/// Returns the replacement assignment's id.
pub fn apply_swap(
    ctx: &SwapContext<'_>,
    schedule: &mut Schedule,
    assignment_id: AssignmentId,
    proposed_member_id: &str,
    ledger: &mut FairnessLedger,
    audit: &mut AuditLog,
) -> Result<AssignmentId, SwapError> {
    apply_change(
        AuditAction::Swap,
        ctx,
        schedule,
        assignment_id,
        proposed_member_id,
        ledger,
        audit,
    )
}

/// Applies an admin reassignment to an assignment.
pub fn apply_reassignment(
    ctx: &SwapContext<'_>,
    schedule: &mut Schedule,
    assignment_id: AssignmentId,
    proposed_member_id: &str,
    ledger: &mut FairnessLedger,
    audit: &mut AuditLog,
) -> Result<AssignmentId, SwapError> {
    apply_change(
        AuditAction::Reassign,
        ctx,
        schedule,
        assignment_id,
        proposed_member_id,
        ledger,
        audit,
    )
}

/// Admin approval of a peer-accepted swap request.
///
/// Validates and applies the swap, then records the approval. A
/// constraint failure leaves the request awaiting admin and the
/// schedule untouched.
pub fn approve_swap(
    swap: &mut SwapRequest,
    ctx: &SwapContext<'_>,
    schedule: &mut Schedule,
    ledger: &mut FairnessLedger,
    audit: &mut AuditLog,
) -> Result<AssignmentId, SwapError> {
    if swap.state() != crate::models::SwapState::AwaitingAdmin {
        return Err(SwapError::Workflow(SwapStateError {
            state: swap.state(),
            attempted: "approve",
        }));
    }

    let target = schedule
        .assignment(swap.assignment_id)
        .ok_or(SwapError::UnknownAssignment(swap.assignment_id))?;
    if target.member_id != swap.requested_by {
        return Err(SwapError::NotAssignmentHolder(swap.requested_by.clone()));
    }

    let proposed = swap.proposed_member_id.clone();
    let replacement_id = apply_change(
        AuditAction::Swap,
        ctx,
        schedule,
        swap.assignment_id,
        &proposed,
        ledger,
        audit,
    )?;
    swap.admin_approve().map_err(SwapError::Workflow)?;
    Ok(replacement_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleStatus, UnavailablePeriod};
    use crate::time::WeekdaySet;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn team() -> Roster {
        Roster::new(
            vec![
                Member::new("alice", "Alice"),
                Member::new("bob", "Bob"),
                Member::new("carol", "Carol"),
                Member::new("dave", "Dave").with_office_days(WeekdaySet::EMPTY),
            ],
            vec![UnavailablePeriod::single_day("carol", d(2025, 1, 8))],
        )
    }

    /// Mon 2025-01-06 .. Wed 2025-01-08 with a fixed cast:
    /// Mon: alice Morning, bob Mid/Night; Tue: carol Morning, alice Mid/Night
    fn sample_schedule() -> Schedule {
        let created = d(2025, 1, 6);
        let mut s = Schedule::new(1, d(2025, 1, 6), d(2025, 1, 8), 42, 1, created);
        s.add_assignment(Assignment::new(
            1, 1, d(2025, 1, 6), TaskKind::AtmMorning, "Morning", "alice", created,
        ));
        s.add_assignment(Assignment::new(
            2, 1, d(2025, 1, 6), TaskKind::AtmMidnight, "Mid/Night", "bob", created,
        ));
        s.add_assignment(Assignment::new(
            3, 1, d(2025, 1, 7), TaskKind::AtmMorning, "Morning", "carol", created,
        ));
        s.add_assignment(Assignment::new(
            4, 1, d(2025, 1, 7), TaskKind::AtmMidnight, "Mid/Night", "alice", created,
        ));
        s
    }

    fn seeded_ledger(schedule: &Schedule) -> FairnessLedger {
        FairnessLedger::seeded_from(90, &schedule.assignments, schedule.end)
    }

    #[test]
    fn test_swap_to_same_day_assignee_rejected() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // Monday Morning (alice) -> bob, but bob already has Monday Mid/Night
        let err = apply_swap(&ctx, &mut schedule, 1, "bob", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::Constraint(Disqualifier::SameDayDuty));
        assert!(schedule.assignment(1).unwrap().is_active());
    }

    #[test]
    fn test_swap_onto_rest_day_rejected() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // Tuesday Morning (carol) -> bob, but bob rests Tuesday after
        // Monday's Mid/Night
        let err = apply_swap(&ctx, &mut schedule, 3, "bob", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::Constraint(Disqualifier::RestRule));
    }

    #[test]
    fn test_swap_midnight_within_cooldown_rejected() {
        let roster = team();
        let config = SchedulingConfig::default(); // cooldown 2
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        // Wednesday Mid/Night slot held by carol
        schedule.add_assignment(Assignment::new(
            5, 1, d(2025, 1, 8), TaskKind::AtmMidnight, "Mid/Night", "carol", d(2025, 1, 6),
        ));
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // bob's Monday Mid/Night is 2 days before Wednesday: inside cooldown
        let err = apply_swap(&ctx, &mut schedule, 5, "bob", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::Constraint(Disqualifier::Cooldown));
    }

    #[test]
    fn test_swap_midnight_rest_day_collision_rejected() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // Monday Mid/Night (bob) -> carol, but carol works Tuesday Morning,
        // which would be carol's earned rest day
        let err = apply_swap(&ctx, &mut schedule, 2, "carol", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::Constraint(Disqualifier::RestRule));
    }

    #[test]
    fn test_swap_to_unavailable_member_rejected() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        // Wednesday Morning held by bob
        schedule.add_assignment(Assignment::new(
            5, 1, d(2025, 1, 8), TaskKind::AtmMorning, "Morning", "bob", d(2025, 1, 6),
        ));
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // carol is away on the 8th
        let err = apply_swap(&ctx, &mut schedule, 5, "carol", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::Constraint(Disqualifier::Unavailability));
    }

    #[test]
    fn test_valid_swap_moves_ledger_and_supersedes() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        let before_alice = ledger.count("alice", TaskKind::AtmMorning);
        // Monday Morning (alice) -> carol (free that day)
        let new_id =
            apply_swap(&ctx, &mut schedule, 1, "carol", &mut ledger, &mut audit).unwrap();

        assert!(!schedule.assignment(1).unwrap().is_active());
        let replacement = schedule.assignment(new_id).unwrap();
        assert!(replacement.is_active());
        assert_eq!(replacement.member_id, "carol");
        assert_eq!(replacement.kind, TaskKind::AtmMorning);
        assert_eq!(replacement.date, d(2025, 1, 6));

        assert_eq!(ledger.count("alice", TaskKind::AtmMorning), before_alice - 1);
        // carol already held Tuesday Morning, so the swap brings her to 2
        assert_eq!(ledger.count("carol", TaskKind::AtmMorning), 2);

        let entry = audit.entries().last().unwrap();
        assert_eq!(entry.action, AuditAction::Swap);
        assert_eq!(entry.chosen.as_deref(), Some("carol"));
    }

    #[test]
    fn test_swap_round_trip_restores_state() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();
        let ledger_before = ledger.clone();
        let active_before: Vec<_> = schedule
            .assignments_sorted()
            .iter()
            .map(|a| (a.date, a.kind, a.shift_label.clone(), a.member_id.clone()))
            .collect();

        let swapped =
            apply_swap(&ctx, &mut schedule, 1, "carol", &mut ledger, &mut audit).unwrap();
        let _restored =
            apply_swap(&ctx, &mut schedule, swapped, "alice", &mut ledger, &mut audit).unwrap();

        assert_eq!(ledger, ledger_before);
        let active_after: Vec<_> = schedule
            .assignments_sorted()
            .iter()
            .map(|a| (a.date, a.kind, a.shift_label.clone(), a.member_id.clone()))
            .collect();
        assert_eq!(active_after, active_before);
    }

    #[test]
    fn test_weekly_distinctness_enforced() {
        let roster = team();
        let config = SchedulingConfig::default()
            .with_sysaid_required_office_days(WeekdaySet::EMPTY)
            .with_sysaid_week_days(WeekdaySet::MON_FRI);
        let ctx = SwapContext::new(&roster, &config);
        let created = d(2025, 1, 13);
        let mut schedule = Schedule::new(1, d(2025, 1, 13), d(2025, 1, 17), 1, 1, created);
        for (id, day) in (1u64..).zip([13u32, 14, 15, 16, 17]) {
            schedule.add_assignment(
                Assignment::new(
                    id * 2 - 1, 1, d(2025, 1, day), TaskKind::SysaidMaker, "", "alice", created,
                )
                .with_week_start(d(2025, 1, 13)),
            );
            schedule.add_assignment(
                Assignment::new(
                    id * 2, 1, d(2025, 1, day), TaskKind::SysaidChecker, "", "bob", created,
                )
                .with_week_start(d(2025, 1, 13)),
            );
        }
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // Maker row -> bob, who checks the same week
        let err = apply_swap(&ctx, &mut schedule, 1, "bob", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::WeeklyDistinctness);

        // Maker row -> carol is fine
        apply_swap(&ctx, &mut schedule, 1, "carol", &mut ledger, &mut audit).unwrap();
    }

    #[test]
    fn test_sysaid_office_day_check_on_swap() {
        let roster = team();
        let config = SchedulingConfig::default().with_sysaid_week_days(WeekdaySet::MON_FRI);
        let ctx = SwapContext::new(&roster, &config);
        let created = d(2025, 1, 13);
        let mut schedule = Schedule::new(1, d(2025, 1, 13), d(2025, 1, 17), 1, 1, created);
        schedule.add_assignment(
            Assignment::new(1, 1, d(2025, 1, 13), TaskKind::SysaidMaker, "", "alice", created)
                .with_week_start(d(2025, 1, 13)),
        );
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // dave has no office days at all
        let err = apply_swap(&ctx, &mut schedule, 1, "dave", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::Constraint(Disqualifier::OfficeDays));
    }

    #[test]
    fn test_structural_errors() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        assert_eq!(
            apply_swap(&ctx, &mut schedule, 99, "bob", &mut ledger, &mut audit).unwrap_err(),
            SwapError::UnknownAssignment(99)
        );
        assert_eq!(
            apply_swap(&ctx, &mut schedule, 1, "ghost", &mut ledger, &mut audit).unwrap_err(),
            SwapError::UnknownMember("ghost".to_string())
        );
        assert_eq!(
            apply_swap(&ctx, &mut schedule, 1, "alice", &mut ledger, &mut audit).unwrap_err(),
            SwapError::SameMember("alice".to_string())
        );

        schedule.status = ScheduleStatus::Archived;
        assert_eq!(
            apply_swap(&ctx, &mut schedule, 1, "carol", &mut ledger, &mut audit).unwrap_err(),
            SwapError::ScheduleArchived
        );
    }

    #[test]
    fn test_superseded_assignment_cannot_swap_again() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        apply_swap(&ctx, &mut schedule, 1, "carol", &mut ledger, &mut audit).unwrap();
        let err = apply_swap(&ctx, &mut schedule, 1, "bob", &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::AssignmentInactive(1));
    }

    #[test]
    fn test_reassignment_audit_tag() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        apply_reassignment(&ctx, &mut schedule, 1, "carol", &mut ledger, &mut audit).unwrap();
        assert_eq!(audit.entries()[0].action, AuditAction::Reassign);
    }

    #[test]
    fn test_approve_swap_workflow() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        let mut swap = SwapRequest::new(1, 1, "alice", "carol");
        // Not yet peer-accepted
        assert!(matches!(
            approve_swap(&mut swap, &ctx, &mut schedule, &mut ledger, &mut audit),
            Err(SwapError::Workflow(_))
        ));

        swap.peer_accept().unwrap();
        let new_id =
            approve_swap(&mut swap, &ctx, &mut schedule, &mut ledger, &mut audit).unwrap();
        assert_eq!(swap.state(), crate::models::SwapState::Applied);
        assert_eq!(schedule.assignment(new_id).unwrap().member_id, "carol");
    }

    #[test]
    fn test_approve_swap_constraint_failure_leaves_request_pending() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // bob already holds Monday Mid/Night; swap must fail validation
        let mut swap = SwapRequest::new(1, 1, "alice", "bob");
        swap.peer_accept().unwrap();
        let err =
            approve_swap(&mut swap, &ctx, &mut schedule, &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::Constraint(Disqualifier::SameDayDuty));
        assert_eq!(swap.state(), crate::models::SwapState::AwaitingAdmin);
        assert!(schedule.assignment(1).unwrap().is_active());
    }

    #[test]
    fn test_approve_swap_requires_current_holder() {
        let roster = team();
        let config = SchedulingConfig::default();
        let ctx = SwapContext::new(&roster, &config);
        let mut schedule = sample_schedule();
        let mut ledger = seeded_ledger(&schedule);
        let mut audit = AuditLog::new();

        // bob proposes a swap of alice's assignment
        let mut swap = SwapRequest::new(1, 1, "bob", "carol");
        swap.peer_accept().unwrap();
        let err =
            approve_swap(&mut swap, &ctx, &mut schedule, &mut ledger, &mut audit).unwrap_err();
        assert_eq!(err, SwapError::NotAssignmentHolder("bob".to_string()));
    }
}
