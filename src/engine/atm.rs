//! Daily ATM scheduling pass.
//!
//! Walks the date range front-to-back. Each day fills the weekday's
//! shifts in plan order, picking `required_count` distinct assignees per
//! shift; a B-shift flags the member's rest day and starts its cooldown,
//! which constrains every later day and the SysAid pass. An unfillable
//! slot is a warning, never an error.

use chrono::Datelike;
use std::collections::BTreeSet;
use tracing::{debug, warn};

use super::{CancelToken, GenerateError, GenerationCtx};
use crate::audit::{AuditEntry, SlotKey};
use crate::config::SchedulingConfig;
use crate::eligibility::EligibilityFilter;
use crate::models::{Assignment, DayShiftPlan, Roster};
use crate::selector::Selector;
use crate::time::iter_days;

pub(crate) fn run_atm(
    roster: &Roster,
    config: &SchedulingConfig,
    plan: &DayShiftPlan,
    ctx: &mut GenerationCtx,
    cancel: &CancelToken,
) -> Result<(), GenerateError> {
    let filter = EligibilityFilter::new(roster, config);

    for date in iter_days(ctx.schedule.start, ctx.schedule.end) {
        if cancel.is_cancelled() {
            return Err(GenerateError::Cancelled);
        }

        let mut assigned_today: BTreeSet<String> = BTreeSet::new();

        for shift in plan.shifts_for(date.weekday()) {
            for _ in 0..shift.required_count {
                let candidates =
                    filter.atm_candidates(&ctx.rest, date, shift.kind, &assigned_today);
                let selector = Selector::new(&ctx.ledger, ctx.seed, ctx.aggressiveness);
                let slot = SlotKey::Day(date);

                let Some(selection) = selector.select(&candidates, shift.kind, &slot) else {
                    warn!(%date, kind = %shift.kind, label = %shift.label, "slot unfilled");
                    ctx.audit.push(AuditEntry::skipped(
                        ctx.schedule.id,
                        slot,
                        shift.kind,
                        &shift.label,
                        format!(
                            "no eligible member for {} {} on {}",
                            shift.kind, shift.label, date
                        ),
                    ));
                    continue;
                };

                let member_id = selection.member_id.clone();
                debug!(%date, kind = %shift.kind, member = %member_id, "slot filled");

                let id = ctx.take_id();
                ctx.schedule.add_assignment(Assignment::new(
                    id,
                    ctx.schedule.id,
                    date,
                    shift.kind,
                    shift.label.as_str(),
                    member_id.as_str(),
                    ctx.schedule.created_on,
                ));
                ctx.ledger.increment(&member_id, shift.kind);
                if shift.kind.triggers_rest() {
                    ctx.rest.record_b_shift(&member_id, date, config);
                }
                assigned_today.insert(member_id.clone());

                ctx.audit.push(AuditEntry::selection(
                    ctx.schedule.id,
                    slot,
                    shift.kind,
                    &shift.label,
                    member_id,
                    selection.ranked,
                    selection.reason,
                ));
            }
        }
    }

    Ok(())
}
