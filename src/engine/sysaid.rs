//! Weekly SysAid scheduling pass.
//!
//! Buckets the range into Monday-keyed weeks and assigns a maker and a
//! checker per week. Eligibility reads the rest flags the ATM pass just
//! produced: a member resting any day of the week's span is out. Rows
//! are emitted per assigned day but the ledger counts each role once
//! per week. A week with fewer than two eligible members skips both
//! roles with a warning.

use tracing::{debug, warn};

use super::{CancelToken, GenerateError, GenerationCtx};
use crate::audit::{AuditEntry, SlotKey};
use crate::config::SchedulingConfig;
use crate::eligibility::EligibilityFilter;
use crate::models::{Assignment, Roster, TaskKind};
use crate::selector::Selector;
use crate::time::{add_days, week_bucket, WeekBucket};

pub(crate) fn run_sysaid(
    roster: &Roster,
    config: &SchedulingConfig,
    ctx: &mut GenerationCtx,
    cancel: &CancelToken,
) -> Result<(), GenerateError> {
    let filter = EligibilityFilter::new(roster, config);

    let mut monday = week_bucket(ctx.schedule.start).monday;
    while monday <= ctx.schedule.end {
        if cancel.is_cancelled() {
            return Err(GenerateError::Cancelled);
        }

        let week = WeekBucket {
            monday,
            saturday: add_days(monday, 5),
        };
        schedule_week(&filter, config, ctx, &week);
        monday = add_days(monday, 7);
    }

    Ok(())
}

fn schedule_week(
    filter: &EligibilityFilter<'_>,
    config: &SchedulingConfig,
    ctx: &mut GenerationCtx,
    week: &WeekBucket,
) {
    let slot = SlotKey::Week(week.monday);
    let candidates = filter.sysaid_candidates(&ctx.rest, week, None);

    if candidates.len() < 2 {
        warn!(week = %week.monday, found = candidates.len(), "SysAid week skipped");
        for kind in [TaskKind::SysaidMaker, TaskKind::SysaidChecker] {
            ctx.audit.push(AuditEntry::skipped(
                ctx.schedule.id,
                slot,
                kind,
                "",
                format!(
                    "insufficient eligible members for SysAid week {} (need 2, found {})",
                    week.monday,
                    candidates.len()
                ),
            ));
        }
        return;
    }

    let selector = Selector::new(&ctx.ledger, ctx.seed, ctx.aggressiveness);
    let Some(maker) = selector.select(&candidates, TaskKind::SysaidMaker, &slot) else {
        return;
    };

    let remaining = filter.sysaid_candidates(&ctx.rest, week, Some(&maker.member_id));
    let selector = Selector::new(&ctx.ledger, ctx.seed, ctx.aggressiveness);
    let Some(checker) = selector.select(&remaining, TaskKind::SysaidChecker, &slot) else {
        return;
    };

    debug!(
        week = %week.monday,
        maker = %maker.member_id,
        checker = %checker.member_id,
        "SysAid week assigned"
    );

    // Per-day rows, clamped to the schedule range; weekly roles count
    // once per week in the ledger.
    for day in filter.sysaid_span(week) {
        if day < ctx.schedule.start || day > ctx.schedule.end {
            continue;
        }
        for (kind, member_id) in [
            (TaskKind::SysaidMaker, maker.member_id.as_str()),
            (TaskKind::SysaidChecker, checker.member_id.as_str()),
        ] {
            let id = ctx.take_id();
            ctx.schedule.add_assignment(
                Assignment::new(
                    id,
                    ctx.schedule.id,
                    day,
                    kind,
                    "",
                    member_id,
                    ctx.schedule.created_on,
                )
                .with_week_start(week.monday),
            );
        }
    }
    ctx.ledger.increment(&maker.member_id, TaskKind::SysaidMaker);
    ctx.ledger
        .increment(&checker.member_id, TaskKind::SysaidChecker);

    ctx.audit.push(AuditEntry::selection(
        ctx.schedule.id,
        slot,
        TaskKind::SysaidMaker,
        "",
        maker.member_id.clone(),
        maker.ranked,
        maker.reason,
    ));
    ctx.audit.push(AuditEntry::selection(
        ctx.schedule.id,
        slot,
        TaskKind::SysaidChecker,
        "",
        checker.member_id.clone(),
        checker.ranked,
        checker.reason,
    ));
}
