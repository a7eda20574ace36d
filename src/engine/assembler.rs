//! Schedule assembly.
//!
//! Single entry point for generation: validate inputs, claim the team
//! lock, seed the fairness ledger and rest state from history, run the
//! ATM pass then the SysAid pass, and hand back the draft schedule with
//! its audit log and fairness snapshot. The caller persists all of it
//! atomically or none of it.

use chrono::NaiveDate;
use rand::Rng;
use std::fmt;
use tracing::info;

use super::atm::run_atm;
use super::lock::GenerationLock;
use super::sysaid::run_sysaid;
use super::{CancelToken, GenerationCtx};
use crate::audit::AuditLog;
use crate::config::SchedulingConfig;
use crate::eligibility::RestState;
use crate::ledger::{FairnessCount, FairnessLedger};
use crate::models::{Assignment, DayShiftPlan, Roster, Schedule, ScheduleId};
use crate::validation::{validate_inputs, InputError};

/// Parameters of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Identifier for the produced schedule (from the caller's store).
    pub schedule_id: ScheduleId,
    /// First day to schedule.
    pub start: NaiveDate,
    /// Last day to schedule, inclusive.
    pub end: NaiveDate,
    /// Tie-break seed; drawn randomly when absent and recorded on the
    /// schedule either way.
    pub seed: Option<u64>,
    /// Fairness aggressiveness (1..=5); the config default when absent.
    pub aggressiveness: Option<u8>,
    /// Generation date; defaults to `start`. Ends the ledger seeding
    /// window and stamps created-on fields.
    pub as_of: Option<NaiveDate>,
}

impl GenerationRequest {
    /// Creates a request for `[start, end]` with schedule id 1.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            schedule_id: 1,
            start,
            end,
            seed: None,
            aggressiveness: None,
            as_of: None,
        }
    }

    /// Sets the schedule id.
    pub fn with_schedule_id(mut self, id: ScheduleId) -> Self {
        self.schedule_id = id;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the aggressiveness level.
    pub fn with_aggressiveness(mut self, level: u8) -> Self {
        self.aggressiveness = Some(level);
        self
    }

    /// Sets the generation date.
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }
}

/// Everything one generation produces.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The draft schedule with its assignments.
    pub schedule: Schedule,
    /// The decision log.
    pub audit: AuditLog,
    /// Fairness snapshot to write back, windowed to the schedule end.
    pub fairness: Vec<FairnessCount>,
    /// All warnings, in decision order.
    pub warnings: Vec<String>,
}

/// Why a generation produced nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Inputs failed validation; nothing was written.
    Invalid(Vec<InputError>),
    /// Another generation holds the team lock. Retryable.
    ConcurrentGeneration(String),
    /// The cancel token fired between batches.
    Cancelled,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Invalid(errors) => {
                write!(f, "invalid generation inputs: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    e.fmt(f)?;
                }
                Ok(())
            }
            GenerateError::ConcurrentGeneration(team) => {
                write!(f, "a generation for team '{team}' is already in flight")
            }
            GenerateError::Cancelled => f.write_str("generation cancelled"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Drives the two scheduling passes over a roster snapshot.
pub struct Assembler<'a> {
    roster: &'a Roster,
    config: &'a SchedulingConfig,
    plan: DayShiftPlan,
    history: &'a [Assignment],
    lock: Option<(&'a GenerationLock, String)>,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler with the canonical shift plan and no history.
    pub fn new(roster: &'a Roster, config: &'a SchedulingConfig) -> Self {
        Self {
            roster,
            config,
            plan: DayShiftPlan::canonical(),
            history: &[],
            lock: None,
        }
    }

    /// Replaces the shift plan.
    pub fn with_plan(mut self, plan: DayShiftPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Sets prior assignments for ledger seeding and rest/cooldown carry-over.
    pub fn with_history(mut self, history: &'a [Assignment]) -> Self {
        self.history = history;
        self
    }

    /// Guards generation with an advisory per-team lock.
    pub fn with_lock(mut self, lock: &'a GenerationLock, team: impl Into<String>) -> Self {
        self.lock = Some((lock, team.into()));
        self
    }

    /// Generates a draft schedule.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutcome, GenerateError> {
        self.generate_cancellable(request, &CancelToken::new())
    }

    /// Generates a draft schedule, checking `cancel` between days and weeks.
    pub fn generate_cancellable(
        &self,
        request: &GenerationRequest,
        cancel: &CancelToken,
    ) -> Result<GenerationOutcome, GenerateError> {
        let aggressiveness = request
            .aggressiveness
            .unwrap_or(self.config.default_aggressiveness);

        validate_inputs(
            self.roster,
            self.history,
            request.start,
            request.end,
            aggressiveness,
        )
        .map_err(GenerateError::Invalid)?;

        let _guard = match &self.lock {
            Some((lock, team)) => Some(
                lock.try_acquire(team)
                    .ok_or_else(|| GenerateError::ConcurrentGeneration(team.clone()))?,
            ),
            None => None,
        };

        let seed = request.seed.unwrap_or_else(|| rand::rng().random());
        let as_of = request.as_of.unwrap_or(request.start);

        info!(
            schedule_id = request.schedule_id,
            start = %request.start,
            end = %request.end,
            seed,
            aggressiveness,
            "generating roster"
        );

        let mut ctx = GenerationCtx {
            schedule: Schedule::new(
                request.schedule_id,
                request.start,
                request.end,
                seed,
                aggressiveness,
                as_of,
            ),
            ledger: FairnessLedger::seeded_from(
                self.config.fairness_window_days,
                self.history,
                as_of,
            ),
            audit: AuditLog::new(),
            rest: RestState::from_assignments(self.history, self.config),
            seed,
            aggressiveness,
            next_id: 1,
        };

        run_atm(self.roster, self.config, &self.plan, &mut ctx, cancel)?;
        run_sysaid(self.roster, self.config, &mut ctx, cancel)?;

        let warnings = ctx.audit.warnings();
        let fairness = ctx.ledger.snapshot(request.end);
        info!(
            schedule_id = ctx.schedule.id,
            assignments = ctx.schedule.assignments.len(),
            warnings = warnings.len(),
            "generation complete"
        );

        Ok(GenerationOutcome {
            schedule: ctx.schedule,
            audit: ctx.audit,
            fairness,
            warnings,
        })
    }
}
