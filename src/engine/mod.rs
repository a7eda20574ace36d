//! Generation engine.
//!
//! The assembler drives the ATM scheduler, then the SysAid scheduler,
//! over one shared generation context (schedule under construction,
//! fairness ledger, audit log, rest state). Generation is single-pass
//! and front-to-back: day N reads rest and cooldown state produced by
//! day N-1, so days are never parallelised. Cancellation is cooperative
//! at day and week boundaries.
//!
//! Swap and reassignment validation for existing schedules lives in
//! `swap`; the advisory per-team lock in `lock`.

mod assembler;
mod atm;
mod lock;
mod swap;
mod sysaid;

pub use assembler::{Assembler, GenerateError, GenerationOutcome, GenerationRequest};
pub use lock::{GenerationLock, LockGuard};
pub use swap::{apply_reassignment, apply_swap, approve_swap, SwapContext, SwapError};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::audit::AuditLog;
use crate::eligibility::RestState;
use crate::ledger::FairnessLedger;
use crate::models::{AssignmentId, Schedule};

/// Cooperative cancellation flag.
///
/// Checked between days and between weeks. A cancelled generation
/// returns [`GenerateError::Cancelled`] and hands nothing back for
/// persistence.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Mutable state threaded through one generation.
pub(crate) struct GenerationCtx {
    pub(crate) schedule: Schedule,
    pub(crate) ledger: FairnessLedger,
    pub(crate) audit: AuditLog,
    pub(crate) rest: RestState,
    pub(crate) seed: u64,
    pub(crate) aggressiveness: u8,
    pub(crate) next_id: AssignmentId,
}

impl GenerationCtx {
    pub(crate) fn take_id(&mut self) -> AssignmentId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
