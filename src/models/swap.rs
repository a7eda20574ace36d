//! Swap request workflow.
//!
//! A member proposes handing one of their assignments to a peer. The
//! peer decides first, then an admin. The effective state is a pure
//! function of the two decisions:
//!
//! | peer | admin | state |
//! |------|-------|-------|
//! | pending | pending | awaiting peer |
//! | accepted | pending | awaiting admin |
//! | rejected | any | rejected (terminal) |
//! | accepted | approved | applied |
//! | accepted | rejected | rejected (terminal) |
//!
//! Applying the assignment mutation itself is the swap validator's job
//! (`engine::swap`); this model only tracks the decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AssignmentId;

/// The proposed peer's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerDecision {
    /// Not yet answered.
    #[default]
    Pending,
    /// Peer agreed to take the duty.
    Accepted,
    /// Peer declined.
    Rejected,
}

/// The admin's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminDecision {
    /// Not yet answered.
    #[default]
    Pending,
    /// Admin approved the swap.
    Approved,
    /// Admin rejected the swap.
    Rejected,
}

/// Effective state derived from the two decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapState {
    /// Waiting for the proposed peer.
    AwaitingPeer,
    /// Peer accepted; waiting for an admin.
    AwaitingAdmin,
    /// Terminal; no assignment or ledger change happened.
    Rejected,
    /// Peer accepted and admin approved; the swap may be applied.
    Applied,
}

/// Error returned when a decision arrives in the wrong state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapStateError {
    /// State the request was in.
    pub state: SwapState,
    /// What was attempted.
    pub attempted: &'static str,
}

impl fmt::Display for SwapStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} a swap in state {:?}", self.attempted, self.state)
    }
}

impl std::error::Error for SwapStateError {}

/// A request to replace the assignee of one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Identifier assigned by the caller's store.
    pub id: u64,
    /// Assignment whose member would change.
    pub assignment_id: AssignmentId,
    /// Member who currently holds the assignment.
    pub requested_by: String,
    /// Member who would take it over.
    pub proposed_member_id: String,
    /// Optional free-text reason.
    pub reason: Option<String>,
    /// Peer decision.
    pub peer_decision: PeerDecision,
    /// Admin decision.
    pub admin_decision: AdminDecision,
}

impl SwapRequest {
    /// Creates a pending request.
    pub fn new(
        id: u64,
        assignment_id: AssignmentId,
        requested_by: impl Into<String>,
        proposed_member_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            assignment_id,
            requested_by: requested_by.into(),
            proposed_member_id: proposed_member_id.into(),
            reason: None,
            peer_decision: PeerDecision::Pending,
            admin_decision: AdminDecision::Pending,
        }
    }

    /// Sets the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Effective state per the decision matrix.
    pub fn state(&self) -> SwapState {
        match (self.peer_decision, self.admin_decision) {
            (PeerDecision::Rejected, _) => SwapState::Rejected,
            (PeerDecision::Pending, _) => SwapState::AwaitingPeer,
            (PeerDecision::Accepted, AdminDecision::Pending) => SwapState::AwaitingAdmin,
            (PeerDecision::Accepted, AdminDecision::Approved) => SwapState::Applied,
            (PeerDecision::Accepted, AdminDecision::Rejected) => SwapState::Rejected,
        }
    }

    /// Records the peer accepting.
    pub fn peer_accept(&mut self) -> Result<(), SwapStateError> {
        self.expect_state(SwapState::AwaitingPeer, "peer-accept")?;
        self.peer_decision = PeerDecision::Accepted;
        Ok(())
    }

    /// Records the peer declining. Terminal.
    pub fn peer_reject(&mut self) -> Result<(), SwapStateError> {
        self.expect_state(SwapState::AwaitingPeer, "peer-reject")?;
        self.peer_decision = PeerDecision::Rejected;
        Ok(())
    }

    /// Records admin approval. The caller then applies the swap through
    /// the validator; on a constraint failure it should roll this back.
    pub fn admin_approve(&mut self) -> Result<(), SwapStateError> {
        self.expect_state(SwapState::AwaitingAdmin, "approve")?;
        self.admin_decision = AdminDecision::Approved;
        Ok(())
    }

    /// Records admin rejection. Terminal.
    pub fn admin_reject(&mut self) -> Result<(), SwapStateError> {
        self.expect_state(SwapState::AwaitingAdmin, "reject")?;
        self.admin_decision = AdminDecision::Rejected;
        Ok(())
    }

    fn expect_state(
        &self,
        expected: SwapState,
        attempted: &'static str,
    ) -> Result<(), SwapStateError> {
        let state = self.state();
        if state != expected {
            return Err(SwapStateError { state, attempted });
        }
        Ok(())
    }
}
