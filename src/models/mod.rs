//! Roster domain models.
//!
//! Core data types for duty scheduling: who can work ([`Member`],
//! [`UnavailablePeriod`], [`Roster`]), what the work is ([`TaskKind`],
//! [`Shift`], [`DayShiftPlan`]), and what was decided ([`Assignment`],
//! [`Schedule`], [`SwapRequest`]).

mod assignment;
mod member;
mod roster;
mod schedule;
mod shift;
mod swap;
mod task_kind;

pub use assignment::{Assignment, AssignmentId, AssignmentStatus, ScheduleId};
pub use member::{Member, Role, UnavailablePeriod};
pub use roster::Roster;
pub use schedule::{Schedule, ScheduleStatus, StatusTransitionError};
pub use shift::{DayShiftPlan, Shift};
pub use swap::{
    AdminDecision, PeerDecision, SwapRequest, SwapState, SwapStateError,
};
pub use task_kind::{Cadence, TaskKind};
