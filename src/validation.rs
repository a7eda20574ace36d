//! Input validation for generation requests.
//!
//! Checks structural integrity of the roster snapshot and request before
//! any assignment is produced. Detects:
//! - Reversed date ranges
//! - Duplicate member IDs
//! - Unavailability or history rows referencing unknown members
//! - Out-of-range aggressiveness levels
//!
//! Validation failures abort a generation before any write; they are the
//! only synchronous errors besides lock contention (warnings never fail
//! a generation).

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

use crate::models::{Assignment, Roster};

/// Validation result.
pub type ValidationResult = Result<(), Vec<InputError>>;

/// A rejected input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    /// `end` precedes `start`.
    EmptyDateRange,
    /// Two members share an ID.
    DuplicateMember,
    /// A row references a member the roster does not know.
    UnknownMember,
    /// Aggressiveness outside 1..=5.
    InvalidAggressiveness,
}

impl InputError {
    fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InputError {}

/// Bounds of the aggressiveness knob.
pub const AGGRESSIVENESS_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Validates a generation's inputs.
///
/// Checks:
/// 1. `start <= end`
/// 2. No duplicate member IDs in the roster
/// 3. Every unavailable period references a known member
/// 4. Every history assignment references a known member
/// 5. Aggressiveness is within 1..=5
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_inputs(
    roster: &Roster,
    history: &[Assignment],
    start: NaiveDate,
    end: NaiveDate,
    aggressiveness: u8,
) -> ValidationResult {
    let mut errors = Vec::new();

    if end < start {
        errors.push(InputError::new(
            InputErrorKind::EmptyDateRange,
            format!("end date {end} precedes start date {start}"),
        ));
    }

    let mut member_ids = HashSet::new();
    for member in roster.members() {
        if !member_ids.insert(member.id.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateMember,
                format!("duplicate member ID: {}", member.id),
            ));
        }
    }

    for period in roster.unavailable_periods() {
        if !member_ids.contains(period.member_id.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::UnknownMember,
                format!(
                    "unavailable period {}..{} references unknown member '{}'",
                    period.start, period.end, period.member_id
                ),
            ));
        }
    }

    for assignment in history {
        if !member_ids.contains(assignment.member_id.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::UnknownMember,
                format!(
                    "history assignment {} references unknown member '{}'",
                    assignment.id, assignment.member_id
                ),
            ));
        }
    }

    if !AGGRESSIVENESS_RANGE.contains(&aggressiveness) {
        errors.push(InputError::new(
            InputErrorKind::InvalidAggressiveness,
            format!("aggressiveness {aggressiveness} outside 1..=5"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
