//! Audit log of scheduling decisions.
//!
//! Every selection appends one entry carrying enough to reconstruct the
//! decision: the slot, the chosen member, every candidate with its rank
//! key, the tie-break reason, and any warnings. Swap and reassignment
//! applications append tagged entries too. The log is append-only within
//! a generation and persisted alongside the schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{ScheduleId, TaskKind};

/// The day or week a decision was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    /// A daily slot.
    Day(NaiveDate),
    /// A weekly slot, keyed by its Monday.
    Week(NaiveDate),
}

impl SlotKey {
    /// ISO date string of the key; the tie hash input.
    pub fn iso(&self) -> String {
        match self {
            SlotKey::Day(d) | SlotKey::Week(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Day(d) => write!(f, "{d}"),
            SlotKey::Week(d) => write!(f, "week of {d}"),
        }
    }
}

/// What produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A selection during generation.
    #[default]
    Selection,
    /// A peer swap application.
    Swap,
    /// An admin reassignment.
    Reassign,
}

/// One candidate's rank key at decision time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRank {
    /// Candidate member.
    pub member_id: String,
    /// Kind-specific count (primary sort key).
    pub primary: i64,
    /// Aggressiveness-scaled total count (secondary sort key).
    pub secondary: i64,
    /// Deterministic tie hash (final sort key).
    pub tiebreak: u64,
}

/// Why the head of the ranking won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    /// Only one candidate was eligible.
    SoleCandidate,
    /// Strictly lowest kind-specific count.
    LowestPrimary,
    /// Tied on primary; lowest total load.
    TiedPrimaryLowestTotal,
    /// Tied on primary and total; lowest deterministic hash.
    TiedPrimaryTotalLowestHash,
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SelectionReason::SoleCandidate => "sole candidate",
            SelectionReason::LowestPrimary => "lowest primary",
            SelectionReason::TiedPrimaryLowestTotal => "tied on primary, lowest total",
            SelectionReason::TiedPrimaryTotalLowestHash => {
                "tied on primary+total, lowest hash"
            }
        };
        f.write_str(text)
    }
}

/// One recorded decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Schedule the decision belongs to.
    pub schedule_id: ScheduleId,
    /// Slot the decision was made for.
    pub slot: SlotKey,
    /// Task kind.
    pub kind: TaskKind,
    /// Shift label; empty for weekly kinds.
    pub shift_label: String,
    /// Chosen member, or `None` when the slot was skipped.
    pub chosen: Option<String>,
    /// Member replaced, for swap and reassignment entries.
    pub previous: Option<String>,
    /// Every candidate considered, ranked best first.
    pub candidates: Vec<CandidateRank>,
    /// Why the chosen member won.
    pub reason: Option<SelectionReason>,
    /// Warnings raised while deciding, e.g. an unfillable slot.
    pub warnings: Vec<String>,
    /// What produced the entry.
    pub action: AuditAction,
}

impl AuditEntry {
    /// Creates a selection entry for a filled slot.
    pub fn selection(
        schedule_id: ScheduleId,
        slot: SlotKey,
        kind: TaskKind,
        shift_label: impl Into<String>,
        chosen: impl Into<String>,
        candidates: Vec<CandidateRank>,
        reason: SelectionReason,
    ) -> Self {
        Self {
            schedule_id,
            slot,
            kind,
            shift_label: shift_label.into(),
            chosen: Some(chosen.into()),
            previous: None,
            candidates,
            reason: Some(reason),
            warnings: Vec::new(),
            action: AuditAction::Selection,
        }
    }

    /// Creates an entry for a slot left unfilled.
    pub fn skipped(
        schedule_id: ScheduleId,
        slot: SlotKey,
        kind: TaskKind,
        shift_label: impl Into<String>,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            schedule_id,
            slot,
            kind,
            shift_label: shift_label.into(),
            chosen: None,
            previous: None,
            candidates: Vec::new(),
            reason: None,
            warnings: vec![warning.into()],
            action: AuditAction::Selection,
        }
    }

    /// Creates a swap or reassignment entry.
    pub fn change(
        action: AuditAction,
        schedule_id: ScheduleId,
        slot: SlotKey,
        kind: TaskKind,
        shift_label: impl Into<String>,
        from: &str,
        to: &str,
    ) -> Self {
        Self {
            schedule_id,
            slot,
            kind,
            shift_label: shift_label.into(),
            chosen: Some(to.to_string()),
            previous: Some(from.to_string()),
            candidates: Vec::new(),
            reason: None,
            warnings: Vec::new(),
            action,
        }
    }
}

/// Append-only decision log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// All warnings across entries, in append order.
    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|e| e.warnings.iter().cloned())
            .collect()
    }

    /// Human-readable rendering of the whole log.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let label = if entry.shift_label.is_empty() {
                entry.kind.name().to_string()
            } else {
                format!("{} {}", entry.kind.name(), entry.shift_label)
            };
            match (&entry.chosen, entry.reason) {
                (Some(member), Some(reason)) => {
                    out.push_str(&format!(
                        "{} {}: selected {} ({}, {} candidates)\n",
                        entry.slot,
                        label,
                        member,
                        reason,
                        entry.candidates.len()
                    ));
                }
                (Some(member), None) => {
                    let previous = entry.previous.as_deref().unwrap_or("(unassigned)");
                    out.push_str(&format!(
                        "{} {}: {:?} {} -> {}\n",
                        entry.slot, label, entry.action, previous, member
                    ));
                }
                (None, _) => {
                    out.push_str(&format!("{} {}: skipped\n", entry.slot, label));
                }
            }
            for warning in &entry.warnings {
                out.push_str(&format!("  WARNING: {warning}\n"));
            }
        }
        out
    }
}
