//! Task kinds and their scheduling behavior.
//!
//! The four canonical kinds are fixed. Behavior differences (daily vs
//! weekly cadence, rest and cooldown triggers) are driven from a single
//! table instead of scattered branches, so a new rule lands in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a kind is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// One slot per shift per day.
    Daily,
    /// One assignee per Monday-keyed week.
    Weekly,
}

/// The canonical task kinds.
///
/// Variant order is the canonical export order; `Ord` relies on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    /// Morning ATM reporter (A-shift).
    AtmMorning,
    /// Mid-day and night ATM reporter (B-shift).
    AtmMidnight,
    /// Weekly SysAid maker.
    SysaidMaker,
    /// Weekly SysAid checker.
    SysaidChecker,
}

struct KindSpec {
    name: &'static str,
    cadence: Cadence,
    triggers_rest: bool,
    has_cooldown: bool,
}

const KIND_TABLE: [KindSpec; 4] = [
    KindSpec {
        name: "ATM_MORNING",
        cadence: Cadence::Daily,
        triggers_rest: false,
        has_cooldown: false,
    },
    KindSpec {
        name: "ATM_MIDNIGHT",
        cadence: Cadence::Daily,
        triggers_rest: true,
        has_cooldown: true,
    },
    KindSpec {
        name: "SYSAID_MAKER",
        cadence: Cadence::Weekly,
        triggers_rest: false,
        has_cooldown: false,
    },
    KindSpec {
        name: "SYSAID_CHECKER",
        cadence: Cadence::Weekly,
        triggers_rest: false,
        has_cooldown: false,
    },
];

impl TaskKind {
    /// All kinds in canonical order.
    pub const ALL: [TaskKind; 4] = [
        TaskKind::AtmMorning,
        TaskKind::AtmMidnight,
        TaskKind::SysaidMaker,
        TaskKind::SysaidChecker,
    ];

    fn spec(self) -> &'static KindSpec {
        &KIND_TABLE[self as usize]
    }

    /// Stable wire name, e.g. `ATM_MIDNIGHT`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Assignment cadence.
    pub fn cadence(self) -> Cadence {
        self.spec().cadence
    }

    /// Whether an assignment of this kind earns the member a rest day.
    pub fn triggers_rest(self) -> bool {
        self.spec().triggers_rest
    }

    /// Whether this kind enforces a minimum gap between assignments.
    pub fn has_cooldown(self) -> bool {
        self.spec().has_cooldown
    }

    /// Whether this is one of the two daily ATM kinds.
    pub fn is_atm(self) -> bool {
        self.cadence() == Cadence::Daily
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
