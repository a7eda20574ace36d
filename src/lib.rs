//! Fair, auditable, reproducible duty roster generation.
//!
//! Given a team roster (office-day patterns, unavailability windows,
//! prior assignment history) and a date range, the engine produces a
//! complete, constraint-satisfying assignment of members to two streams
//! of recurring work: a daily ATM workload with a shift structure and a
//! weekly SysAid maker/checker pair. Rest, cooldown, office-presence,
//! and distinctness constraints are enforced; load is balanced through
//! a rolling fairness window; every decision is explained in an audit
//! log, including why a candidate beat its tied peers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Member`, `Roster`, `TaskKind`,
//!   `Shift`, `DayShiftPlan`, `Assignment`, `Schedule`, `SwapRequest`
//! - **`time`**: Civil-date arithmetic, week bucketing, weekday sets
//! - **`config`**: Frozen `SchedulingConfig` passed into a generation
//! - **`ledger`**: Rolling-window fairness counts, rebuildable from history
//! - **`eligibility`**: Hard-constraint candidate filtering, rest state
//! - **`selector`**: Fairness-ordered selection with deterministic tie-breaks
//! - **`audit`**: Append-only decision log
//! - **`engine`**: The assembler, the two scheduling passes, swap
//!   validation, the advisory team lock
//! - **`validation`**: Input integrity checks
//! - **`kpi`**: Load-distribution metrics
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rotagen::config::SchedulingConfig;
//! use rotagen::engine::{Assembler, GenerationRequest};
//! use rotagen::models::{Member, Roster};
//!
//! let roster = Roster::new(
//!     vec![
//!         Member::new("alice", "Alice"),
//!         Member::new("bob", "Bob"),
//!         Member::new("carol", "Carol"),
//!         Member::new("dave", "Dave"),
//!     ],
//!     vec![],
//! );
//! let config = SchedulingConfig::default();
//! let request = GenerationRequest::new(
//!     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
//! )
//! .with_seed(12345);
//!
//! let outcome = Assembler::new(&roster, &config).generate(&request).unwrap();
//! assert!(outcome.schedule.assignments.len() > 0);
//! ```
//!
//! # Determinism
//!
//! Two generations with identical inputs and the same seed produce
//! identical assignments and audit entries; ties are broken by a fixed
//! 64-bit hash, never by process-dependent state. The whole generation
//! is single-threaded and front-to-back because each day's selection
//! depends on rest and cooldown state from the previous day.

pub mod audit;
pub mod config;
pub mod eligibility;
pub mod engine;
pub mod kpi;
pub mod ledger;
pub mod models;
pub mod selector;
pub mod time;
pub mod validation;
