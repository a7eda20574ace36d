//! Fairness-ordered candidate selection.
//!
//! Candidates are ranked by a fixed three-part key compared
//! lexicographically, ascending; the head wins:
//!
//! 1. **primary**: the member's count for the target kind,
//! 2. **secondary**: the member's total count scaled by the
//!    aggressiveness level (level 1 leaves it unchanged),
//! 3. **tiebreak**: a deterministic 64-bit hash of member, slot key,
//!    kind, and seed.
//!
//! The hash is a fixed FNV-1a fold, not `DefaultHasher`, so replaying a
//! seed reproduces the same roster on any platform or release.

use crate::audit::{CandidateRank, SelectionReason, SlotKey};
use crate::ledger::FairnessLedger;
use crate::models::TaskKind;

/// Comparable rank of one candidate; lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    /// Kind-specific count.
    pub primary: i64,
    /// Aggressiveness-scaled total count.
    pub secondary: i64,
    /// Deterministic tie hash.
    pub tiebreak: u64,
}

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The winning member.
    pub member_id: String,
    /// Why the head of the ranking won.
    pub reason: SelectionReason,
    /// All candidates, ranked best first, for the audit log.
    pub ranked: Vec<CandidateRank>,
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(hash: u64, bytes: &[u8]) -> u64 {
    let mut h = hash;
    for b in bytes {
        h ^= u64::from(*b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Deterministic tie hash over (member, ISO slot key, kind name, seed).
pub fn tie_hash(member_id: &str, iso_key: &str, kind: TaskKind, seed: u64) -> u64 {
    let mut h = fnv1a(FNV_OFFSET, &seed.to_le_bytes());
    h = fnv1a(h, member_id.as_bytes());
    h = fnv1a(h, &[0xff]);
    h = fnv1a(h, iso_key.as_bytes());
    h = fnv1a(h, &[0xff]);
    fnv1a(h, kind.name().as_bytes())
}

/// Picks assignees from candidate sets using the fairness ordering.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    ledger: &'a FairnessLedger,
    seed: u64,
    aggressiveness: u8,
}

impl<'a> Selector<'a> {
    /// Creates a selector over the given ledger.
    pub fn new(ledger: &'a FairnessLedger, seed: u64, aggressiveness: u8) -> Self {
        Self {
            ledger,
            seed,
            aggressiveness,
        }
    }

    /// Rank key of one candidate for a slot.
    pub fn rank_key(&self, member_id: &str, kind: TaskKind, slot: &SlotKey) -> RankKey {
        RankKey {
            primary: i64::from(self.ledger.count(member_id, kind)),
            secondary: i64::from(self.ledger.total(member_id))
                * i64::from(self.aggressiveness),
            tiebreak: tie_hash(member_id, &slot.iso(), kind, self.seed),
        }
    }

    /// Selects the best candidate, or `None` on an empty set.
    ///
    /// Ordering is fully deterministic: ties after the hash (only
    /// possible on a hash collision) fall back to member id.
    pub fn select(&self, candidates: &[String], kind: TaskKind, slot: &SlotKey) -> Option<Selection> {
        if candidates.is_empty() {
            return None;
        }

        let mut ranked: Vec<CandidateRank> = candidates
            .iter()
            .map(|id| {
                let key = self.rank_key(id, kind, slot);
                CandidateRank {
                    member_id: id.clone(),
                    primary: key.primary,
                    secondary: key.secondary,
                    tiebreak: key.tiebreak,
                }
            })
            .collect();
        ranked.sort_by(|a, b| {
            (a.primary, a.secondary, a.tiebreak, &a.member_id)
                .cmp(&(b.primary, b.secondary, b.tiebreak, &b.member_id))
        });

        let reason = if ranked.len() == 1 {
            SelectionReason::SoleCandidate
        } else if ranked[0].primary < ranked[1].primary {
            SelectionReason::LowestPrimary
        } else if ranked[0].secondary < ranked[1].secondary {
            SelectionReason::TiedPrimaryLowestTotal
        } else {
            SelectionReason::TiedPrimaryTotalLowestHash
        };

        Some(Selection {
            member_id: ranked[0].member_id.clone(),
            reason,
            ranked,
        })
    }
}
