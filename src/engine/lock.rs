//! Advisory per-team generation lock.
//!
//! Enforces the contract "at most one in-flight generation per team"
//! within a process. Ledger deltas from two writers would race; the
//! persistent store holds the equivalent lock across processes.

use std::collections::BTreeSet;
use std::sync::Mutex;

/// Registry of in-flight generation keys.
#[derive(Debug, Default)]
pub struct GenerationLock {
    inflight: Mutex<BTreeSet<String>>,
}

impl GenerationLock {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to claim a team key.
    ///
    /// Returns `None` while another generation holds the key; the caller
    /// surfaces that as a retryable error.
    pub fn try_acquire(&self, team: &str) -> Option<LockGuard<'_>> {
        let mut inflight = self.inflight.lock().unwrap_or_else(|e| e.into_inner());
        if !inflight.insert(team.to_string()) {
            return None;
        }
        Some(LockGuard {
            lock: self,
            team: team.to_string(),
        })
    }

    /// Whether a team key is currently held.
    pub fn is_held(&self, team: &str) -> bool {
        self.inflight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(team)
    }
}

/// Releases the claimed key on drop.
#[derive(Debug)]
pub struct LockGuard<'a> {
    lock: &'a GenerationLock,
    team: String,
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.lock
            .inflight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.team);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let lock = GenerationLock::new();
        let guard = lock.try_acquire("ops").unwrap();
        assert!(lock.is_held("ops"));
        drop(guard);
        assert!(!lock.is_held("ops"));
        assert!(lock.try_acquire("ops").is_some());
    }

    #[test]
    fn test_contention() {
        let lock = GenerationLock::new();
        let _guard = lock.try_acquire("ops").unwrap();
        assert!(lock.try_acquire("ops").is_none());
    }

    #[test]
    fn test_disjoint_teams() {
        let lock = GenerationLock::new();
        let _a = lock.try_acquire("ops").unwrap();
        let _b = lock.try_acquire("net").unwrap();
        assert!(lock.is_held("ops"));
        assert!(lock.is_held("net"));
    }
}
