//! Ledger of in-flight requests.
//!
//! Requests are never cancelled, so a slow response can land after a newer
//! one for the same operation. Every request gets a token; on completion the
//! caller asks [`RequestLedger::complete`] whether the result is still the
//! latest for its key and drops it otherwise.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RequestLedger<K> {
    next: u64,
    latest: HashMap<K, RequestToken>,
    pending: HashSet<RequestToken>,
}

impl<K: Eq + Hash + Clone> RequestLedger<K> {
    pub fn new() -> Self {
        Self {
            next: 0,
            latest: HashMap::new(),
            pending: HashSet::new(),
        }
    }

    /// Issue a token for `key`; it supersedes any earlier token for the same key
    pub fn issue(&mut self, key: K) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        self.latest.insert(key, token);
        self.pending.insert(token);
        token
    }

    /// Mark `token` finished. Returns `true` if its result should be applied.
    pub fn complete(&mut self, key: &K, token: RequestToken) -> bool {
        let was_pending = self.pending.remove(&token);
        let is_latest = self.latest.get(key) == Some(&token);
        if is_latest {
            self.latest.remove(key);
        }
        was_pending && is_latest
    }

    /// Any request still awaiting completion
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for RequestLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}
