//! Bounded, validity-aware history of selection targets.

use crate::host::SelectionHost;
use core::fmt;
use log::{debug, trace};
use std::collections::VecDeque;

/// Default bound on the number of remembered entries.
pub const MAX_HISTORY_LEN: usize = 30;

/// Where to go after the current target went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery<E> {
    /// Best remaining target; `None` when nothing acceptable is left.
    pub current: Option<E>,
    /// The target before it, if any.
    pub previous: Option<E>,
}

impl<E> Recovery<E> {
    /// Whether there is no target to recover to.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// Recency-ordered history of selection targets, newest first.
///
/// Invariants after every call:
/// - the history holds at most `limit` entries;
/// - no two consecutive entries are the same handle (repeats further apart
///   are kept).
///
/// Alongside the list the tracker keeps an arrival flag: whether the entry
/// passed to the last [`update`](Self::update) was valid when it arrived.
/// [`become_invalid`](Self::become_invalid) uses it so a target that was
/// already broken on arrival is not reported as a fresh invalidation.
pub struct HistoryTracker<E, H> {
    seed: E,
    history: VecDeque<E>,
    arrived_valid: bool,
    limit: usize,
    host: H,
}

impl<E, H> HistoryTracker<E, H>
where
    E: Copy + Eq,
    H: SelectionHost<E>,
{
    /// Tracker bounded to [`MAX_HISTORY_LEN`] entries, seeded with `seed`.
    pub fn new(seed: E, host: H) -> Self {
        Self::with_limit(seed, host, MAX_HISTORY_LEN)
    }

    /// Tracker bounded to `limit` entries (at least one).
    ///
    /// Storage grows with use; only the default bound is reserved up front.
    pub fn with_limit(seed: E, host: H, limit: usize) -> Self {
        let mut tracker = Self {
            seed,
            history: VecDeque::with_capacity(limit.clamp(1, MAX_HISTORY_LEN) + 1),
            arrived_valid: true,
            limit: limit.max(1),
            host,
        };
        tracker.reset();
        tracker
    }

    /// Forget everything but the seed and clear the arrival flag.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push_front(self.seed);
        self.arrived_valid = true;
        trace!("history reset");
    }

    /// Record a move to `entry`.
    ///
    /// The entry becomes the new head unless it is `None` or already the head;
    /// the oldest entry is dropped past the limit. The arrival flag is set from
    /// the entry's validity either way, and `None` counts as invalid.
    pub fn update(&mut self, entry: Option<E>) {
        if let Some(target) = entry
            && self.history.front() != Some(&target)
        {
            self.history.push_front(target);
            if self.history.len() > self.limit {
                self.history.pop_back();
            }
        }
        self.arrived_valid = entry.is_some_and(|target| self.host.is_valid(&target));
        trace!(
            "history update: len={} arrived_valid={}",
            self.history.len(),
            self.arrived_valid
        );
    }

    /// Drop every entry the host no longer considers valid.
    ///
    /// Survivors keep their relative order. Returns whether anything was removed.
    pub fn clean(&mut self) -> bool {
        let before = self.history.len();
        let host = &self.host;
        self.history.retain(|entry| host.is_valid(entry));
        let removed = before - self.history.len();
        if removed > 0 {
            debug!("history clean removed {removed} of {before} entries");
        }
        removed > 0
    }

    /// Report that focus may have been lost, e.g. `candidate` was removed.
    ///
    /// Always cleans first. If the last arrival was already invalid the flag
    /// is reset and this returns `false`: the breakage predates our arrival and
    /// the caller should fall back to default navigation. Otherwise returns
    /// whether `candidate` is now invalid.
    pub fn become_invalid(&mut self, candidate: &E) -> bool {
        self.clean();
        if !self.arrived_valid {
            debug!("target was invalid on arrival; not reporting invalidation");
            self.arrived_valid = true;
            return false;
        }
        !self.host.is_valid(candidate)
    }

    /// Compute where to recover to.
    ///
    /// A valid, non-seed active target from the host is recorded first. Then,
    /// with `accept` given, rejected heads are removed from the history for
    /// good until an accepted one is on top.
    pub fn revert(&mut self, accept: Option<&dyn Fn(&E) -> bool>) -> Recovery<E> {
        if let Some(active) = self.host.active()
            && active != self.seed
            && self.host.is_valid(&active)
        {
            self.update(Some(active));
        }
        if let Some(accept) = accept {
            while let Some(head) = self.history.front()
                && !accept(head)
            {
                self.history.pop_front();
            }
        }
        let recovery = Recovery {
            current: self.history.front().copied(),
            previous: self.history.get(1).copied(),
        };
        trace!(
            "history revert: len={} empty={}",
            self.history.len(),
            recovery.is_empty()
        );
        recovery
    }
}

impl<E, H> HistoryTracker<E, H> {
    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &E> {
        self.history.iter()
    }

    /// The most recent entry.
    #[inline]
    pub fn head(&self) -> Option<&E> {
        self.history.front()
    }

    /// Number of remembered entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether every entry, seed included, has been dropped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The bound on [`len`](Self::len).
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether the last entry passed to `update` was valid when it arrived.
    #[inline]
    pub fn arrived_valid(&self) -> bool {
        self.arrived_valid
    }

    /// The entry the history was seeded with.
    #[inline]
    pub fn seed(&self) -> &E {
        &self.seed
    }

    /// The host answering validity and focus questions.
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<E: fmt::Debug, H> fmt::Debug for HistoryTracker<E, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HistoryTracker")
            .field("seed", &self.seed)
            .field("history", &self.history)
            .field("arrived_valid", &self.arrived_valid)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
