//! # Bulletin: the issue -> subscribers registry.
//!
//! One [`Bulletin`] instance owns the whole subscription state: the mapping
//! from issue to its ordered handler list, the monotonic id well behind
//! [`Subscription`] tokens, the debug flag, and the trace log.
//!
//! ## Rules
//! - Per-issue entries are created lazily on first subscription and never
//!   removed; an empty list and a missing key behave identically everywhere.
//! - `publish` snapshots the handler list and releases every lock before the
//!   first handler runs, so handlers can re-enter the board freely.
//! - Locks are held only for O(list) copy/scan durations — no I/O, no waits.
//! - The board is `Send + Sync`; construct one per logical session and share
//!   it by reference (or `Arc`) instead of reaching for ambient statics.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::board::subscription::Subscription;
use crate::error::PublishError;
use crate::handler::HandlerRef;
use crate::issue::Issue;
use crate::sync::SyncList;
use crate::trace::{SubscribeRecord, TraceLog};

/// One registration: the handler plus the id its token carries.
#[derive(Clone)]
struct Registration {
    id: u64,
    handler: HandlerRef,
}

/// Issue -> subscribers registry with snapshot-based publish.
///
/// See the [module docs](crate::board) for the publish flow and the
/// [crate docs](crate) for an end-to-end example.
pub struct Bulletin<I> {
    issues: RwLock<HashMap<I, SyncList<Registration>>>,
    trace: TraceLog<I>,
    next_id: AtomicU64,
    debug: AtomicBool,
}

impl<I: Issue> Bulletin<I> {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            issues: RwLock::new(HashMap::new()),
            trace: TraceLog::new(),
            next_id: AtomicU64::new(0),
            debug: AtomicBool::new(false),
        }
    }

    /// Clears every subscription and every trace record.
    ///
    /// Destructive re-initialization for environments where static state
    /// outlives a logical session (editor domain reloads and similar).
    /// Outstanding [`Subscription`] tokens are invalidated; unsubscribing
    /// them afterwards reports `false`. Safe to call any number of times.
    pub fn reset(&self) {
        self.issues.write().clear();
        self.trace.clear();
    }

    /// Enables or disables debug logging for unsubscribe misses.
    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    /// Whether debug logging is enabled.
    pub fn debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Subscribes `handler` to `issue`.
    ///
    /// Appends to the issue's list, creating it lazily. No uniqueness check:
    /// the same handler registered twice is invoked twice per publish, and
    /// each registration gets its own token. Never fails.
    ///
    /// Prefer [`subscribe_traced`](Bulletin::subscribe_traced) when the
    /// caller has origin/description context, since plain `subscribe` leaves
    /// no trace record.
    pub fn subscribe(&self, issue: I, handler: HandlerRef) -> Subscription<I> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let registration = Registration { id, handler };

        {
            let issues = self.issues.read();
            if let Some(list) = issues.get(&issue) {
                list.push(registration);
                return Subscription::new(issue, id);
            }
        }

        // First subscription for this issue; `entry` absorbs the race with
        // another thread creating it between the read and the write.
        self.issues
            .write()
            .entry(issue)
            .or_default()
            .push(registration);
        Subscription::new(issue, id)
    }

    /// Subscribes `handler` and records who attached it.
    ///
    /// Equivalent to [`subscribe`](Bulletin::subscribe) plus an immutable
    /// [`SubscribeRecord`] in the trace log: the originating context (if any)
    /// and a human-readable description of the listeners being attached.
    pub fn subscribe_traced(
        &self,
        issue: I,
        handler: HandlerRef,
        origin: Option<&str>,
        listeners: &str,
    ) -> Subscription<I> {
        self.trace
            .record(SubscribeRecord::new(issue, origin, listeners));
        self.subscribe(issue, handler)
    }

    /// Publishes `issue`, invoking every currently subscribed handler.
    ///
    /// Takes a snapshot of the issue's handler list (empty when the issue has
    /// none; no entry is created), releases all locks, then invokes the
    /// snapshot in registration order on the calling thread. Handlers that
    /// subscribe or unsubscribe during the publish affect only subsequent
    /// publishes.
    ///
    /// The first handler returning `Err` aborts the remaining handlers of
    /// this publish and surfaces as [`PublishError`]. A panicking handler
    /// unwinds to the caller with the same abort-the-rest effect.
    pub fn publish(&self, issue: I) -> Result<(), PublishError> {
        let snapshot = {
            let issues = self.issues.read();
            match issues.get(&issue) {
                Some(list) => list.snapshot(),
                None => Vec::new(),
            }
        };

        for registration in snapshot {
            if let Err(source) = registration.handler.handle() {
                return Err(PublishError::HandlerFailed {
                    issue: format!("{issue:?}"),
                    handler: registration.handler.name().to_string(),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Removes the registration identified by `sub`.
    ///
    /// Returns whether a removal occurred. Unsubscribing a token that was
    /// already removed (or cleared by [`reset`](Bulletin::reset)) is a no-op
    /// reported through the return value; with the debug flag set it is also
    /// logged. No entry is created for an issue that has none.
    pub fn unsubscribe(&self, sub: Subscription<I>) -> bool {
        let removed = {
            let issues = self.issues.read();
            match issues.get(&sub.issue()) {
                Some(list) => list.remove_first(|r| r.id == sub.id()),
                None => false,
            }
        };

        if !removed && self.debug() {
            tracing::debug!(
                issue = ?sub.issue(),
                id = sub.id(),
                "unsubscribe: no matching registration"
            );
        }
        removed
    }

    /// Snapshot of the issue's current subscribers, in registration order.
    ///
    /// Empty when nothing is subscribed. Enumerating the snapshot never
    /// observes or affects live registry state.
    pub fn subscribers(&self, issue: I) -> Vec<HandlerRef> {
        let issues = self.issues.read();
        match issues.get(&issue) {
            Some(list) => list.snapshot().into_iter().map(|r| r.handler).collect(),
            None => Vec::new(),
        }
    }

    /// Read-only access to the trace log.
    pub fn trace(&self) -> &TraceLog<I> {
        &self.trace
    }
}

impl<I: Issue> Default for Bulletin<I> {
    fn default() -> Self {
        Self::new()
    }
}
