//! Subscription records.

use std::sync::Arc;
use std::time::SystemTime;

use crate::issue::Issue;

/// Immutable description of one traced subscription.
///
/// Created by
/// [`subscribe_traced`](crate::Bulletin::subscribe_traced) and kept for the
/// lifetime of the log. Display only — nothing here is parsed or consulted
/// during publish.
#[derive(Clone, Debug)]
pub struct SubscribeRecord<I> {
    /// Originating context, when the caller had one to give.
    pub origin: Option<Arc<str>>,
    /// The issue subscribed to.
    pub issue: I,
    /// Human-readable description of the attached listeners.
    pub listeners: Arc<str>,
    /// Wall-clock timestamp of the subscription.
    pub at: SystemTime,
}

impl<I: Issue> SubscribeRecord<I> {
    pub(crate) fn new(issue: I, origin: Option<&str>, listeners: &str) -> Self {
        Self {
            origin: origin.map(Arc::from),
            issue,
            listeners: Arc::from(listeners),
            at: SystemTime::now(),
        }
    }
}
