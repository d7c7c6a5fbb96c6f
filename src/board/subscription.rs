//! Subscription tokens.

use crate::issue::Issue;

/// Opaque token identifying one registration on a
/// [`Bulletin`](crate::Bulletin).
///
/// Returned by the subscribe operations; pass it back to
/// [`unsubscribe`](crate::Bulletin::unsubscribe) to remove exactly that
/// registration. Registering the same handler twice yields two distinct
/// tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription<I> {
    issue: I,
    id: u64,
}

impl<I: Issue> Subscription<I> {
    pub(crate) fn new(issue: I, id: u64) -> Self {
        Self { issue, id }
    }

    /// The issue this registration listens on.
    pub fn issue(&self) -> I {
        self.issue
    }

    /// Registry-unique registration id.
    pub fn id(&self) -> u64 {
        self.id
    }
}
