//! # Concurrency-safe ordered collections.
//!
//! Shared primitive behind both the subscription registry and the trace log:
//! an append-ordered list whose mutations and snapshots are mutually
//! exclusive, and whose snapshots are owned copies safe to iterate without
//! any lock held.

mod list;

pub(crate) use list::SyncList;
