//! # Subscription trace log.
//!
//! Parallel diagnostic side of the board: every traced subscription appends
//! one immutable [`SubscribeRecord`] describing who attached which listeners
//! to which issue. The log is introspection-only — publish never consults it.
//!
//! Records form an append-only audit trail: unsubscribing does not remove
//! them, so the log describes subscription history, not the live subscriber
//! set. Compare with [`Bulletin::subscribers`](crate::Bulletin::subscribers)
//! for the live view.

mod log;
mod record;

pub use log::TraceLog;
pub use record::SubscribeRecord;
