//! # Subscription registry.
//!
//! [`Bulletin`] maps each issue to the ordered list of its subscribed
//! handlers and exposes the publish/subscribe/unsubscribe/inspect surface.
//! [`Subscription`] is the opaque token returned by the subscribe operations
//! and consumed by unsubscribe.
//!
//! ## Publish flow
//! ```text
//! publish(issue) ──► snapshot the issue's handlers ──► release locks
//!                                                          │
//!                          ┌───────────────────────────────┘
//!                          ▼
//!                    handler #1 ─► handler #2 ─► ... (registration order)
//! ```

mod bulletin;
mod subscription;

pub use bulletin::Bulletin;
pub use subscription::Subscription;
