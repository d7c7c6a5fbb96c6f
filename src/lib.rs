//! # bulletin
//!
//! **Bulletin** is a lightweight in-process publish/subscribe bus for Rust.
//!
//! Publishers raise named **issues** (payload-free enum values); every handler
//! subscribed to an issue runs synchronously on the publishing thread, in
//! registration order. The crate is a passive library: it spawns no threads,
//! owns no runtime, and is safe to call from any number of caller threads.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   subscriber side                         publisher side
//!
//!   subscribe(issue, handler) ──┐           publish(issue)
//!   subscribe_traced(...)      ─┤                │
//!   unsubscribe(token)         ─┤                ▼
//!                               ▼      ┌─ snapshot handlers ─┐
//! ┌────────────────────────────────┐   │ (locks released     │
//! │ Bulletin<I>                    │───┘  before any call)   ▼
//! │  issues: I -> [Registration]   │          handler #1 -> #2 -> ... -> #N
//! │  trace:  I -> [SubscribeRecord]│          (registration order; first
//! └────────────────┬───────────────┘           Err aborts the rest)
//!                  ▼
//!   trace().records_for(issue) / trace().render()
//!   (introspection only — publish never consults the trace)
//! ```
//!
//! ### Snapshot semantics
//! `publish` copies the issue's handler list under a short lock, releases the
//! lock, then invokes the copy. Handlers may freely subscribe or unsubscribe,
//! even on the issue being published, without deadlocking or affecting the
//! in-flight pass; changes land on the next publish.
//!
//! ## Features
//! | Area          | Description                                             | Key types                         |
//! |---------------|---------------------------------------------------------|-----------------------------------|
//! | **Registry**  | Subscribe/publish/unsubscribe/inspect keyed by issue.   | [`Bulletin`], [`Subscription`]    |
//! | **Handlers**  | Zero-argument fallible units, closures or custom types. | [`Handler`], [`HandlerFn`]        |
//! | **Trace log** | Append-only audit of who subscribed what, plus report.  | [`TraceLog`], [`SubscribeRecord`] |
//! | **Errors**    | First failing handler aborts the pass and surfaces.     | [`PublishError`]                  |
//!
//! ## Example
//! ```rust
//! use bulletin::{Bulletin, HandlerError, HandlerFn};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum GameIssue {
//!     PlayerDied,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let board = Bulletin::new();
//!
//!     let respawn = board.subscribe(
//!         GameIssue::PlayerDied,
//!         HandlerFn::arc("respawn", || {
//!             println!("respawning player");
//!             Ok::<_, HandlerError>(())
//!         }),
//!     );
//!
//!     board.publish(GameIssue::PlayerDied)?;
//!
//!     assert!(board.unsubscribe(respawn));
//!     assert!(board.subscribers(GameIssue::PlayerDied).is_empty());
//!     Ok(())
//! }
//! ```

mod board;
mod error;
mod handler;
mod issue;
mod sync;
mod trace;

// ---- Public re-exports ----

pub use board::{Bulletin, Subscription};
pub use error::PublishError;
pub use handler::{Handler, HandlerError, HandlerFn, HandlerRef};
pub use issue::Issue;
pub use trace::{SubscribeRecord, TraceLog};
