//! # Issue identifiers.
//!
//! An issue is a named, payload-free event identifier. The embedding program
//! declares its issues as a fieldless enum with the standard derives; the
//! blanket impl below picks such enums up automatically.
//!
//! ```
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum GameIssue {
//!     PlayerDied,
//!     ScoreChanged,
//! }
//!
//! fn assert_issue<I: bulletin::Issue>() {}
//! assert_issue::<GameIssue>();
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for event identifiers.
///
/// Issues are compared and hashed by value and rendered with `Debug` in trace
/// reports and log lines. Any `Copy + Eq + Hash + Debug` type that can cross
/// threads qualifies; in practice this is a fieldless `enum` owned by the
/// embedding program, fixed at compile time.
pub trait Issue: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Issue for T where T: Copy + Eq + Hash + Debug + Send + Sync + 'static {}
