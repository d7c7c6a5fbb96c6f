//! Error types surfaced by the bulletin board.
//!
//! The taxonomy is deliberately narrow: a missed unsubscribe is a `bool`,
//! never an error, and nothing here is transient or retryable. The only
//! fallible operation is [`publish`](crate::Bulletin::publish), which stops
//! at the first failing handler and hands the failure back to the caller.

use thiserror::Error;

use crate::handler::HandlerError;

/// # Errors produced by publishing an issue.
///
/// A failing handler aborts the remaining handlers of that publish; whether
/// to log and keep publishing future issues, or treat the failure as fatal,
/// is the caller's call.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PublishError {
    /// A handler returned an error; the remaining handlers were skipped.
    #[error("handler '{handler}' failed for issue {issue}: {source}")]
    HandlerFailed {
        /// The published issue, rendered with `Debug`.
        issue: String,
        /// Name of the failing handler.
        handler: String,
        /// The underlying handler error.
        #[source]
        source: HandlerError,
    },
}

impl PublishError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use bulletin::PublishError;
    ///
    /// let err = PublishError::HandlerFailed {
    ///     issue: "PlayerDied".into(),
    ///     handler: "respawn".into(),
    ///     source: "boom".into(),
    /// };
    /// assert_eq!(err.as_label(), "publish_handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PublishError::HandlerFailed { .. } => "publish_handler_failed",
        }
    }
}
