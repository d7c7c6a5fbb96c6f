//! # Handler abstraction and function-backed handler implementation.
//!
//! This module defines the [`Handler`] trait (the zero-argument unit invoked
//! on publish) and a convenient function-backed implementation [`HandlerFn`].
//! The common handle type is [`HandlerRef`], an `Arc<dyn Handler>` suitable
//! for sharing across threads and for registering the same handler more than
//! once.

use std::borrow::Cow;
use std::sync::Arc;

/// Boxed error returned by a failing handler.
///
/// Kept as a boxed trait object so handler bodies can use `?` on anything;
/// [`publish`](crate::Bulletin::publish) wraps it into
/// [`PublishError`](crate::PublishError) together with the issue and the
/// handler name.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Shared handle to a handler.
pub type HandlerRef = Arc<dyn Handler>;

/// # Synchronous unit invoked when its issue is published.
///
/// A `Handler` has a stable [`name`](Handler::name) and a synchronous
/// [`handle`](Handler::handle) method. Handlers run on the publishing thread;
/// keep them fast and non-blocking.
///
/// Returning `Err` aborts the remaining handlers of the current publish and
/// surfaces to the publish caller. Panics are not caught and unwind to the
/// caller the same way.
///
/// # Example
/// ```
/// use bulletin::{Handler, HandlerError};
///
/// struct Respawn;
///
/// impl Handler for Respawn {
///     fn name(&self) -> &str {
///         "respawn"
///     }
///
///     fn handle(&self) -> Result<(), HandlerError> {
///         // react to the issue...
///         Ok(())
///     }
/// }
/// ```
pub trait Handler: Send + Sync + 'static {
    /// Returns a stable, human-readable handler name.
    ///
    /// Used in publish errors and debug logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Reacts to one published issue.
    fn handle(&self) -> Result<(), HandlerError>;
}

/// Function-backed handler implementation.
///
/// Wraps a `Fn() -> Result<(), HandlerError>` closure together with an
/// explicit name.
#[derive(Debug)]
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the handler and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use bulletin::{HandlerError, HandlerFn, HandlerRef};
    ///
    /// let h: HandlerRef = HandlerFn::arc("noop", || Ok::<_, HandlerError>(()));
    /// assert_eq!(h.name(), "noop");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn() -> Result<(), HandlerError> + Send + Sync + 'static, // Fn, not FnMut
{
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self) -> Result<(), HandlerError> {
        (self.f)()
    }
}
