//! Middleware trait, continuation, and pipeline composition.
//!
//! # How the chain is stored and run
//!
//! A pipeline holds middlewares of *different* concrete types in one `Vec`.
//! Rust collections can only hold one concrete type, so each unit is stored
//! as a trait object (`Arc<dyn Middleware>`) and dispatched through one
//! vtable call per event.
//!
//! The chain from registration to dispatch is:
//!
//! ```text
//! Pipeline::new().with(AutoAnswer::new()).with(MyHandler)   ← composition
//!        ↓
//! pipeline.handle(cx)                                       ← per event
//!        ↓
//! Next { chain, index: 0 }.run(cx)                          ← continuation
//!        ↓
//! middleware.handle(cx, next)   for each unit in order      ← vtable call
//! ```
//!
//! [`Next`] is a one-shot value: a middleware either consumes it with
//! [`Next::run`] to let the rest of the chain execute, or drops it to stop
//! the event right there. There is no way to run the remainder twice.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use crate::context::{BoxFuture, CallbackContext};
use crate::error::Error;

/// A named unit in the callback-query processing chain.
///
/// Terminal handlers and pass-through middleware implement the same trait;
/// the only difference is whether they run the [`Next`] they are given.
///
/// ```rust
/// use async_trait::async_trait;
/// use autoack::{CallbackContext, Error, Middleware, Next};
///
/// struct Greeter;
///
/// #[async_trait]
/// impl Middleware for Greeter {
///     fn name(&self) -> &str {
///         "greeter"
///     }
///
///     async fn handle(&self, cx: CallbackContext, _next: Next) -> Result<(), Error> {
///         cx.answer_empty().await
///     }
/// }
/// ```
#[async_trait]
pub trait Middleware: Send + Sync + 'static {
    /// Stable identifier, used in trace output.
    fn name(&self) -> &str;

    /// Processes one event. `cx` is this event's context; `next` runs the
    /// remainder of the chain.
    async fn handle(&self, cx: CallbackContext, next: Next) -> Result<(), Error>;
}

/// The rest of the chain, from one middleware's point of view.
pub struct Next {
    chain: Arc<[Arc<dyn Middleware>]>,
    index: usize,
}

impl Next {
    /// Runs the remaining middlewares to completion.
    ///
    /// Boxed because the chain is recursive through trait objects — each
    /// unit's future holds the future of the next.
    pub fn run(self, cx: CallbackContext) -> BoxFuture<Result<(), Error>> {
        let Some(mw) = self.chain.get(self.index) else {
            // Past the end: the event fell through the whole chain.
            return Box::pin(async { Ok(()) });
        };
        let mw = Arc::clone(mw);
        let rest = Self { chain: self.chain, index: self.index + 1 };
        Box::pin(async move {
            trace!(middleware = mw.name(), "dispatch");
            mw.handle(cx, rest).await
        })
    }
}

/// An ordered chain of middlewares for callback-query events.
///
/// Build it once at startup; ask it to [`handle`](Pipeline::handle) each
/// incoming event. Each [`with`](Pipeline::with) call returns `self` so
/// registrations chain naturally. Units run in registration order, so
/// install [`AutoAnswer`](crate::AutoAnswer) before the handlers it is
/// meant to cover.
#[derive(Default)]
pub struct Pipeline {
    chain: Vec<Arc<dyn Middleware>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Appends a middleware to the chain. Returns `self` for chaining.
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        self.chain.push(Arc::new(middleware));
        self
    }

    /// Runs one event through the chain, front to back.
    pub async fn handle(&self, cx: CallbackContext) -> Result<(), Error> {
        let next = Next { chain: Arc::from(self.chain.as_slice()), index: 0 };
        next.run(cx).await
    }
}
