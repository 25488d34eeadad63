//! Auto-acknowledgement middleware for callback queries.
//!
//! The platform requires every callback query to be acknowledged within a
//! short window, or the user's client keeps showing a loading spinner and
//! eventually reports an error. Remembering to acknowledge in every single
//! handler is exactly the kind of obligation that gets forgotten, so this
//! middleware makes it automatic: if the downstream chain did not answer
//! the query, it answers with default parameters once the chain is done.
//!
//! The interception works by swapping the context's acknowledgement slot
//! for a delegate that records the call and forwards to the original,
//! unchanged. Downstream code keeps calling `cx.answer(...)` exactly as it
//! would without this middleware installed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::context::CallbackContext;
use crate::error::Error;
use crate::params::AnswerParams;
use crate::pipeline::{Middleware, Next};

/// Answers any callback query the rest of the chain forgot to answer.
///
/// Install it *before* the handlers it should cover:
///
/// ```rust
/// use autoack::{AnswerParams, AutoAnswer, Pipeline};
/// # use async_trait::async_trait;
/// # use autoack::{CallbackContext, Error, Middleware, Next};
/// # struct MyHandler;
/// # #[async_trait]
/// # impl Middleware for MyHandler {
/// #     fn name(&self) -> &str { "my-handler" }
/// #     async fn handle(&self, _cx: CallbackContext, _next: Next) -> Result<(), Error> {
/// #         Ok(())
/// #     }
/// # }
///
/// // Forgotten queries get a bare acknowledgement:
/// Pipeline::new().with(AutoAnswer::new()).with(MyHandler);
///
/// // ... or one with options:
/// Pipeline::new()
///     .with(AutoAnswer::with_params(AnswerParams::new().text("Done")))
///     .with(MyHandler);
/// ```
///
/// Construction has no side effects and cannot fail. One instance serves
/// any number of concurrent events; the answered/not-answered flag is
/// created fresh per event.
#[derive(Clone, Debug, Default)]
pub struct AutoAnswer {
    params: AnswerParams,
}

impl AutoAnswer {
    /// Fallback answers carry no options — just dismiss the spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback answers carry `params`, forwarded verbatim.
    pub fn with_params(params: AnswerParams) -> Self {
        Self { params }
    }
}

#[async_trait]
impl Middleware for AutoAnswer {
    fn name(&self) -> &str {
        "auto-answer-callback-query"
    }

    async fn handle(&self, cx: CallbackContext, next: Next) -> Result<(), Error> {
        let answered = Arc::new(AtomicBool::new(false));

        // Swap in a delegate that records the call, then forwards to
        // whatever the slot held before us — same params, same result,
        // success and failure alike. Every downstream reader of the slot
        // sees the delegate from here on.
        let original = cx.answer_fn();
        let flag = Arc::clone(&answered);
        cx.swap_answer_fn(Arc::new(move |params| {
            flag.store(true, Ordering::SeqCst);
            original(params)
        }));

        // Handler failures are the host framework's business, not ours.
        next.run(cx.clone()).await?;

        if !answered.load(Ordering::SeqCst) {
            debug!(query = %cx.query().id, "unanswered callback query, sending default answer");
            // Nobody is left to act on a failed fallback answer, so the
            // error is deliberately discarded rather than propagated.
            if let Err(e) = cx.answer(self.params.clone()).await {
                debug!(query = %cx.query().id, error = %e, "fallback answer failed, ignoring");
            }
        }

        Ok(())
    }
}
