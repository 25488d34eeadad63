//! Per-event callback-query context.
//!
//! The host framework builds one [`CallbackContext`] per incoming
//! callback-query update and threads it through the middleware chain. The
//! context carries the query payload plus the one capability this crate
//! cares about: a *function-valued* acknowledgement slot.
//!
//! # Why a slot and not a method
//!
//! [`AutoAnswer`](crate::AutoAnswer) needs to observe whether *anyone*
//! downstream acknowledged the query, without changing what the call does
//! for those callers. Keeping the acknowledgement behind a swappable
//! function slot makes that a two-line interception: read the current
//! function, install a delegate that records the call and forwards to it.
//! Every later reader of the slot — handlers, nested middleware, the
//! fallback path itself — sees the delegate.
//!
//! The slot lives behind `Arc<Mutex<…>>` so clones of the context share it.
//! The lock is only ever held long enough to clone an `Arc` out of it; the
//! acknowledgement call itself runs with no lock held.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde::Deserialize;

use crate::error::Error;
use crate::params::AnswerParams;

/// A heap-allocated, type-erased future. Same role as the boxed futures any
/// type-erased async callback needs: the runtime must be able to poll it
/// in-place, and `Send + 'static` let it migrate across worker threads.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// The acknowledgement function: takes the answer parameters, performs the
/// network call to the chat platform, resolves on success and fails on
/// transport or platform error. Supplied by the host adapter.
pub type AnswerFn = Arc<dyn Fn(AnswerParams) -> BoxFuture<Result<(), Error>> + Send + Sync>;

/// The callback-query payload, as delivered by the platform update.
#[derive(Clone, Debug, Deserialize)]
pub struct CallbackQuery {
    /// Unique query identifier. Each id may be answered at most once; the
    /// platform rejects a second answer for the same id.
    pub id: String,
    /// Identifier of the user who pressed the button.
    pub from_id: i64,
    /// The `callback_data` attached to the pressed button, if any.
    #[serde(default)]
    pub data: Option<String>,
}

/// One in-flight callback-query event.
///
/// Cloning is cheap and every clone refers to the same event: the query
/// payload sits behind an `Arc`, and the acknowledgement slot is shared so
/// a swap through one clone is visible through all of them.
#[derive(Clone)]
pub struct CallbackContext {
    query: Arc<CallbackQuery>,
    answer: Arc<Mutex<AnswerFn>>,
}

impl CallbackContext {
    /// Builds the context for one event. `answer` is the host adapter's
    /// acknowledgement call for this query.
    pub fn new(query: CallbackQuery, answer: AnswerFn) -> Self {
        Self {
            query: Arc::new(query),
            answer: Arc::new(Mutex::new(answer)),
        }
    }

    /// The event payload.
    pub fn query(&self) -> &CallbackQuery {
        &self.query
    }

    /// Acknowledges the query through whatever function currently occupies
    /// the slot. The result — success or failure — is exactly what that
    /// function produced.
    pub async fn answer(&self, params: AnswerParams) -> Result<(), Error> {
        let f = self.answer_fn();
        f(params).await
    }

    /// Acknowledges with no special options. Shorthand for
    /// `answer(AnswerParams::new())`.
    pub async fn answer_empty(&self) -> Result<(), Error> {
        self.answer(AnswerParams::new()).await
    }

    /// The function currently occupying the acknowledgement slot.
    pub fn answer_fn(&self) -> AnswerFn {
        self.answer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Replaces the acknowledgement slot, returning the previous occupant.
    /// The replacement is immediately visible to every clone of this context.
    pub fn swap_answer_fn(&self, f: AnswerFn) -> AnswerFn {
        let mut slot = self
            .answer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        std::mem::replace(&mut *slot, f)
    }
}

impl std::fmt::Debug for CallbackContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackContext")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
