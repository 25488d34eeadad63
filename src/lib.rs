//! # autoack
//!
//! Auto-acknowledge unanswered callback queries in a bot middleware chain.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The chat platform requires every callback query to be acknowledged
//! within a time window; miss it and the user stares at a loading spinner.
//! The host bot framework owns transport, update dispatch, and the actual
//! API call — autoack does not, by design. What's left for autoack is the
//! one obligation every handler author eventually forgets:
//!
//! - **Observe** — wrap the context's acknowledgement function so any
//!   downstream call is recorded, without changing what the call does
//! - **Await** — let the whole handler chain finish, including deferred
//!   async work
//! - **Fall back** — if nobody answered, answer once with the parameters
//!   configured at install time, and swallow a failure of that last-resort
//!   call (there is no one left to handle it)
//!
//! It never answers twice: a second answer for the same query id would be
//! rejected by the platform and waste a network call.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use autoack::{AnswerParams, AutoAnswer, CallbackContext, Error, Middleware, Next, Pipeline};
//! use async_trait::async_trait;
//!
//! struct OnPress;
//!
//! #[async_trait]
//! impl Middleware for OnPress {
//!     fn name(&self) -> &str {
//!         "on-press"
//!     }
//!
//!     async fn handle(&self, cx: CallbackContext, _next: Next) -> Result<(), Error> {
//!         match cx.query().data.as_deref() {
//!             // You answered — autoack stays out of the way.
//!             Some("confirm") => cx.answer(AnswerParams::new().text("Confirmed!")).await,
//!             // You forgot — autoack answers for you after the chain ends.
//!             _ => Ok(()),
//!         }
//!     }
//! }
//!
//! let pipeline = Pipeline::new()
//!     .with(AutoAnswer::new()) // install before the handlers it covers
//!     .with(OnPress);
//!
//! // Per incoming update, the host adapter builds a CallbackContext and:
//! //   pipeline.handle(cx).await?;
//! ```

mod auto_answer;
mod context;
mod error;
mod params;
mod pipeline;

pub use auto_answer::AutoAnswer;
pub use context::{AnswerFn, BoxFuture, CallbackContext, CallbackQuery};
pub use error::Error;
pub use params::AnswerParams;
pub use pipeline::{Middleware, Next, Pipeline};
