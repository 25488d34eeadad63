//! Minimal autoack example — two button handlers, one of which forgets to
//! acknowledge its callback query.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! Watch the log: the "confirm" press is answered by its handler, the
//! "cancel" press is answered by AutoAnswer after the chain finishes.

use std::sync::Arc;

use async_trait::async_trait;
use autoack::{
    AnswerFn, AnswerParams, AutoAnswer, CallbackContext, CallbackQuery, Error, Middleware, Next,
    Pipeline,
};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let pipeline = Pipeline::new()
        .with(AutoAnswer::with_params(AnswerParams::new().text("Got it")))
        .with(Buttons);

    // A real host adapter would deserialize these from platform updates.
    for raw in [
        r#"{ "id": "1001", "from_id": 7, "data": "confirm" }"#,
        r#"{ "id": "1002", "from_id": 7, "data": "cancel" }"#,
    ] {
        let query: CallbackQuery = serde_json::from_str(raw).expect("bad demo payload");
        let cx = CallbackContext::new(query, fake_adapter());
        pipeline.handle(cx).await.expect("pipeline error");
    }
}

// Stands in for the host framework's API client: logs the acknowledgement
// instead of sending it to the platform.
fn fake_adapter() -> AnswerFn {
    Arc::new(|params| {
        Box::pin(async move {
            info!(?params, "answerCallbackQuery sent");
            Ok(())
        })
    })
}

struct Buttons;

#[async_trait]
impl Middleware for Buttons {
    fn name(&self) -> &str {
        "buttons"
    }

    async fn handle(&self, cx: CallbackContext, _next: Next) -> Result<(), Error> {
        match cx.query().data.as_deref() {
            Some("confirm") => {
                info!("confirm pressed, answering explicitly");
                cx.answer(AnswerParams::new().text("Confirmed!").show_alert(true)).await
            }
            other => {
                // No explicit answer here — AutoAnswer covers for us.
                info!(data = ?other, "press handled without answering");
                Ok(())
            }
        }
    }
}
