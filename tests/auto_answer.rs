//! Behavioral tests for the auto-answer middleware, run against a fake
//! platform adapter that records every acknowledgement it is asked to send.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use autoack::{
    AnswerParams, AutoAnswer, CallbackContext, CallbackQuery, Error, Middleware, Next, Pipeline,
};

type Calls = Arc<Mutex<Vec<AnswerParams>>>;

fn query() -> CallbackQuery {
    CallbackQuery { id: "query-1".into(), from_id: 42, data: Some("press".into()) }
}

/// A context whose adapter records each answer and succeeds.
fn recording_context(calls: &Calls) -> CallbackContext {
    let calls = Arc::clone(calls);
    CallbackContext::new(
        query(),
        Arc::new(move |params| {
            let calls = Arc::clone(&calls);
            Box::pin(async move {
                calls.lock().unwrap().push(params);
                Ok(())
            })
        }),
    )
}

/// A context whose adapter records each answer and then fails it.
fn failing_context(calls: &Calls) -> CallbackContext {
    let calls = Arc::clone(calls);
    CallbackContext::new(
        query(),
        Arc::new(move |params| {
            let calls = Arc::clone(&calls);
            Box::pin(async move {
                calls.lock().unwrap().push(params);
                Err(Error::Answer("QUERY_ID_INVALID".into()))
            })
        }),
    )
}

/// Closure-backed middleware so each test can inline its handler.
struct Handler<F>(F);

#[async_trait]
impl<F, Fut> Middleware for Handler<F>
where
    F: Fn(CallbackContext, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), Error>> + Send + 'static,
{
    fn name(&self) -> &str {
        "test-handler"
    }

    async fn handle(&self, cx: CallbackContext, next: Next) -> Result<(), Error> {
        (self.0)(cx, next).await
    }
}

#[tokio::test]
async fn downstream_answer_is_not_repeated() {
    let calls = Calls::default();
    let pipeline = Pipeline::new()
        .with(AutoAnswer::new())
        .with(Handler(|cx: CallbackContext, _next| async move {
            cx.answer(AnswerParams::new().text("hi")).await
        }));

    pipeline.handle(recording_context(&calls)).await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "middleware must not answer a second time");
    assert_eq!(calls[0], AnswerParams::new().text("hi"));
}

#[tokio::test]
async fn fallback_fires_with_configured_params() {
    let calls = Calls::default();
    let params = AnswerParams::new().text("Done").cache_time(10);
    let pipeline = Pipeline::new()
        .with(AutoAnswer::with_params(params.clone()))
        .with(Handler(|_cx, _next| async move { Ok(()) }));

    pipeline.handle(recording_context(&calls)).await.unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![params]);
}

#[tokio::test]
async fn fallback_uses_empty_params_by_default() {
    let calls = Calls::default();
    let pipeline = Pipeline::new()
        .with(AutoAnswer::new())
        .with(Handler(|_cx, _next| async move { Ok(()) }));

    pipeline.handle(recording_context(&calls)).await.unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![AnswerParams::new()]);
}

#[tokio::test]
async fn wrapped_answer_passes_failure_through_to_the_caller() {
    let calls = Calls::default();
    let seen = Arc::new(Mutex::new(None));
    let seen_in_handler = Arc::clone(&seen);

    let pipeline = Pipeline::new()
        .with(AutoAnswer::new())
        .with(Handler(move |cx: CallbackContext, _next| {
            let seen = Arc::clone(&seen_in_handler);
            async move {
                let result = cx.answer_empty().await;
                *seen.lock().unwrap() = Some(result.unwrap_err().to_string());
                Ok(())
            }
        }));

    pipeline.handle(failing_context(&calls)).await.unwrap();

    // The handler saw the adapter's error, unmodified by the wrapper.
    assert_eq!(seen.lock().unwrap().as_deref(), Some("answer: QUERY_ID_INVALID"));
    // The handler's call counted as an answer, so no fallback followed it.
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn fallback_failure_does_not_escape_the_pipeline() {
    let calls = Calls::default();
    let pipeline = Pipeline::new()
        .with(AutoAnswer::new())
        .with(Handler(|_cx, _next| async move { Ok(()) }));

    let result = pipeline.handle(failing_context(&calls)).await;

    assert!(result.is_ok(), "a failed fallback answer must be swallowed");
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn handler_error_propagates_and_skips_the_fallback() {
    let calls = Calls::default();
    let pipeline = Pipeline::new()
        .with(AutoAnswer::new())
        .with(Handler(|_cx, _next| async move {
            Err(Error::handler(std::io::Error::other("db down")))
        }));

    let result = pipeline.handle(recording_context(&calls)).await;

    assert!(matches!(result, Err(Error::Handler(_))));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn deferred_downstream_answer_suppresses_the_fallback() {
    let calls = Calls::default();
    let pipeline = Pipeline::new()
        .with(AutoAnswer::with_params(AnswerParams::new().text("fallback")))
        .with(Handler(|cx: CallbackContext, _next| async move {
            // Answer late, but before the handler future resolves. The
            // middleware awaits the full chain, so this still counts.
            tokio::time::sleep(Duration::from_millis(20)).await;
            cx.answer(AnswerParams::new().text("late")).await
        }));

    pipeline.handle(recording_context(&calls)).await.unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![AnswerParams::new().text("late")]);
}

#[tokio::test]
async fn swap_is_visible_to_handlers_deeper_in_the_chain() {
    let calls = Calls::default();
    let pipeline = Pipeline::new()
        .with(AutoAnswer::new())
        .with(Handler(|cx: CallbackContext, next: Next| async move {
            // A pass-through layer: the answer happens two levels down.
            next.run(cx).await
        }))
        .with(Handler(|cx: CallbackContext, _next| async move {
            cx.answer_empty().await
        }));

    pipeline.handle(recording_context(&calls)).await.unwrap();

    assert_eq!(calls.lock().unwrap().len(), 1);
}
