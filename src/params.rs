//! Acknowledgement parameters for `answerCallbackQuery`.
//!
//! Every field is optional — the platform accepts a completely empty
//! acknowledgement, which just dismisses the client's loading state.
//! This crate forwards the value verbatim and never validates it; whether a
//! given combination is acceptable is between the host adapter and the
//! platform.

use serde::Serialize;

/// Parameters for the acknowledgement call.
///
/// Mirrors the Bot API `answerCallbackQuery` parameter set, minus the query
/// id — the per-event context already knows which query it belongs to, so
/// the host adapter supplies the id when it builds the wire request.
///
/// ```rust
/// use autoack::AnswerParams;
///
/// AnswerParams::new().text("Saved!").cache_time(30);
/// AnswerParams::new().text("Are you sure?").show_alert(true);
/// AnswerParams::new(); // empty — dismiss the spinner, nothing more
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnswerParams {
    /// Notification text shown to the user. Absent means no notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Show an alert dialog instead of a top-of-screen toast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    /// URL to open on the client (games / deep links).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Client-side cache duration for this answer, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
}

impl AnswerParams {
    /// An empty parameter set — acknowledge with no special options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn show_alert(mut self, show_alert: bool) -> Self {
        self.show_alert = Some(show_alert);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn cache_time(mut self, seconds: u32) -> Self {
        self.cache_time = Some(seconds);
        self
    }
}
