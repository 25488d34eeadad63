//! Unified error type.

use std::fmt;

/// The error type flowing through a pipeline run.
///
/// Two things can fail while an event is processed: the acknowledgement call
/// to the chat platform, and the downstream handlers themselves. Everything
/// else — composing a [`Pipeline`](crate::Pipeline), constructing
/// [`AutoAnswer`](crate::AutoAnswer) — is infallible.
#[derive(Debug)]
pub enum Error {
    /// The platform rejected the acknowledgement call, or the transport
    /// failed to deliver it. The message is whatever the host adapter
    /// surfaced (API error description, connection failure, ...).
    Answer(String),
    /// A downstream handler failed. Carried unmodified through the chain.
    Handler(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary handler failure.
    pub fn handler(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Handler(Box::new(e))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer(msg) => write!(f, "answer: {msg}"),
            Self::Handler(e)  => write!(f, "handler: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Answer(_)  => None,
            Self::Handler(e) => Some(e.as_ref()),
        }
    }
}
