//! Payload shapes for async lifecycles and the default error check

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::error::Error;
use std::sync::Arc;

/// Factory-wide predicate deciding whether a payload represents a failure
///
/// It is type-erased so one factory can serve creators of any payload type.
pub type DefaultIsError = Arc<dyn Fn(&dyn Any) -> bool + Send + Sync>;

/// Default failure check: true when the payload is one of the common Rust
/// error values
///
/// Recognized payload types are [`ErrorPayload`], `Box<dyn Error + Send + Sync>`,
/// `Arc<dyn Error + Send + Sync>`, [`std::io::Error`] and [`serde_json::Error`].
pub fn is_error_like(payload: &dyn Any) -> bool {
    payload.is::<ErrorPayload>()
        || payload.is::<Box<dyn Error + Send + Sync>>()
        || payload.is::<Arc<dyn Error + Send + Sync>>()
        || payload.is::<std::io::Error>()
        || payload.is::<serde_json::Error>()
}

/// Serializable error value for use as an action payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Attach a machine-readable code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for ErrorPayload {}

impl From<&dyn Error> for ErrorPayload {
    fn from(err: &dyn Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Payload of an async triad's `done` action
///
/// Use `()` for a side of the lifecycle that carries nothing. The
/// `with_*` constructors let callers leave such a side out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Success<P, R> {
    pub params: P,
    pub result: R,
}

impl<P, R> Success<P, R> {
    pub fn new(params: P, result: R) -> Self {
        Self { params, result }
    }
}

impl<R> Success<(), R> {
    /// Success of an operation that takes no parameters
    pub fn with_result(result: R) -> Self {
        Self { params: (), result }
    }
}

impl<P> Success<P, ()> {
    /// Success of an operation that produces no result
    pub fn with_params(params: P) -> Self {
        Self { params, result: () }
    }
}

/// Payload of an async triad's `failed` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure<P, E> {
    pub params: P,
    pub error: E,
}

impl<P, E> Failure<P, E> {
    pub fn new(params: P, error: E) -> Self {
        Self { params, error }
    }
}

impl<E> Failure<(), E> {
    /// Failure of an operation that takes no parameters
    pub fn with_error(error: E) -> Self {
        Self { params: (), error }
    }
}

impl<P> Failure<P, ()> {
    /// Failure that carries no error detail
    pub fn with_params(params: P) -> Self {
        Self { params, error: () }
    }
}
