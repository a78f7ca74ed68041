//! Bundles of creators modelling multi-step lifecycles

use crate::creator::ActionCreator;
use crate::namespace::Namespace;
use crate::payload::{Failure, Success};
use std::sync::Arc;

pub const STARTED_SUFFIX: &str = "_STARTED";
pub const DONE_SUFFIX: &str = "_DONE";
pub const FAILED_SUFFIX: &str = "_FAILED";
pub const START_SUFFIX: &str = "-start";
pub const STOP_SUFFIX: &str = "-stop";

/// Creators for an async request: `started`, `done` and `failed`
///
/// - `started` carries the request parameters
/// - `done` carries [`Success`] (parameters plus result)
/// - `failed` carries [`Failure`] (parameters plus error) and always sets
///   the error flag
///
/// # Example
///
/// ```
/// use action_factory_core::{ActionFactory, Success};
///
/// let factory = ActionFactory::new();
/// let fetch = factory.async_action::<u32, String, String>("FETCH", None).unwrap();
///
/// let done = fetch.done.create(Success::new(1, "ok".to_string()));
/// assert_eq!(done.kind, "FETCH_DONE");
/// assert_eq!(fetch.action_type(), "FETCH");
/// ```
pub struct AsyncActionCreators<Params, R, E> {
    pub started: ActionCreator<Params>,
    pub done: ActionCreator<Success<Params, R>>,
    pub failed: ActionCreator<Failure<Params, E>>,
    origin_type: Arc<str>,
    namespace: Namespace,
}

impl<Params, R, E> AsyncActionCreators<Params, R, E> {
    pub(crate) fn new(
        origin_type: impl Into<Arc<str>>,
        namespace: Namespace,
        started: ActionCreator<Params>,
        done: ActionCreator<Success<Params, R>>,
        failed: ActionCreator<Failure<Params, E>>,
    ) -> Self {
        Self {
            started,
            done,
            failed,
            origin_type: origin_type.into(),
            namespace,
        }
    }

    /// Base tag the three creators derive from, without namespace
    pub fn origin_type(&self) -> &str {
        &self.origin_type
    }

    /// Base tag under the current namespace (not suffixed)
    pub fn action_type(&self) -> String {
        self.namespace.qualify(&self.origin_type)
    }
}

impl<Params, R, E> Clone for AsyncActionCreators<Params, R, E> {
    fn clone(&self) -> Self {
        Self {
            started: self.started.clone(),
            done: self.done.clone(),
            failed: self.failed.clone(),
            origin_type: Arc::clone(&self.origin_type),
            namespace: self.namespace.clone(),
        }
    }
}

impl<Params, R, E> std::fmt::Debug for AsyncActionCreators<Params, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncActionCreators")
            .field("action_type", &self.action_type())
            .field("started", &self.started)
            .field("done", &self.done)
            .field("failed", &self.failed)
            .finish()
    }
}

/// Creators for a polling session: `start` and `stop`
pub struct PollActionCreators<P> {
    pub start: ActionCreator<P>,
    /// Takes no payload; build with [`ActionCreator::empty`]
    pub stop: ActionCreator<()>,
    origin_type: Arc<str>,
    namespace: Namespace,
}

impl<P> PollActionCreators<P> {
    pub(crate) fn new(
        origin_type: impl Into<Arc<str>>,
        namespace: Namespace,
        start: ActionCreator<P>,
        stop: ActionCreator<()>,
    ) -> Self {
        Self {
            start,
            stop,
            origin_type: origin_type.into(),
            namespace,
        }
    }

    pub fn origin_type(&self) -> &str {
        &self.origin_type
    }

    pub fn action_type(&self) -> String {
        self.namespace.qualify(&self.origin_type)
    }
}

impl<P> Clone for PollActionCreators<P> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            stop: self.stop.clone(),
            origin_type: Arc::clone(&self.origin_type),
            namespace: self.namespace.clone(),
        }
    }
}

impl<P> std::fmt::Debug for PollActionCreators<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollActionCreators")
            .field("action_type", &self.action_type())
            .field("start", &self.start)
            .field("stop", &self.stop)
            .finish()
    }
}
