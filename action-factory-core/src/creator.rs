//! Action creators and the type guard built on them

use crate::action::{Action, ActionLike, Metadata, RawAction};
use crate::namespace::Namespace;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// How a creator decides whether the actions it builds are failures
pub enum ErrorSpec<P> {
    /// Never set the error flag
    Never,
    /// Always set the error flag
    Always,
    /// Set the error flag when the predicate holds for the payload
    Predicate(Arc<dyn Fn(&P) -> bool + Send + Sync>),
}

impl<P> ErrorSpec<P> {
    /// Wrap a predicate over the payload
    pub fn predicate(f: impl Fn(&P) -> bool + Send + Sync + 'static) -> Self {
        ErrorSpec::Predicate(Arc::new(f))
    }

    /// Evaluate this spec against a payload
    pub fn is_error(&self, payload: &P) -> bool {
        match self {
            ErrorSpec::Never => false,
            ErrorSpec::Always => true,
            ErrorSpec::Predicate(f) => f(payload),
        }
    }
}

impl<P> Clone for ErrorSpec<P> {
    fn clone(&self) -> Self {
        match self {
            ErrorSpec::Never => ErrorSpec::Never,
            ErrorSpec::Always => ErrorSpec::Always,
            ErrorSpec::Predicate(f) => ErrorSpec::Predicate(Arc::clone(f)),
        }
    }
}

impl<P> std::fmt::Debug for ErrorSpec<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSpec::Never => write!(f, "Never"),
            ErrorSpec::Always => write!(f, "Always"),
            ErrorSpec::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

impl<P> From<bool> for ErrorSpec<P> {
    fn from(always: bool) -> Self {
        if always {
            ErrorSpec::Always
        } else {
            ErrorSpec::Never
        }
    }
}

/// Optional settings for [`ActionFactory::action_with`](crate::ActionFactory::action_with)
///
/// Leaving `error` unset applies the factory's default predicate.
pub struct CreatorOptions<P> {
    /// Metadata merged into every action the creator builds
    pub meta: Option<Metadata>,
    /// Error classification; `None` uses the factory default
    pub error: Option<ErrorSpec<P>>,
}

impl<P> Default for CreatorOptions<P> {
    fn default() -> Self {
        Self {
            meta: None,
            error: None,
        }
    }
}

impl<P> CreatorOptions<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the common metadata
    pub fn meta(mut self, meta: Metadata) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Set the error classification
    pub fn error(mut self, error: impl Into<ErrorSpec<P>>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Builds actions of one type tag
///
/// The full tag is computed from the factory's live namespace every time it
/// is needed, so [`action_type`](Self::action_type), [`matches`](Self::matches)
/// and newly built actions all follow namespace updates.
///
/// # Example
///
/// ```
/// use action_factory_core::ActionFactory;
///
/// let factory = ActionFactory::with_namespace("todos");
/// let add = factory.action::<String>("ADD").unwrap();
///
/// let action = add.create("milk".to_string());
/// assert_eq!(action.kind, "todos/ADD");
/// assert!(add.matches(&action));
/// ```
pub struct ActionCreator<P> {
    origin_type: Arc<str>,
    common_meta: Option<Arc<Metadata>>,
    error: ErrorSpec<P>,
    namespace: Namespace,
}

impl<P> ActionCreator<P> {
    pub(crate) fn new(
        origin_type: impl Into<Arc<str>>,
        common_meta: Option<Metadata>,
        error: ErrorSpec<P>,
        namespace: Namespace,
    ) -> Self {
        Self {
            origin_type: origin_type.into(),
            common_meta: common_meta.map(Arc::new),
            error,
            namespace,
        }
    }

    /// The tag as given to the factory, without namespace
    pub fn origin_type(&self) -> &str {
        &self.origin_type
    }

    /// The namespace-qualified tag under the current namespace
    pub fn action_type(&self) -> String {
        self.namespace.qualify(&self.origin_type)
    }

    /// Metadata fixed at construction time
    pub fn common_meta(&self) -> Option<&Metadata> {
        self.common_meta.as_deref()
    }

    /// How this creator classifies failures
    pub fn error_spec(&self) -> &ErrorSpec<P> {
        &self.error
    }

    /// Whether `action` carries this creator's current tag
    pub fn matches<A: ActionLike + ?Sized>(&self, action: &A) -> bool {
        self.namespace
            .is_qualified(&self.origin_type, action.action_type())
    }

    /// Build an action
    pub fn create(&self, payload: P) -> Action<P> {
        self.build(payload, None)
    }

    /// Build an action with per-call metadata
    ///
    /// Keys in `meta` override the creator's common metadata.
    pub fn create_with_meta(&self, payload: P, meta: Metadata) -> Action<P> {
        self.build(payload, Some(meta))
    }

    /// Recover a typed action from a raw one carrying this creator's tag
    ///
    /// Returns `Ok(None)` when the tag does not match.
    pub fn narrow(&self, raw: RawAction) -> Result<Option<Action<P>>, serde_json::Error>
    where
        P: DeserializeOwned,
    {
        if !self.matches(&raw) {
            return Ok(None);
        }
        let payload = serde_json::from_value(raw.payload)?;
        Ok(Some(Action {
            kind: raw.kind,
            payload,
            error: raw.error,
            meta: raw.meta,
        }))
    }

    fn build(&self, payload: P, meta: Option<Metadata>) -> Action<P> {
        let kind = self.action_type();
        let meta = merge_meta(self.common_meta.as_deref(), meta);
        let error = self.error.is_error(&payload);
        tracing::trace!(action_type = %kind, error, "Building action");
        Action {
            kind,
            payload,
            error,
            meta,
        }
    }
}

impl ActionCreator<()> {
    /// Build an action for a creator that takes no payload
    pub fn empty(&self) -> Action<()> {
        self.create(())
    }
}

impl<P> Clone for ActionCreator<P> {
    fn clone(&self) -> Self {
        Self {
            origin_type: Arc::clone(&self.origin_type),
            common_meta: self.common_meta.clone(),
            error: self.error.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

impl<P> std::fmt::Debug for ActionCreator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCreator")
            .field("action_type", &self.action_type())
            .field("origin_type", &self.origin_type)
            .field("common_meta", &self.common_meta)
            .field("error", &self.error)
            .finish()
    }
}

impl<P> std::fmt::Display for ActionCreator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.action_type())
    }
}

fn merge_meta(common: Option<&Metadata>, call: Option<Metadata>) -> Option<Metadata> {
    match (common, call) {
        (None, None) => None,
        (Some(common), None) => Some(common.clone()),
        (None, Some(call)) => Some(call),
        (Some(common), Some(call)) => {
            let mut merged = common.clone();
            merged.extend(call);
            Some(merged)
        }
    }
}

/// Type guard: whether `action` was built by (or is tagged like) `creator`
///
/// Compares against the creator's live tag.
pub fn is_type<A, P>(action: &A, creator: &ActionCreator<P>) -> bool
where
    A: ActionLike + ?Sized,
{
    creator.matches(action)
}
