//! The action creator factory and its configuration
//!
//! A factory owns a live [`Namespace`] and a [`TypeRegistry`]. Every creator
//! it builds holds a handle to the namespace, so updating it moves all of
//! them at once.
//!
//! # Example
//!
//! ```
//! use action_factory_core::{ActionFactory, FactoryConfig};
//!
//! let factory = FactoryConfig::new().namespace("app").strict(true).build();
//! let ping = factory.action::<()>("PING").unwrap();
//!
//! // Strict factories reject a second registration of the same tag
//! assert!(factory.action::<()>("PING").is_err());
//!
//! factory.update_namespace("other");
//! assert_eq!(ping.empty().kind, "other/PING");
//! ```

use crate::action::Metadata;
use crate::creator::{ActionCreator, CreatorOptions, ErrorSpec};
use crate::error::FactoryError;
use crate::lifecycle::{
    AsyncActionCreators, PollActionCreators, DONE_SUFFIX, FAILED_SUFFIX, STARTED_SUFFIX,
    START_SUFFIX, STOP_SUFFIX,
};
use crate::namespace::Namespace;
use crate::payload::{is_error_like, DefaultIsError};
use crate::registry::TypeRegistry;
use std::any::Any;
use std::sync::Arc;

/// Configuration for an [`ActionFactory`]
pub struct FactoryConfig {
    /// Prefix applied to every tag; `None` or `""` for none
    pub namespace: Option<String>,
    /// Reject duplicate tags at construction time
    ///
    /// Defaults to `true` in debug builds and `false` in release builds.
    pub strict: bool,
    /// Error predicate used by creators built without an explicit [`ErrorSpec`]
    pub is_error: DefaultIsError,
    /// Registry to share with other factories; a fresh one is created if unset
    pub registry: Option<TypeRegistry>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            strict: cfg!(debug_assertions),
            is_error: Arc::new(is_error_like),
            registry: None,
        }
    }
}

impl std::fmt::Debug for FactoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryConfig")
            .field("namespace", &self.namespace)
            .field("strict", &self.strict)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl FactoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replace the default error predicate
    pub fn is_error(mut self, f: impl Fn(&dyn Any) -> bool + Send + Sync + 'static) -> Self {
        self.is_error = Arc::new(f);
        self
    }

    /// Share duplicate detection with other factories
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> ActionFactory {
        ActionFactory::from_config(self)
    }
}

/// Factory for uniquely-tagged action creators
///
/// Each factory has its own namespace and, unless one is shared through
/// [`FactoryConfig::registry`], its own type registry.
pub struct ActionFactory {
    namespace: Namespace,
    registry: TypeRegistry,
    strict: bool,
    is_error: DefaultIsError,
}

impl Default for ActionFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ActionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionFactory")
            .field("namespace", &self.namespace.get())
            .field("strict", &self.strict)
            .field("registered", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl ActionFactory {
    /// Create a factory with no namespace and default settings
    pub fn new() -> Self {
        FactoryConfig::default().build()
    }

    /// Create a factory whose tags are prefixed with `namespace/`
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        FactoryConfig::new().namespace(namespace).build()
    }

    pub fn from_config(config: FactoryConfig) -> Self {
        Self {
            namespace: Namespace::new(config.namespace.unwrap_or_default()),
            registry: config.registry.unwrap_or_default(),
            strict: config.strict,
            is_error: config.is_error,
        }
    }

    /// Current namespace prefix
    pub fn namespace(&self) -> String {
        self.namespace.get()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Replace the namespace for every creator this factory has built or will build
    ///
    /// Actions that already exist keep their tag. `""` clears the prefix.
    pub fn update_namespace(&self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        let previous = self.namespace.set(namespace.clone());
        tracing::debug!(from = %previous, to = %namespace, "Namespace updated");
    }

    /// Build a creator using the factory's default error predicate
    pub fn action<P: 'static>(
        &self,
        action_type: impl Into<String>,
    ) -> Result<ActionCreator<P>, FactoryError> {
        self.action_with(action_type, CreatorOptions::default())
    }

    /// Build a creator with common metadata and/or an explicit [`ErrorSpec`]
    pub fn action_with<P: 'static>(
        &self,
        action_type: impl Into<String>,
        options: CreatorOptions<P>,
    ) -> Result<ActionCreator<P>, FactoryError> {
        let origin_type = action_type.into();
        if self.strict {
            self.registry.register(&origin_type)?;
        }

        let error = options.error.unwrap_or_else(|| self.default_error_spec());
        tracing::debug!(
            action_type = %origin_type,
            namespace = %self.namespace.get(),
            error = ?error,
            "Registered action creator"
        );

        Ok(ActionCreator::new(
            origin_type,
            options.meta,
            error,
            self.namespace.clone(),
        ))
    }

    /// Build `started`/`done`/`failed` creators tagged `{type}_STARTED`,
    /// `{type}_DONE` and `{type}_FAILED`
    ///
    /// `failed` always flags its actions as errors, the other two never do.
    pub fn async_action<Params: 'static, R: 'static, E: 'static>(
        &self,
        action_type: impl Into<String>,
        meta: Option<Metadata>,
    ) -> Result<AsyncActionCreators<Params, R, E>, FactoryError> {
        let origin_type = action_type.into();

        let started = self.action_with(
            format!("{}{}", origin_type, STARTED_SUFFIX),
            options(meta.clone(), ErrorSpec::Never),
        )?;
        let done = self.action_with(
            format!("{}{}", origin_type, DONE_SUFFIX),
            options(meta.clone(), ErrorSpec::Never),
        )?;
        let failed = self.action_with(
            format!("{}{}", origin_type, FAILED_SUFFIX),
            options(meta, ErrorSpec::Always),
        )?;

        Ok(AsyncActionCreators::new(
            origin_type,
            self.namespace.clone(),
            started,
            done,
            failed,
        ))
    }

    /// Build `start`/`stop` creators tagged `{type}-start` and `{type}-stop`
    pub fn poll<P: 'static>(
        &self,
        action_type: impl Into<String>,
        meta: Option<Metadata>,
    ) -> Result<PollActionCreators<P>, FactoryError> {
        let origin_type = action_type.into();

        let start = self.action_with(
            format!("{}{}", origin_type, START_SUFFIX),
            options(meta.clone(), ErrorSpec::Never),
        )?;
        let stop = self.action_with(
            format!("{}{}", origin_type, STOP_SUFFIX),
            options(meta, ErrorSpec::Never),
        )?;

        Ok(PollActionCreators::new(
            origin_type,
            self.namespace.clone(),
            start,
            stop,
        ))
    }

    fn default_error_spec<P: 'static>(&self) -> ErrorSpec<P> {
        let is_error = Arc::clone(&self.is_error);
        ErrorSpec::predicate(move |payload: &P| is_error(payload as &dyn Any))
    }
}

fn options<P>(meta: Option<Metadata>, error: ErrorSpec<P>) -> CreatorOptions<P> {
    CreatorOptions {
        meta,
        error: Some(error),
    }
}
