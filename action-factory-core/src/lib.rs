//! Core types for action-factory
//!
//! This crate builds typed action creators for unidirectional-data-flow
//! applications. A factory mints creators that tag every action they build
//! with a unique, optionally namespaced type string, and lets consumers
//! narrow untyped actions back to their payload type.
//!
//! # Core Concepts
//!
//! - **Action**: A tagged message carrying a payload, an error flag and metadata
//! - **ActionCreator**: Builds actions of one tag and recognizes them again
//! - **ActionFactory**: Owns the namespace and duplicate-tag registry
//! - **Lifecycles**: Async triads (`started`/`done`/`failed`) and poll pairs
//!   (`start`/`stop`)
//!
//! # Basic Example
//!
//! ```
//! use action_factory_core::prelude::*;
//!
//! let factory = ActionFactory::with_namespace("todos");
//! let add = factory.action::<String>("ADD").unwrap();
//! let load = factory.async_action::<(), Vec<String>, ErrorPayload>("LOAD", None).unwrap();
//!
//! let action = add.create("milk".to_string());
//! assert_eq!(action.kind, "todos/ADD");
//! assert!(is_type(&action, &add));
//!
//! let failed = load.failed.create(Failure::with_error(ErrorPayload::new("offline")));
//! assert!(failed.error);
//! assert_eq!(strip_namespace(failed).kind, "LOAD_FAILED");
//! ```
//!
//! # Strict Mode
//!
//! A strict factory rejects a second creator for the same bare tag with
//! [`FactoryError::DuplicateType`]. Strictness defaults to on in debug
//! builds and off in release builds; set it explicitly with
//! [`FactoryConfig::strict`].

pub mod action;
pub mod creator;
pub mod error;
pub mod factory;
pub mod lifecycle;
pub mod namespace;
pub mod payload;
pub mod registry;
#[cfg(feature = "testing")]
pub mod testing;

pub use action::{strip_namespace, Action, ActionLike, Metadata, RawAction};
pub use creator::{is_type, ActionCreator, CreatorOptions, ErrorSpec};
pub use error::FactoryError;
pub use factory::{ActionFactory, FactoryConfig};
pub use lifecycle::{AsyncActionCreators, PollActionCreators};
pub use namespace::Namespace;
pub use payload::{is_error_like, DefaultIsError, ErrorPayload, Failure, Success};
pub use registry::TypeRegistry;

#[cfg(feature = "testing")]
pub use testing::TestHarness;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{strip_namespace, Action, ActionLike, Metadata, RawAction};
    pub use crate::creator::{is_type, ActionCreator, CreatorOptions, ErrorSpec};
    pub use crate::error::FactoryError;
    pub use crate::factory::{ActionFactory, FactoryConfig};
    pub use crate::lifecycle::{AsyncActionCreators, PollActionCreators};
    pub use crate::payload::{ErrorPayload, Failure, Success};
}
