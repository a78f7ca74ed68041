//! action-factory: typed action creators for unidirectional data flow
//!
//! Mint uniquely-tagged action creators, bundle them into async request
//! lifecycles or poll sessions, and narrow actions back to their payload.
//!
//! # Example
//! ```
//! use action_factory::prelude::*;
//!
//! let factory = ActionFactory::with_namespace("weather");
//! let fetch = factory
//!     .async_action::<String, f64, ErrorPayload>("FETCH", None)
//!     .unwrap();
//!
//! let done = fetch.done.create(Success::new("Oslo".to_string(), 4.5));
//! assert_eq!(done.kind, "weather/FETCH_DONE");
//! assert!(fetch.done.matches(&done));
//! ```

// Re-export everything from core
pub use action_factory_core::*;

// Re-export test assertion macros
#[cfg(feature = "testing")]
pub use action_factory_core::{assert_action_emitted, assert_action_not_emitted, count_action_type};

/// Prelude for convenient imports
pub mod prelude {
    pub use action_factory_core::prelude::*;

    #[cfg(feature = "testing")]
    pub use action_factory_core::testing::TestHarness;
}
