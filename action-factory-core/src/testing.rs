//! Test utilities for code that builds and consumes actions
//!
//! - [`TestHarness`]: action channel that records what handlers emit
//! - Assertion macros for checking recorded actions against creators
//!
//! # Example
//!
//! ```
//! use action_factory_core::testing::TestHarness;
//! use action_factory_core::{assert_action_emitted, ActionFactory};
//!
//! let factory = ActionFactory::new();
//! let saved = factory.action::<u32>("SAVED").unwrap();
//!
//! let mut harness = TestHarness::new();
//! harness.emit(saved.create(7));
//!
//! let actions = harness.drain_emitted();
//! assert_action_emitted!(actions, saved);
//! ```

use serde::Serialize;
use tokio::sync::mpsc;

use crate::action::{Action, RawAction};
use crate::creator::ActionCreator;

/// Records actions emitted by code under test
///
/// Actions of any payload type are stored as [`RawAction`]s; use
/// [`ActionCreator::narrow`] to get typed payloads back.
pub struct TestHarness {
    tx: mpsc::UnboundedSender<RawAction>,
    rx: mpsc::UnboundedReceiver<RawAction>,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Get a clone of the action sender for passing to handlers.
    pub fn sender(&self) -> mpsc::UnboundedSender<RawAction> {
        self.tx.clone()
    }

    /// Record a typed action.
    ///
    /// # Panics
    ///
    /// Panics if the payload cannot be serialized.
    pub fn emit<P: Serialize>(&self, action: Action<P>) {
        let raw = action
            .into_raw()
            .unwrap_or_else(|e| panic!("Action payload is not serializable: {}", e));
        let _ = self.tx.send(raw);
    }

    /// Record an already-erased action.
    pub fn emit_raw(&self, action: RawAction) {
        let _ = self.tx.send(action);
    }

    /// Drain all recorded actions.
    pub fn drain_emitted(&mut self) -> Vec<RawAction> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Drain only the actions carrying `creator`'s current tag.
    ///
    /// Other actions stay recorded, in order.
    pub fn drain_type<P>(&mut self, creator: &ActionCreator<P>) -> Vec<RawAction> {
        let (matching, rest): (Vec<_>, Vec<_>) = self
            .drain_emitted()
            .into_iter()
            .partition(|action| creator.matches(action));

        for action in rest {
            let _ = self.tx.send(action);
        }

        matching
    }

    /// Check if any actions were recorded.
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }
}

/// Assert that an action built by `creator` is among `actions`.
#[macro_export]
macro_rules! assert_action_emitted {
    ($actions:expr, $creator:expr) => {
        assert!(
            $actions.iter().any(|a| $creator.matches(a)),
            "Expected action of type `{}` to be emitted, but got: {:?}",
            $creator,
            $actions
                .iter()
                .map(|a| $crate::ActionLike::action_type(a))
                .collect::<Vec<_>>()
        );
    };
}

/// Assert that no action built by `creator` is among `actions`.
#[macro_export]
macro_rules! assert_action_not_emitted {
    ($actions:expr, $creator:expr) => {
        assert!(
            !$actions.iter().any(|a| $creator.matches(a)),
            "Expected NO action of type `{}` to be emitted, but found: {:?}",
            $creator,
            $actions
                .iter()
                .filter(|a| $creator.matches(*a))
                .collect::<Vec<_>>()
        );
    };
}

/// Count the actions among `actions` built by `creator`.
#[macro_export]
macro_rules! count_action_type {
    ($actions:expr, $creator:expr) => {
        $actions.iter().filter(|a| $creator.matches(*a)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ActionFactory;
    use serde_json::json;

    #[test]
    fn test_harness_emit_and_drain() {
        let factory = ActionFactory::new();
        let foo = factory.action::<i32>("FOO").unwrap();
        let mut harness = TestHarness::new();

        harness.emit(foo.create(1));
        harness.emit_raw(Action::new("BAR", json!(null)));

        let actions = harness.drain_emitted();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].payload, json!(1));
        assert_eq!(actions[1].kind, "BAR");

        assert!(harness.drain_emitted().is_empty());
    }

    #[test]
    fn test_drain_type_keeps_others() {
        let factory = ActionFactory::new();
        let foo = factory.action::<i32>("FOO").unwrap();
        let bar = factory.action::<i32>("BAR").unwrap();
        let mut harness = TestHarness::new();

        harness.emit(foo.create(1));
        harness.emit(bar.create(2));
        harness.emit(foo.create(3));

        let foos = harness.drain_type(&foo);
        assert_eq!(foos.len(), 2);
        assert_eq!(foos[1].payload, json!(3));

        let rest = harness.drain_emitted();
        assert_eq!(rest.len(), 1);
        assert!(bar.matches(&rest[0]));
    }

    #[test]
    fn test_sender_feeds_harness() {
        let factory = ActionFactory::new();
        let foo = factory.action::<()>("FOO").unwrap();
        let mut harness = TestHarness::new();

        let tx = harness.sender();
        tx.send(foo.empty().into_raw().unwrap()).unwrap();
        assert!(harness.has_emitted());
    }

    #[test]
    fn test_assert_macros() {
        let factory = ActionFactory::new();
        let foo = factory.action::<i32>("FOO").unwrap();
        let bar = factory.action::<i32>("BAR").unwrap();
        let actions = vec![foo.create(1), foo.create(2)];

        assert_action_emitted!(actions, foo);
        assert_action_not_emitted!(actions, bar);
        assert_eq!(count_action_type!(actions, foo), 2);
        assert_eq!(count_action_type!(actions, bar), 0);
    }
}
