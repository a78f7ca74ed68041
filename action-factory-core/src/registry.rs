//! Registry of bare type tags used for duplicate detection

use crate::error::FactoryError;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Set of bare (unprefixed) type tags registered by strict factories
///
/// Each factory owns one unless a registry is passed in through
/// [`FactoryConfig::registry`](crate::FactoryConfig::registry). Cloning
/// yields a handle to the same set, which is how several factories can
/// share duplicate detection.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Arc<Mutex<HashSet<String>>>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `action_type`, failing if it is already present
    pub fn register(&self, action_type: &str) -> Result<(), FactoryError> {
        let mut types = self.types.lock().unwrap_or_else(PoisonError::into_inner);
        if !types.insert(action_type.to_string()) {
            tracing::warn!(action_type = %action_type, "Duplicate action type rejected");
            return Err(FactoryError::DuplicateType {
                action_type: action_type.to_string(),
            });
        }
        Ok(())
    }

    /// Check if a bare type tag is registered
    pub fn contains(&self, action_type: &str) -> bool {
        self.types
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(action_type)
    }

    /// Number of registered tags
    pub fn len(&self) -> usize {
        self.types.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicates() {
        let registry = TypeRegistry::new();
        assert!(registry.register("FOO").is_ok());
        assert!(registry.register("BAR").is_ok());
        assert_eq!(
            registry.register("FOO"),
            Err(FactoryError::DuplicateType {
                action_type: "FOO".into()
            })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clones_share_entries() {
        let registry = TypeRegistry::new();
        let shared = registry.clone();
        assert!(registry.is_empty());

        shared.register("FOO").unwrap();
        assert!(registry.contains("FOO"));
        assert!(registry.register("FOO").is_err());
    }
}
