//! Live namespace shared by every creator of one factory

use std::sync::{Arc, PoisonError, RwLock};

/// Shared, mutable type-tag prefix
///
/// Cloning yields another handle to the same prefix. Creators keep a handle
/// and qualify their tag on each read, so an update is seen by all of them.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    prefix: Arc<RwLock<String>>,
}

impl Namespace {
    /// Create a namespace with the given prefix (`""` for none)
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Arc::new(RwLock::new(prefix.into())),
        }
    }

    /// Current prefix
    pub fn get(&self) -> String {
        self.prefix
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the prefix, returning the previous one
    pub fn set(&self, prefix: impl Into<String>) -> String {
        let mut guard = self.prefix.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, prefix.into())
    }

    /// Full tag for `origin_type` under the current prefix
    pub fn qualify(&self, origin_type: &str) -> String {
        let prefix = self.prefix.read().unwrap_or_else(PoisonError::into_inner);
        if prefix.is_empty() {
            origin_type.to_string()
        } else {
            format!("{}/{}", prefix, origin_type)
        }
    }

    /// Whether `candidate` equals `qualify(origin_type)`, without allocating
    pub fn is_qualified(&self, origin_type: &str, candidate: &str) -> bool {
        let prefix = self.prefix.read().unwrap_or_else(PoisonError::into_inner);
        if prefix.is_empty() {
            return candidate == origin_type;
        }
        candidate
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|rest| rest == origin_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify() {
        assert_eq!(Namespace::default().qualify("FOO"), "FOO");
        assert_eq!(Namespace::new("app").qualify("FOO"), "app/FOO");
    }

    #[test]
    fn test_set_is_shared_between_clones() {
        let ns = Namespace::new("a");
        let other = ns.clone();

        let previous = other.set("b");
        assert_eq!(previous, "a");
        assert_eq!(ns.get(), "b");
        assert_eq!(ns.qualify("FOO"), "b/FOO");

        ns.set("");
        assert_eq!(other.qualify("FOO"), "FOO");
    }

    #[test]
    fn test_is_qualified() {
        let ns = Namespace::new("app");
        assert!(ns.is_qualified("FOO", "app/FOO"));
        assert!(!ns.is_qualified("FOO", "FOO"));
        assert!(!ns.is_qualified("FOO", "appFOO"));
        assert!(!ns.is_qualified("FOO", "app/FOO_DONE"));
        assert!(!ns.is_qualified("FOO", "other/FOO"));

        let empty = Namespace::default();
        assert!(empty.is_qualified("FOO", "FOO"));
        assert!(!empty.is_qualified("FOO", "/FOO"));
    }
}
