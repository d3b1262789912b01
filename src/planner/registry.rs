use super::activity::{ActivityPolicy, CyclicNamedDestinationPolicy, RandomActivityPolicy};
use crate::{PlannerError, Result};
use std::{collections::HashMap, sync::Arc};

/// Registry of activity policies addressable by name
#[derive(Debug, Default, Clone)]
pub struct PolicyRegistry {
    policies: HashMap<String, Arc<dyn ActivityPolicy>>,
}

impl PolicyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the random and cyclic policies
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(RandomActivityPolicy::new());
        registry.register(CyclicNamedDestinationPolicy::new());
        registry
    }

    /// Register a policy, replacing any previous one with the same name
    pub fn register<P: ActivityPolicy + 'static>(&mut self, policy: P) {
        self.policies
            .insert(policy.name().to_string(), Arc::new(policy));
    }

    /// Get a policy by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ActivityPolicy>> {
        self.policies.get(name).cloned()
    }

    /// Get a policy by name, failing with a configuration error
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ActivityPolicy>> {
        self.get(name).ok_or_else(|| {
            PlannerError::Config(format!(
                "unknown activity policy `{}` (available: {})",
                name,
                self.names().join(", ")
            ))
        })
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.policies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All registered policies, sorted by name
    pub fn list(&self) -> Vec<&dyn ActivityPolicy> {
        let mut policies: Vec<&dyn ActivityPolicy> =
            self.policies.values().map(|policy| policy.as_ref()).collect();
        policies.sort_by_key(|policy| policy.name());
        policies
    }

    pub fn contains(&self, name: &str) -> bool {
        self.policies.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_policies() {
        let registry = PolicyRegistry::with_builtin();

        assert!(registry.contains("random"));
        assert!(registry.contains("cyclic"));
        assert!(!registry.contains("nonexistent"));
        assert_eq!(registry.names(), vec!["cyclic", "random"]);
    }

    #[test]
    fn test_resolve_unknown_policy() {
        let registry = PolicyRegistry::with_builtin();
        let err = registry.resolve("weighted").unwrap_err();

        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("cyclic, random"));
    }

    #[test]
    fn test_list_is_sorted() {
        let registry = PolicyRegistry::with_builtin();
        let names: Vec<_> = registry.list().iter().map(|policy| policy.name()).collect();
        assert_eq!(names, vec!["cyclic", "random"]);
    }
}
