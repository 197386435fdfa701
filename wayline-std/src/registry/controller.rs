//! Controller and namespace hook registries.

use super::named::{Named, NamedRegistry};
use std::sync::Arc;
use wayline_core::{Action, Actions, EntryKind, HelperBundle, Hook};

/// A registered controller: its actions and the helper bundle they get.
#[derive(Debug)]
pub struct ControllerEntry {
    name: String,
    actions: Actions,
    helpers: HelperBundle,
}

impl ControllerEntry {
    /// Create an entry. The name may carry a namespace, e.g. `admin/users`.
    pub fn new(name: impl Into<String>, actions: Actions, helpers: HelperBundle) -> Self {
        Self {
            name: name.into(),
            actions,
            helpers,
        }
    }

    /// Registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All actions.
    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    /// The helper bundle passed to every action of this controller.
    pub fn helpers(&self) -> &HelperBundle {
        &self.helpers
    }

    /// Look up one action.
    pub fn action(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }
}

impl Named for ControllerEntry {
    const KIND: EntryKind = EntryKind::Controller;
}

impl Named for dyn Hook {
    const KIND: EntryKind = EntryKind::Namespace;
}

/// Controllers by name.
pub type ControllerRegistry = NamedRegistry<ControllerEntry>;

/// Namespace hooks by namespace name.
pub type NamespaceRegistry = NamedRegistry<dyn Hook>;

impl ControllerRegistry {
    /// Register a controller under the name the entry carries.
    pub fn register_entry(
        &mut self,
        entry: ControllerEntry,
    ) -> Result<(), wayline_core::RegistrationError> {
        let name = entry.name.clone();
        self.register(name, Arc::new(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayline_core::{Facade, RegistrationError};

    fn users() -> ControllerEntry {
        ControllerEntry::new(
            "users",
            Actions::new().action("index", |_scope| Ok(())),
            HelperBundle::new(),
        )
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ControllerRegistry::new();
        registry.register_entry(users()).unwrap();

        let entry = registry.lookup("users").unwrap();
        assert_eq!(entry.name(), "users");
        assert!(entry.action("index").is_some());
        assert!(entry.action("show").is_none());
        assert!(registry.lookup("admin/users").is_none());
    }

    #[test]
    fn test_duplicate_controller_rejected() {
        let mut registry = ControllerRegistry::new();
        registry.register_entry(users()).unwrap();

        let err = registry.register_entry(users()).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::Duplicate {
                kind: EntryKind::Controller,
                name: "users".into()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_namespaced_name_is_distinct() {
        let mut registry = ControllerRegistry::new();
        registry.register_entry(users()).unwrap();
        registry
            .register_entry(ControllerEntry::new("admin/users", Actions::new(), HelperBundle::new()))
            .unwrap();

        assert_eq!(registry.names(), vec!["admin/users", "users"]);
    }

    #[test]
    fn test_duplicate_namespace_rejected() {
        let mut registry = NamespaceRegistry::new();
        let hook = |_facade: &dyn Facade| -> Result<(), wayline_core::BoxError> { Ok(()) };

        registry.register("admin", Arc::new(hook)).unwrap();
        let err = registry.register("admin", Arc::new(hook)).unwrap_err();

        assert!(matches!(
            err,
            RegistrationError::Duplicate { kind: EntryKind::Namespace, ref name } if name == "admin"
        ));
    }

    #[test]
    fn test_clear_allows_reregistration() {
        let mut registry = ControllerRegistry::new();
        registry.register_entry(users()).unwrap();
        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.register_entry(users()).is_ok());
    }
}
