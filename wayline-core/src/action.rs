//! # Actions
//!
//! An action is the piece of page logic a controller runs for one route,
//! e.g. `users#index`. It receives a [`Scope`] carrying its controller's
//! helper bundle and access to the [`Facade`](crate::Facade).

use crate::{error::BoxError, scope::Scope};
use std::{collections::HashMap, fmt, sync::Arc};

/// A controller action.
///
/// Closures of the shape `Fn(&Scope<'_>) -> Result<(), BoxError>` implement
/// this automatically.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a controller action",
    label = "missing `Action` implementation",
    note = "Actions are `Fn(&Scope<'_>) -> Result<(), BoxError>` closures or types implementing `Action`."
)]
pub trait Action: Send + Sync + 'static {
    /// Run the action.
    fn call(&self, scope: &Scope<'_>) -> Result<(), BoxError>;
}

impl<F> Action for F
where
    F: Fn(&Scope<'_>) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn call(&self, scope: &Scope<'_>) -> Result<(), BoxError> {
        (self)(scope)
    }
}

/// The action map of one controller.
#[derive(Clone, Default)]
pub struct Actions {
    map: HashMap<String, Arc<dyn Action>>,
}

impl Actions {
    /// Create an empty action map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closure action under `name`.
    pub fn action<F>(self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&Scope<'_>) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.handler(name, action)
    }

    /// Add a type implementing [`Action`] under `name`.
    pub fn handler<A: Action>(mut self, name: impl Into<String>, action: A) -> Self {
        self.insert(name, Arc::new(action));
        self
    }

    /// Insert an already shared action. A previous action of that name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, action: Arc<dyn Action>) {
        self.map.insert(name.into(), action);
    }

    /// Look up an action by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Action>> {
        self.map.get(name)
    }

    /// Whether an action of that name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Action names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl Action for Noop {
        fn call(&self, _scope: &Scope<'_>) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn test_builder_collects_actions() {
        let actions = Actions::new()
            .action("index", |_scope| Ok(()))
            .handler("show", Noop);

        assert_eq!(actions.len(), 2);
        assert!(actions.contains("index"));
        assert!(actions.get("show").is_some());
        assert!(actions.get("destroy").is_none());
        assert_eq!(actions.names(), vec!["index", "show"]);
        assert_eq!(format!("{actions:?}"), r#"{"index", "show"}"#);
    }
}
