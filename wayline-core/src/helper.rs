//! # Helpers
//!
//! Helpers are named callables that take a list of [`Value`] arguments and
//! return a [`Value`]. They live either in a controller's bundle or in the
//! app-wide global bundle, and run with their owning bundle as context.

use crate::{error::BoxError, scope::Scope};
use serde_json::Value;
use std::{collections::HashMap, fmt, sync::Arc};

/// A helper callable.
///
/// Closures of the shape `Fn(&Scope<'_>, &[Value]) -> Result<Value, BoxError>`
/// implement this automatically.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a helper",
    label = "missing `Helper` implementation",
    note = "Helpers are `Fn(&Scope<'_>, &[Value]) -> Result<Value, BoxError>` closures or types implementing `Helper`."
)]
pub trait Helper: Send + Sync + 'static {
    /// Run the helper. `scope.helpers()` is the bundle the helper belongs to.
    fn call(&self, scope: &Scope<'_>, args: &[Value]) -> Result<Value, BoxError>;
}

impl<F> Helper for F
where
    F: Fn(&Scope<'_>, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn call(&self, scope: &Scope<'_>, args: &[Value]) -> Result<Value, BoxError> {
        (self)(scope, args)
    }
}

/// A named set of helpers.
#[derive(Clone, Default)]
pub struct HelperBundle {
    map: HashMap<String, Arc<dyn Helper>>,
}

impl HelperBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closure helper under `name`.
    pub fn helper<F>(self, name: impl Into<String>, helper: F) -> Self
    where
        F: Fn(&Scope<'_>, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.handler(name, helper)
    }

    /// Add a type implementing [`Helper`] under `name`.
    pub fn handler<H: Helper>(mut self, name: impl Into<String>, helper: H) -> Self {
        self.insert(name, Arc::new(helper));
        self
    }

    /// Insert an already shared helper. A previous helper of that name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, helper: Arc<dyn Helper>) {
        self.map.insert(name.into(), helper);
    }

    /// Look up a helper by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Helper>> {
        self.map.get(name)
    }

    /// Whether a helper of that name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of helpers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Helper names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for HelperBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
