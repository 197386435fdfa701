//! Sequential composition of hooks.

use std::{fmt, sync::Arc};
use wayline_core::{BoxError, Facade, Hook};

/// Runs several hooks in registration order as one hook.
///
/// The first failing hook stops the chain and its error is returned.
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn Hook>>,
}

impl HookChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a closure hook.
    pub fn then<F>(self, hook: F) -> Self
    where
        F: Fn(&dyn Facade) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.then_hook(hook)
    }

    /// Append a type implementing [`Hook`].
    pub fn then_hook<H: Hook>(mut self, hook: H) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Number of hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Hook for HookChain {
    fn run(&self, facade: &dyn Facade) -> Result<(), BoxError> {
        for hook in &self.hooks {
            hook.run(facade)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HookChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("len", &self.hooks.len())
            .finish()
    }
}
