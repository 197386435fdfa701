//! Logging hook for dispatch observation.

use wayline_core::{BoxError, Facade, Hook};

/// A hook that logs each run, for use as (or within) the pre-hook.
pub struct LoggingHook {
    label: &'static str,
}

impl LoggingHook {
    /// Create a logging hook that tags its records with `label`.
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new("pre-hook")
    }
}

impl Hook for LoggingHook {
    fn run(&self, facade: &dyn Facade) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        tracing::info!(hook = self.label, data = %facade.data(), "dispatch hook");
        #[cfg(not(feature = "tracing"))]
        let _ = (self.label, facade);
        Ok(())
    }
}
