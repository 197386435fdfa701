//! # Hooks
//!
//! Hooks are argument-less callbacks run by the dispatcher: the global
//! pre-hook before every dispatch attempt, and a namespace hook before any
//! controller of that namespace. They get the [`Facade`] so they can reach
//! shared data and helpers.

use crate::{error::BoxError, facade::Facade};

/// A dispatch hook.
///
/// Closures of the shape `Fn(&dyn Facade) -> Result<(), BoxError>`
/// implement this automatically.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a dispatch hook",
    label = "missing `Hook` implementation",
    note = "Hooks are `Fn(&dyn Facade) -> Result<(), BoxError>` closures or types implementing `Hook`."
)]
pub trait Hook: Send + Sync + 'static {
    /// Run the hook.
    fn run(&self, facade: &dyn Facade) -> Result<(), BoxError>;
}

impl<F> Hook for F
where
    F: Fn(&dyn Facade) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn run(&self, facade: &dyn Facade) -> Result<(), BoxError> {
        (self)(facade)
    }
}
