//! Distributed controller registration via `inventory`.
//!
//! Controllers can be declared next to their code and gathered in one call:
//!
//! ```rust,ignore
//! fn users() -> (Actions, HelperBundle) {
//!     (actions! { "index" => |_scope| Ok(()) }, HelperBundle::new())
//! }
//! wayline::submit_controller!("users", users);
//!
//! app.register_collected()?;
//! ```

use crate::app::App;
use crate::context::Context;
use wayline_core::{Actions, EntryKind, HelperBundle, RegistrationError};
use wayline_std::ControllerEntry;

/// A controller submitted to the distributed collection.
pub struct ControllerRegistration {
    /// Registry key, namespace included.
    pub name: &'static str,
    /// Builds the controller's actions and helpers.
    pub build: fn() -> (Actions, HelperBundle),
}

impl ControllerRegistration {
    /// Create a registration entry.
    pub const fn new(name: &'static str, build: fn() -> (Actions, HelperBundle)) -> Self {
        Self { name, build }
    }

    fn entry(&self) -> ControllerEntry {
        let (actions, helpers) = (self.build)();
        ControllerEntry::new(self.name, actions, helpers)
    }
}

inventory::collect!(ControllerRegistration);

/// Submit a controller to the distributed collection.
///
/// `$build` is a `fn() -> (Actions, HelperBundle)`.
#[macro_export]
macro_rules! submit_controller {
    ($name:expr, $build:path $(,)?) => {
        $crate::inventory::submit! {
            $crate::ControllerRegistration::new($name, $build)
        }
    };
}

/// Register every submitted controller, sorted by name. Returns how many
/// were registered.
///
/// The batch is all or nothing: a name submitted twice, or already present
/// in the context, fails the call before anything is registered.
pub fn register_collected(ctx: &Context) -> Result<usize, RegistrationError> {
    let mut entries: Vec<&ControllerRegistration> =
        inventory::iter::<ControllerRegistration>.into_iter().collect();
    entries.sort_by_key(|registration| registration.name);
    check_batch(ctx, &entries)?;

    for registration in &entries {
        ctx.register_controller_entry(registration.entry())?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = entries.len(), "collected controllers registered");

    Ok(entries.len())
}

fn check_batch(
    ctx: &Context,
    entries: &[&ControllerRegistration],
) -> Result<(), RegistrationError> {
    let repeated = entries
        .windows(2)
        .find(|pair| pair[0].name == pair[1].name)
        .map(|pair| pair[0].name);
    let taken = entries
        .iter()
        .map(|registration| registration.name)
        .find(|name| ctx.controller(name).is_some());

    match repeated.or(taken) {
        Some(name) => Err(RegistrationError::Duplicate {
            kind: EntryKind::Controller,
            name: name.to_owned(),
        }),
        None => Ok(()),
    }
}

impl App {
    /// Register every controller submitted with
    /// [`submit_controller!`](crate::submit_controller).
    pub fn register_collected(&self) -> Result<usize, RegistrationError> {
        register_collected(self.context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> (Actions, HelperBundle) {
        (Actions::new(), HelperBundle::new())
    }

    const FIRST: ControllerRegistration = ControllerRegistration::new("first", empty);
    const SECOND: ControllerRegistration = ControllerRegistration::new("second", empty);

    #[test]
    fn test_repeated_name_in_batch_registers_nothing() {
        let ctx = Context::new();

        let err = check_batch(&ctx, &[&FIRST, &SECOND, &SECOND]).unwrap_err();

        assert!(matches!(
            err,
            RegistrationError::Duplicate { kind: EntryKind::Controller, ref name } if name == "second"
        ));
        assert!(ctx.controller_names().is_empty());
    }

    #[test]
    fn test_name_already_registered_fails_batch() {
        let ctx = Context::new();
        ctx.register_controller_entry(SECOND.entry()).unwrap();

        assert!(check_batch(&ctx, &[&FIRST, &SECOND]).is_err());
        assert!(check_batch(&ctx, &[&FIRST]).is_ok());
    }
}
