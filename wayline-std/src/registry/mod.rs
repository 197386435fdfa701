//! Write-once, name-keyed registries.
//!
//! Controllers and namespace hooks are registered exactly once per name;
//! a second registration under the same name is rejected with
//! [`RegistrationError::Duplicate`](wayline_core::RegistrationError).

pub mod controller;
pub mod named;

pub use controller::{ControllerEntry, ControllerRegistry, NamespaceRegistry};
pub use named::{Named, NamedRegistry};
