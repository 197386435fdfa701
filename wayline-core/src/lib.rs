//! # wayline-core
//!
//! Core traits and types for Wayline, a convention-based dispatcher that
//! runs the page logic registered for the controller and action a
//! server-rendered page declares.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that only defines controllers, helpers and hooks.
//!
//! # Callables
//!
//! - [`Action`] - a controller action, run with a [`Scope`]
//! - [`Helper`] - a named callable over [`Value`] arguments
//! - [`Hook`] - the global pre-hook or a namespace hook
//!
//! # Configuration
//!
//! - [`DispatchConfig`] - controller/action/namespace of the current page
//! - [`PageConfig`] - the embedded config block, including the test flag
//! - [`Element`] - attribute source for element-driven dispatch
//!
//! # Error Types
//!
//! - [`WaylineError`] - Top-level error type
//! - [`RegistrationError`], [`DispatchError`], [`InvocationError`], [`ConfigError`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod config;
mod element;
mod error;
mod facade;
mod helper;
mod hook;
mod macros;
mod scope;

// Re-exports
pub use action::{Action, Actions};
pub use config::{
    ACTION_ATTRIBUTE, ActionTarget, CONTROLLER_ATTRIBUTE, DispatchConfig, NAMESPACE_ATTRIBUTE,
    PageConfig, ResolvedTarget,
};
pub use element::Element;
pub use error::{
    BoxError, ConfigError, DispatchError, EntryKind, InvocationError, RegistrationError,
    WaylineError,
};
pub use facade::Facade;
pub use helper::{Helper, HelperBundle};
pub use hook::Hook;
pub use scope::Scope;
pub use serde_json::{self, Value};
