//! # wayline-std
//!
//! Standard implementations for Wayline.
//!
//! This crate provides:
//! - **Data store**: [`DataTree`], the dotted-path global data tree
//! - **Registries**: [`ControllerRegistry`], [`NamespaceRegistry`] over [`NamedRegistry`]
//! - **Standard hooks**: [`LoggingHook`](hooks::LoggingHook), [`HookChain`](hooks::HookChain)
//! - **Testing doubles**: see [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use wayline_core;

// Modules
pub mod hooks;
pub mod registry;
pub mod store;
pub mod testing;

pub use registry::{ControllerEntry, ControllerRegistry, NamedRegistry, NamespaceRegistry};
pub use store::DataTree;
