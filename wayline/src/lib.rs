//! # wayline - Convention-Based Page Dispatch
//!
//! A server-rendered page declares which controller and action produced it
//! (and, optionally, a namespace). `wayline` finds the client-side logic
//! registered under that name and runs it, the way a server-side MVC router
//! maps a request to a handler.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wayline::prelude::*;
//!
//! let mut lifecycle = ManualLifecycle::new();
//! let app = App::builder()
//!     .data(json!({ "greeting": "hello" }))
//!     .start(&mut lifecycle)?;
//!
//! app.register_controller(
//!     "users",
//!     actions! {
//!         "index" => |scope| {
//!             scope.call("highlight", &[])?;
//!             Ok(())
//!         },
//!     },
//!     helpers! {
//!         "highlight" => |scope, _args| Ok(scope.get("greeting").unwrap_or_default()),
//!     },
//! )?;
//!
//! app.configure(DispatchConfig::new("users", "index"));
//! lifecycle.fire(Trigger::DocumentReady);
//! ```
//!
//! ## Dispatch Order
//!
//! Pre-hook, then the namespace hook (when the page has a namespace), then
//! the action. See [`dispatcher`] for the details.
//!
//! ## Features
//!
//! - `tracing`: structured logs for registration, dispatch and triggers
//! - `inventory`: declare controllers next to their code with
//!   [`submit_controller!`] and gather them with `App::register_collected`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod app;
#[cfg(feature = "inventory")]
mod collect;
mod context;
pub mod dispatcher;
mod facade;
pub mod lifecycle;

pub use app::{App, AppBuilder};
pub use context::Context;
pub use dispatcher::{Dispatcher, Outcome};
pub use lifecycle::{Lifecycle, Listener, ManualLifecycle, Trigger, TriggerResult, Triggers};

pub use wayline_core::{
    ACTION_ATTRIBUTE,
    // Callables
    Action,
    ActionTarget,
    Actions,
    // Errors
    BoxError,
    CONTROLLER_ATTRIBUTE,
    ConfigError,
    DispatchConfig,
    DispatchError,
    Element,
    EntryKind,
    Facade,
    Helper,
    HelperBundle,
    Hook,
    InvocationError,
    NAMESPACE_ATTRIBUTE,
    PageConfig,
    RegistrationError,
    ResolvedTarget,
    Scope,
    Value,
    WaylineError,
    actions,
    call_helper,
    helpers,
    serde_json,
};

pub use wayline_std::{ControllerEntry, ControllerRegistry, DataTree, NamedRegistry, NamespaceRegistry};

#[cfg(feature = "inventory")]
pub use collect::{ControllerRegistration, register_collected};

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use wayline_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use wayline_std::testing::*;
}

/// Prelude module - common imports for Wayline.
///
/// # Usage
///
/// ```rust,ignore
/// use wayline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Setup
        App,
        // Callables
        Actions,
        BoxError,
        Context,
        DispatchConfig,
        // Errors
        DispatchError,
        Facade,
        HelperBundle,
        InvocationError,
        Lifecycle,
        ManualLifecycle,
        Outcome,
        RegistrationError,
        Scope,
        Trigger,
        Triggers,
        Value,
        actions,
        call_helper,
        helpers,
    };
    pub use wayline_core::serde_json::json;
}

#[cfg(feature = "inventory")]
pub use inventory;
