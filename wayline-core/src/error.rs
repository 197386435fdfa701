//! Error types for Wayline.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`WaylineError`] - Top-level error type for all Wayline operations
//! - [`RegistrationError`] - Duplicate controller or namespace names
//! - [`DispatchError`] - Errors while dispatching the current page
//! - [`InvocationError`] - Errors from cross-controller helper/action calls
//! - [`ConfigError`] - Malformed page configuration or initial data

use std::fmt;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// Actions, helpers and hooks return this so that `?` works on any error
/// inside their bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Wayline operations.
#[derive(Error, Debug)]
pub enum WaylineError {
    /// A name was registered twice.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Dispatching the current page failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A cross-controller call could not be resolved or failed.
    #[error("invocation error: {0}")]
    Invocation(#[from] InvocationError),

    /// Page configuration or initial data was rejected.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

impl From<BoxError> for WaylineError {
    fn from(err: BoxError) -> Self {
        WaylineError::Custom(err)
    }
}

/// The kind of registry an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// The controller registry.
    Controller,
    /// The namespace hook registry.
    Namespace,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Controller => f.write_str("Controller"),
            EntryKind::Namespace => f.write_str("Namespace"),
        }
    }
}

/// Errors raised by registration calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The name is already taken in that registry.
    #[error("{kind} '{name}' is already defined!{}", hint(.kind))]
    Duplicate {
        /// Which registry rejected the name.
        kind: EntryKind,
        /// The rejected name.
        name: String,
    },
}

fn hint(kind: &EntryKind) -> &'static str {
    match kind {
        EntryKind::Controller => " Please use a namespace",
        EntryKind::Namespace => "",
    }
}

/// Errors that can occur while dispatching the current page.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The page config lacks a controller or action identifier.
    #[error(
        "No {field} given. It seems like the page config was not embedded in the layout's header."
    )]
    MissingConfiguration {
        /// `"controller"` or `"action"`.
        field: &'static str,
    },

    /// The global pre-hook failed.
    #[error("pre-hook failed")]
    PreHook(#[source] BoxError),

    /// A namespace hook failed.
    #[error("namespace hook '{namespace}' failed")]
    NamespaceHook {
        /// Namespace whose hook failed.
        namespace: String,
        /// The hook's error.
        #[source]
        source: BoxError,
    },

    /// The dispatched action failed.
    #[error("action '{controller}#{action}' failed")]
    Action {
        /// Registry key of the controller (namespace included).
        controller: String,
        /// Action name.
        action: String,
        /// The action's error.
        #[source]
        source: BoxError,
    },
}

/// Errors raised by cross-controller helper and action invocation.
#[derive(Error, Debug)]
pub enum InvocationError {
    /// No callable helper under that name.
    #[error("{}", undefined_helper(.controller, .helper))]
    UndefinedHelper {
        /// Controller the helper was looked up on; `None` for global helpers.
        controller: Option<String>,
        /// Helper name.
        helper: String,
    },

    /// The target controller is not registered.
    #[error(
        "Attempting to call action '{controller}#{action}', but Controller '{controller}' is not defined!"
    )]
    UnknownController {
        /// Controller name.
        controller: String,
        /// Action name.
        action: String,
    },

    /// The target controller has no such action.
    #[error(
        "Attempting to call action '{controller}#{action}', but Action '{action}' is not defined!"
    )]
    UnknownAction {
        /// Controller name.
        controller: String,
        /// Action name.
        action: String,
    },

    /// The helper ran and returned an error.
    #[error("helper '{helper}' failed")]
    Helper {
        /// Helper name.
        helper: String,
        /// The helper's error.
        #[source]
        source: BoxError,
    },

    /// The action ran and returned an error.
    #[error("action '{controller}#{action}' failed")]
    Action {
        /// Controller name.
        controller: String,
        /// Action name.
        action: String,
        /// The action's error.
        #[source]
        source: BoxError,
    },
}

fn undefined_helper(controller: &Option<String>, helper: &str) -> String {
    match controller {
        Some(controller) => {
            format!("Helper '{helper}' not defined for controller '{controller}'")
        }
        None => format!("Global helper '{helper}' not defined"),
    }
}

/// Errors in page configuration or bootstrap data.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Initial data must be a JSON object (or null for an empty tree).
    #[error("initial data must be an object, found {found}")]
    InitialData {
        /// JSON type name of the rejected value.
        found: &'static str,
    },

    /// The embedded page config is not valid JSON for a page config.
    #[error("malformed page config")]
    Parse(#[from] serde_json::Error),
}
