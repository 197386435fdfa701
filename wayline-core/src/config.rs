//! # Page Configuration
//!
//! The routing identifiers the server embeds in the page, and the parsing
//! of action targets written as `"controller#action"`.
//!
//! Empty strings count as absent for every identifier, since the view layer
//! emits `namespace: ''` for controllers outside any namespace.

use crate::{
    element::Element,
    error::{ConfigError, DispatchError},
};
use serde::{Deserialize, Serialize};

/// Attribute carrying the controller name on a dispatching element.
pub const CONTROLLER_ATTRIBUTE: &str = "data-controller";
/// Attribute carrying the action name on a dispatching element.
pub const ACTION_ATTRIBUTE: &str = "data-action";
/// Attribute carrying the namespace on a dispatching element.
pub const NAMESPACE_ATTRIBUTE: &str = "data-namespace";

/// The controller/action/namespace triple the next dispatch should run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Controller name, without namespace.
    #[serde(default)]
    pub controller: Option<String>,
    /// Action name.
    #[serde(default)]
    pub action: Option<String>,
    /// Optional namespace, e.g. `admin`.
    #[serde(default)]
    pub namespace: Option<String>,
}

impl DispatchConfig {
    /// A config for `controller#action` outside any namespace.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: Some(controller.into()),
            action: Some(action.into()),
            namespace: None,
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Derive the config from a nested controller path such as
    /// `admin/reports/users`: the last segment is the controller, everything
    /// before it is the namespace.
    pub fn from_controller_path(path: &str, action: impl Into<String>) -> Self {
        let path = path.trim_matches('/');
        let (namespace, controller) = match path.rsplit_once('/') {
            Some((namespace, controller)) => (Some(namespace.to_owned()), controller),
            None => (None, path),
        };
        Self {
            controller: Some(controller.to_owned()),
            action: Some(action.into()),
            namespace,
        }
    }

    /// Read the three `data-*` attributes of an element, verbatim.
    pub fn from_element(element: &(impl Element + ?Sized)) -> Self {
        Self {
            controller: element.attribute(CONTROLLER_ATTRIBUTE),
            action: element.attribute(ACTION_ATTRIBUTE),
            namespace: element.attribute(NAMESPACE_ATTRIBUTE),
        }
    }

    /// The controller name, if present and non-empty.
    pub fn controller(&self) -> Option<&str> {
        non_empty(&self.controller)
    }

    /// The action name, if present and non-empty.
    pub fn action(&self) -> Option<&str> {
        non_empty(&self.action)
    }

    /// The namespace, if present and non-empty.
    pub fn namespace(&self) -> Option<&str> {
        non_empty(&self.namespace)
    }

    /// Check that both controller and action are present.
    pub fn resolve(&self) -> Result<ResolvedTarget<'_>, DispatchError> {
        let controller = self
            .controller()
            .ok_or(DispatchError::MissingConfiguration { field: "controller" })?;
        let action = self
            .action()
            .ok_or(DispatchError::MissingConfiguration { field: "action" })?;
        Ok(ResolvedTarget {
            controller,
            action,
            namespace: self.namespace(),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A validated dispatch target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget<'a> {
    /// Controller name, without namespace.
    pub controller: &'a str,
    /// Action name.
    pub action: &'a str,
    /// Namespace, if any.
    pub namespace: Option<&'a str>,
}

impl ResolvedTarget<'_> {
    /// The controller registry key: `namespace/controller`, or just the controller.
    pub fn registry_key(&self) -> String {
        match self.namespace {
            Some(namespace) => format!("{namespace}/{}", self.controller),
            None => self.controller.to_owned(),
        }
    }
}

/// The page-level configuration block embedded by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Routing identifiers.
    #[serde(flatten)]
    pub dispatch: DispatchConfig,
    /// Inert mode: lifecycle triggers do not dispatch.
    #[serde(default)]
    pub test: bool,
}

impl PageConfig {
    /// Parse the JSON config object, e.g.
    /// `{"controller": "users", "namespace": "", "action": "index"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<DispatchConfig> for PageConfig {
    fn from(dispatch: DispatchConfig) -> Self {
        Self {
            dispatch,
            test: false,
        }
    }
}

/// An action addressed as `"controller#action"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTarget<'a> {
    /// Controller registry key.
    pub controller: &'a str,
    /// Action name; empty when the target had no `#`.
    pub action: &'a str,
}

impl<'a> ActionTarget<'a> {
    /// Split on the first `#`.
    pub fn parse(target: &'a str) -> Self {
        let (controller, action) = target.split_once('#').unwrap_or((target, ""));
        Self { controller, action }
    }
}
