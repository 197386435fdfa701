//! # Cross-Invocation Façade
//!
//! The one surface through which page code reaches state registered
//! elsewhere: the shared data tree, any controller's helpers, the global
//! helpers, and any controller's actions.
//!
//! Every operation is synchronous and re-entrant: an action may call
//! [`Facade::invoke_action`], whose action calls back into the façade, and
//! so on. Guarding against unbounded cycles is up to the caller.

use crate::{config::ActionTarget, error::InvocationError};
use serde_json::Value;

/// Cross-controller access to data, helpers and actions.
pub trait Facade {
    /// A snapshot of the entire data tree.
    fn data(&self) -> Value;

    /// Read the value at a dotted path, or `None` when any segment is missing.
    fn get(&self, path: &str) -> Option<Value>;

    /// Write `value` at a dotted path, creating missing intermediate
    /// objects. Returns the value written.
    fn set(&self, path: &str, value: Value) -> Value;

    /// Call a helper of `controller`, or a global helper when `controller`
    /// is `None`. The helper runs with its owning bundle as context.
    fn invoke_helper(
        &self,
        controller: Option<&str>,
        helper: &str,
        args: &[Value],
    ) -> Result<Value, InvocationError>;

    /// Call a global helper.
    fn invoke_global_helper(&self, helper: &str, args: &[Value]) -> Result<Value, InvocationError> {
        self.invoke_helper(None, helper, args)
    }

    /// Run `controller`'s `action` directly, without the pre-hook, namespace
    /// hooks or touching the current page config.
    fn invoke_action(&self, controller: &str, action: &str) -> Result<(), InvocationError>;

    /// Run an action addressed as `"controller#action"`.
    fn invoke_action_target(&self, target: &str) -> Result<(), InvocationError> {
        let target = ActionTarget::parse(target);
        self.invoke_action(target.controller, target.action)
    }
}

/// Call a helper with a variadic argument list.
///
/// Each argument is converted with `Value::from`. The first operand is
/// anything that dereferences to a [`Facade`], including a [`Scope`](crate::Scope).
///
/// ```rust,ignore
/// let greeting = call_helper!(scope, Some("users"), "greet", "Ada", 3)?;
/// let answer = call_helper!(scope, None, "answer")?;
/// ```
#[macro_export]
macro_rules! call_helper {
    ($facade:expr, $controller:expr, $helper:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Facade as _;
        ($facade).invoke_helper($controller, $helper, &[$($crate::Value::from($arg)),*])
    }};
}
