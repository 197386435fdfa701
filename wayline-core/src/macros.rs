//! Declarative builders for action maps and helper bundles.

/// Build an [`Actions`](crate::Actions) map.
///
/// ```rust,ignore
/// let actions = actions! {
///     "index" => |scope| {
///         scope.call("highlight", &[])?;
///         Ok(())
///     },
///     "new" => |_scope| Ok(()),
/// };
/// ```
#[macro_export]
macro_rules! actions {
    () => {
        $crate::Actions::new()
    };
    ($($name:expr => $action:expr),+ $(,)?) => {
        $crate::Actions::new()$(.action($name, $action))+
    };
}

/// Build a [`HelperBundle`](crate::HelperBundle).
///
/// ```rust,ignore
/// let helpers = helpers! {
///     "answer" => |_scope, _args| Ok(Value::from(42)),
/// };
/// ```
#[macro_export]
macro_rules! helpers {
    () => {
        $crate::HelperBundle::new()
    };
    ($($name:expr => $helper:expr),+ $(,)?) => {
        $crate::HelperBundle::new()$(.helper($name, $helper))+
    };
}
