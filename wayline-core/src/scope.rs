//! Invocation scope handed to actions and helpers.

use crate::{
    error::InvocationError,
    facade::Facade,
    helper::HelperBundle,
};
use serde_json::Value;
use std::ops::Deref;

/// What an action or helper sees while it runs.
///
/// `helpers()` is the bundle of the controller that owns the running code
/// (or the global bundle for global helpers). The scope dereferences to the
/// [`Facade`], so `scope.get("a.b")` or `scope.invoke_action_target("users#index")`
/// work directly.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
    owner: Option<&'a str>,
    helpers: &'a HelperBundle,
    facade: &'a dyn Facade,
}

impl<'a> Scope<'a> {
    /// Create a scope. `owner` is the controller name, `None` for the global bundle.
    pub fn new(owner: Option<&'a str>, helpers: &'a HelperBundle, facade: &'a dyn Facade) -> Self {
        Self {
            owner,
            helpers,
            facade,
        }
    }

    /// Controller that owns the running code.
    pub fn owner(&self) -> Option<&'a str> {
        self.owner
    }

    /// The owning helper bundle.
    pub fn helpers(&self) -> &'a HelperBundle {
        self.helpers
    }

    /// The façade.
    pub fn facade(&self) -> &'a dyn Facade {
        self.facade
    }

    /// Call a helper from the owning bundle, in this same scope.
    pub fn call(&self, helper: &str, args: &[Value]) -> Result<Value, InvocationError> {
        let Some(found) = self.helpers.get(helper) else {
            return Err(InvocationError::UndefinedHelper {
                controller: self.owner.map(str::to_owned),
                helper: helper.to_owned(),
            });
        };
        found
            .call(self, args)
            .map_err(|source| InvocationError::Helper {
                helper: helper.to_owned(),
                source,
            })
    }
}

impl<'a> Deref for Scope<'a> {
    type Target = dyn Facade + 'a;

    fn deref(&self) -> &Self::Target {
        self.facade
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct NullFacade;

    impl Facade for NullFacade {
        fn data(&self) -> Value {
            Value::Null
        }
        fn get(&self, _path: &str) -> Option<Value> {
            None
        }
        fn set(&self, _path: &str, value: Value) -> Value {
            value
        }
        fn invoke_helper(
            &self,
            _controller: Option<&str>,
            helper: &str,
            _args: &[Value],
        ) -> Result<Value, InvocationError> {
            Err(InvocationError::UndefinedHelper {
                controller: None,
                helper: helper.to_owned(),
            })
        }
        fn invoke_action(&self, controller: &str, action: &str) -> Result<(), InvocationError> {
            Err(InvocationError::UnknownController {
                controller: controller.to_owned(),
                action: action.to_owned(),
            })
        }
    }

    #[test]
    fn test_call_reaches_sibling_helper() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let bundle = HelperBundle::new()
            .helper("double", |_scope, args| {
                let n = args.first().and_then(Value::as_i64).unwrap_or(0);
                Ok(Value::from(n * 2))
            })
            .helper("quadruple", move |scope, args| {
                counter.fetch_add(1, Ordering::SeqCst);
                let twice = scope.call("double", args)?;
                Ok(scope.call("double", &[twice])?)
            });

        let scope = Scope::new(Some("math"), &bundle, &NullFacade);
        let out = scope.call("quadruple", &[Value::from(3)]).unwrap();

        assert_eq!(out, Value::from(12));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_helper_names_owner() {
        let bundle = HelperBundle::new();
        let scope = Scope::new(Some("users"), &bundle, &NullFacade);

        let err = scope.call("nope", &[]).unwrap_err();
        assert!(matches!(
            err,
            InvocationError::UndefinedHelper { controller: Some(ref c), ref helper }
                if c == "users" && helper == "nope"
        ));
    }

    #[test]
    fn test_helper_error_is_wrapped() {
        let bundle = HelperBundle::new().helper("fail", |_scope, _args| {
            Err::<Value, BoxError>("boom".into())
        });
        let scope = Scope::new(None, &bundle, &NullFacade);

        let err = scope.call("fail", &[]).unwrap_err();
        assert!(matches!(err, InvocationError::Helper { ref helper, .. } if helper == "fail"));
    }

    #[test]
    fn test_scope_derefs_to_facade() {
        let bundle = HelperBundle::new();
        let scope = Scope::new(None, &bundle, &NullFacade);

        assert_eq!(scope.set("a", Value::from(1)), Value::from(1));
        assert!(scope.get("a").is_none());
        assert!(scope.invoke_action_target("users#index").is_err());
    }
}
