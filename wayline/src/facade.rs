//! [`Facade`] implementation over the [`Context`].

use crate::context::Context;
use wayline_core::{Facade, InvocationError, Scope, Value};

impl Facade for Context {
    fn data(&self) -> Value {
        self.data_tree().read().to_value()
    }

    fn get(&self, path: &str) -> Option<Value> {
        self.data_tree().read().get(path).cloned()
    }

    fn set(&self, path: &str, value: Value) -> Value {
        self.data_tree().write().set(path, value).clone()
    }

    fn invoke_helper(
        &self,
        controller: Option<&str>,
        helper: &str,
        args: &[Value],
    ) -> Result<Value, InvocationError> {
        match controller.filter(|name| !name.is_empty()) {
            Some(name) => {
                let entry = self
                    .controller(name)
                    .ok_or_else(|| InvocationError::UndefinedHelper {
                        controller: Some(name.to_owned()),
                        helper: helper.to_owned(),
                    })?;
                Scope::new(Some(entry.name()), entry.helpers(), self).call(helper, args)
            }
            None => {
                let globals = self.global_helpers();
                Scope::new(None, &globals, self).call(helper, args)
            }
        }
    }

    fn invoke_action(&self, controller: &str, action: &str) -> Result<(), InvocationError> {
        let entry = self
            .controller(controller)
            .ok_or_else(|| InvocationError::UnknownController {
                controller: controller.to_owned(),
                action: action.to_owned(),
            })?;
        let found = entry
            .action(action)
            .ok_or_else(|| InvocationError::UnknownAction {
                controller: controller.to_owned(),
                action: action.to_owned(),
            })?;

        let scope = Scope::new(Some(entry.name()), entry.helpers(), self);
        found
            .call(&scope)
            .map_err(|source| InvocationError::Action {
                controller: controller.to_owned(),
                action: action.to_owned(),
                source,
            })
    }
}
