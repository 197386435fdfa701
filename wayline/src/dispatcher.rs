//! # Dispatcher
//!
//! Resolves the target of the current page and runs exactly one controller
//! action for it, in a fixed order:
//!
//! 1. **Resolve** the target: the current page config, or an element's
//!    `data-*` attributes (which overwrite the page config). The
//!    pre-hook-only form skips straight to step 3 and stops after it.
//! 2. **Validate**: controller and action must both be present.
//! 3. **Pre-hook**: runs on every attempt, if one was bootstrapped.
//! 4. **Namespace hook**: with a namespace, the registry key becomes
//!    `namespace/controller` and the namespace's hook runs once.
//! 5. **Action**: look up the controller and action and run it with the
//!    controller's helper bundle. A missing controller or action is not an
//!    error; the page simply has no client logic.

use crate::context::Context;
use wayline_core::{DispatchConfig, DispatchError, Element, Scope};

/// What a dispatch attempt ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action ran.
    Invoked {
        /// Registry key of the controller, namespace included.
        controller: String,
        /// Action name.
        action: String,
    },
    /// No registered controller or action matched; nothing ran after the hooks.
    NoMatch {
        /// Registry key that was looked up.
        controller: String,
        /// Action name that was looked up.
        action: String,
    },
    /// Only the pre-hook ran.
    PreHookOnly,
}

impl Outcome {
    /// Whether an action ran.
    pub fn is_invoked(&self) -> bool {
        matches!(self, Outcome::Invoked { .. })
    }
}

/// How the dispatch target is chosen.
enum Resolve {
    Current,
    Overwrite(DispatchConfig),
    PreHookOnly,
}

/// Runs dispatches against a [`Context`].
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    ctx: &'a Context,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher.
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Dispatch the current page config.
    pub fn execute_current(&self) -> Result<Outcome, DispatchError> {
        self.execute(Resolve::Current)
    }

    /// Overwrite the page config with the element's `data-controller`,
    /// `data-action` and `data-namespace`, then dispatch it.
    pub fn execute_from_element(
        &self,
        element: &(impl Element + ?Sized),
    ) -> Result<Outcome, DispatchError> {
        self.execute(Resolve::Overwrite(DispatchConfig::from_element(element)))
    }

    /// Run the pre-hook and nothing else.
    pub fn run_pre_hook_only(&self) -> Result<Outcome, DispatchError> {
        self.execute(Resolve::PreHookOnly)
    }

    fn execute(&self, resolve: Resolve) -> Result<Outcome, DispatchError> {
        let config = match resolve {
            Resolve::Current => self.ctx.dispatch_config(),
            Resolve::Overwrite(config) => {
                self.ctx.configure(config.clone());
                config
            }
            Resolve::PreHookOnly => {
                self.run_pre_hook()?;
                return Ok(Outcome::PreHookOnly);
            }
        };

        let target = config.resolve()?;
        let key = target.registry_key();

        #[cfg(feature = "tracing")]
        tracing::debug!(controller = %key, action = target.action, "dispatching");

        self.run_pre_hook()?;

        if let Some(namespace) = target.namespace {
            if let Some(hook) = self.ctx.namespace_hook(namespace) {
                hook.run(self.ctx)
                    .map_err(|source| DispatchError::NamespaceHook {
                        namespace: namespace.to_owned(),
                        source,
                    })?;
            }
        }

        let found = self
            .ctx
            .controller(&key)
            .and_then(|entry| entry.action(target.action).map(|action| (entry, action)));
        let Some((entry, action)) = found else {
            #[cfg(feature = "tracing")]
            tracing::trace!(controller = %key, action = target.action, "no matching action");
            return Ok(Outcome::NoMatch {
                controller: key,
                action: target.action.to_owned(),
            });
        };

        let scope = Scope::new(Some(entry.name()), entry.helpers(), self.ctx);
        action
            .call(&scope)
            .map_err(|source| DispatchError::Action {
                controller: key.clone(),
                action: target.action.to_owned(),
                source,
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(controller = %key, action = target.action, "action invoked");

        Ok(Outcome::Invoked {
            controller: key,
            action: target.action.to_owned(),
        })
    }

    fn run_pre_hook(&self) -> Result<(), DispatchError> {
        match self.ctx.pre_hook() {
            Some(hook) => hook.run(self.ctx).map_err(DispatchError::PreHook),
            None => Ok(()),
        }
    }
}
