//! # Bootstrap
//!
//! [`App`] ties a [`Context`] to the lifecycle triggers that start dispatch.
//! It is built once per page with [`AppBuilder`]:
//!
//! ```rust,ignore
//! let mut lifecycle = ManualLifecycle::new();
//! let app = App::builder()
//!     .global_helpers(helpers! { "answer" => |_scope, _args| Ok(json!(42)) })
//!     .data(json!({ "foo": "bar" }))
//!     .pre_hook(|facade| { /* runs before every dispatch */ Ok(()) })
//!     .triggers(Triggers::DOCUMENT_READY | Triggers::PAGE_CHANGE)
//!     .start(&mut lifecycle)?;
//!
//! app.register_controller("users", actions! { "index" => |_scope| Ok(()) }, HelperBundle::new())?;
//! app.configure_json(r#"{"controller": "users", "action": "index"}"#)?;
//!
//! lifecycle.fire(Trigger::DocumentReady);
//! ```

use crate::context::Context;
use crate::lifecycle::{Lifecycle, Trigger, Triggers};
use std::ops::Deref;
use std::sync::Arc;
use wayline_core::{BoxError, ConfigError, Facade, HelperBundle, Hook, PageConfig, Value};
use wayline_std::DataTree;

/// A bootstrapped dispatcher: a shared [`Context`] plus the triggers it
/// reacts to.
///
/// `App` dereferences to its [`Context`], so registration, dispatch and the
/// façade are all reachable from it. Clones share the same context.
#[derive(Debug, Clone)]
pub struct App {
    ctx: Arc<Context>,
    triggers: Triggers,
}

impl App {
    /// Start building an app.
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    /// The shared context.
    pub fn context(&self) -> &Arc<Context> {
        &self.ctx
    }

    /// The triggers this app reacts to.
    pub fn triggers(&self) -> Triggers {
        self.triggers
    }

    /// Subscribe to every trigger in the set. Each listener dispatches the
    /// current page config unless test mode is on.
    pub fn attach<L: Lifecycle + ?Sized>(&self, lifecycle: &mut L) {
        for trigger in Trigger::ALL {
            if !self.triggers.contains(trigger.flag()) {
                continue;
            }
            let ctx = Arc::clone(&self.ctx);
            lifecycle.listen(trigger, Box::new(move |fired: Trigger| ctx.handle_trigger(fired)));

            #[cfg(feature = "tracing")]
            tracing::debug!(%trigger, "attached to trigger");
        }
    }

    /// Replace the page config from the JSON block embedded by the view
    /// layer, e.g. `{"controller": "users", "action": "index", "namespace": ""}`.
    pub fn configure_json(&self, json: &str) -> Result<(), ConfigError> {
        self.ctx.configure_page(PageConfig::from_json(json)?);
        Ok(())
    }
}

impl Deref for App {
    type Target = Context;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

/// Builder for [`App`].
#[derive(Default)]
pub struct AppBuilder {
    helpers: HelperBundle,
    data: Value,
    pre_hook: Option<Arc<dyn Hook>>,
    triggers: Triggers,
    page: PageConfig,
}

impl AppBuilder {
    /// Helpers reachable from every controller as global helpers.
    pub fn global_helpers(mut self, helpers: HelperBundle) -> Self {
        self.helpers = helpers;
        self
    }

    /// Initial data tree. Must be an object or `null`.
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// A closure run before every dispatch attempt.
    pub fn pre_hook<F>(self, hook: F) -> Self
    where
        F: Fn(&dyn Facade) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.pre_hook_handler(hook)
    }

    /// A type implementing [`Hook`] run before every dispatch attempt.
    pub fn pre_hook_handler<H: Hook>(mut self, hook: H) -> Self {
        self.pre_hook = Some(Arc::new(hook));
        self
    }

    /// The lifecycle triggers to react to. Defaults to
    /// [`Triggers::DOCUMENT_READY`].
    pub fn triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }

    /// Make lifecycle triggers inert.
    pub fn test_mode(mut self, test: bool) -> Self {
        self.page.test = test;
        self
    }

    /// The initial page config.
    pub fn config(mut self, page: impl Into<PageConfig>) -> Self {
        let test = self.page.test;
        self.page = page.into();
        self.page.test |= test;
        self
    }

    /// Build the app without attaching it to a lifecycle.
    pub fn build(self) -> Result<App, ConfigError> {
        let data = DataTree::from_value(self.data)?;
        let ctx = Context::new();
        ctx.bootstrap(self.helpers, data, self.pre_hook);
        ctx.configure_page(self.page);

        #[cfg(feature = "tracing")]
        tracing::debug!(triggers = ?self.triggers, test = ctx.is_test_mode(), "app bootstrapped");

        Ok(App {
            ctx: Arc::new(ctx),
            triggers: self.triggers,
        })
    }

    /// Build the app and attach it to `lifecycle`.
    pub fn start<L: Lifecycle + ?Sized>(self, lifecycle: &mut L) -> Result<App, ConfigError> {
        let app = self.build()?;
        app.attach(lifecycle);
        Ok(app)
    }
}

impl std::fmt::Debug for AppBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppBuilder")
            .field("helpers", &self.helpers)
            .field("data", &self.data)
            .field("pre_hook", &self.pre_hook.is_some())
            .field("triggers", &self.triggers)
            .field("page", &self.page)
            .finish()
    }
}
