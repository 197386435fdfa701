//! # Context
//!
//! The single owner of all dispatch state for one page lifetime: the
//! controller and namespace registries, the data tree, the global helpers,
//! the pre-hook and the current page config.
//!
//! Locks are only held while reading or writing that state. Registries hand
//! out `Arc` clones, so no lock is held while an action, helper or hook runs
//! and re-entrant calls from inside them cannot deadlock.

use crate::dispatcher::{Dispatcher, Outcome};
use crate::lifecycle::Trigger;
use parking_lot::RwLock;
use std::sync::Arc;
use wayline_core::{
    Actions, BoxError, DispatchConfig, DispatchError, Element, Facade, HelperBundle, Hook,
    PageConfig, RegistrationError,
};
use wayline_std::{ControllerEntry, ControllerRegistry, DataTree, NamespaceRegistry};

/// Owner of registries, data and page config.
#[derive(Default)]
pub struct Context {
    controllers: RwLock<ControllerRegistry>,
    namespaces: RwLock<NamespaceRegistry>,
    data: RwLock<DataTree>,
    globals: RwLock<Arc<HelperBundle>>,
    pre_hook: RwLock<Option<Arc<dyn Hook>>>,
    page: RwLock<PageConfig>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the global helpers, the initial data and the pre-hook.
    pub fn bootstrap(
        &self,
        helpers: HelperBundle,
        data: DataTree,
        pre_hook: Option<Arc<dyn Hook>>,
    ) {
        *self.globals.write() = Arc::new(helpers);
        *self.data.write() = data;
        *self.pre_hook.write() = pre_hook;
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register a controller. `name` may carry a namespace, e.g. `admin/users`.
    pub fn register_controller(
        &self,
        name: impl Into<String>,
        actions: Actions,
        helpers: HelperBundle,
    ) -> Result<(), RegistrationError> {
        self.register_controller_entry(ControllerEntry::new(name, actions, helpers))
    }

    /// Register a prepared controller entry.
    pub fn register_controller_entry(
        &self,
        entry: ControllerEntry,
    ) -> Result<(), RegistrationError> {
        self.controllers.write().register_entry(entry)
    }

    /// Register a namespace hook closure.
    pub fn register_namespace<F>(
        &self,
        name: impl Into<String>,
        hook: F,
    ) -> Result<(), RegistrationError>
    where
        F: Fn(&dyn Facade) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.register_namespace_hook(name, hook)
    }

    /// Register a type implementing [`Hook`] as a namespace hook.
    pub fn register_namespace_hook<H: Hook>(
        &self,
        name: impl Into<String>,
        hook: H,
    ) -> Result<(), RegistrationError> {
        self.namespaces.write().register(name, Arc::new(hook))
    }

    /// Look up a controller by registry key.
    pub fn controller(&self, name: &str) -> Option<Arc<ControllerEntry>> {
        self.controllers.read().lookup(name)
    }

    /// Look up a namespace hook.
    pub fn namespace_hook(&self, name: &str) -> Option<Arc<dyn Hook>> {
        self.namespaces.read().lookup(name)
    }

    /// Registered controller names, sorted.
    pub fn controller_names(&self) -> Vec<String> {
        self.controllers
            .read()
            .names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    // ------------------------------------------------------------------
    // Globals
    // ------------------------------------------------------------------

    /// The global helper bundle.
    pub fn global_helpers(&self) -> Arc<HelperBundle> {
        Arc::clone(&self.globals.read())
    }

    /// Replace the global helper bundle.
    pub fn set_global_helpers(&self, helpers: HelperBundle) {
        *self.globals.write() = Arc::new(helpers);
    }

    /// The pre-hook, if any.
    pub fn pre_hook(&self) -> Option<Arc<dyn Hook>> {
        self.pre_hook.read().clone()
    }

    /// Replace the pre-hook.
    pub fn set_pre_hook(&self, hook: Option<Arc<dyn Hook>>) {
        *self.pre_hook.write() = hook;
    }

    /// Replace the whole data tree.
    pub fn replace_data(&self, data: DataTree) {
        *self.data.write() = data;
    }

    pub(crate) fn data_tree(&self) -> &RwLock<DataTree> {
        &self.data
    }

    // ------------------------------------------------------------------
    // Page config
    // ------------------------------------------------------------------

    /// Replace the routing identifiers. The test flag is left as it is.
    pub fn configure(&self, config: DispatchConfig) {
        self.page.write().dispatch = config;
    }

    /// Replace the whole page config, test flag included.
    pub fn configure_page(&self, page: PageConfig) {
        *self.page.write() = page;
    }

    /// The current routing identifiers.
    pub fn dispatch_config(&self) -> DispatchConfig {
        self.page.read().dispatch.clone()
    }

    /// Edit the routing identifiers. `edit` runs on a copy with no lock
    /// held, so it may read the context.
    ///
    /// ```rust,ignore
    /// ctx.edit_config(|config| config.action = Some("new".into()));
    /// ```
    pub fn edit_config(&self, edit: impl FnOnce(&mut DispatchConfig)) {
        let mut config = self.dispatch_config();
        edit(&mut config);
        self.configure(config);
    }

    /// Whether lifecycle triggers are inert.
    pub fn is_test_mode(&self) -> bool {
        self.page.read().test
    }

    /// Turn inert mode on or off.
    pub fn set_test_mode(&self, test: bool) {
        self.page.write().test = test;
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// A dispatcher over this context.
    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(self)
    }

    /// Dispatch the current page config.
    pub fn execute_current(&self) -> Result<Outcome, DispatchError> {
        self.dispatcher().execute_current()
    }

    /// Take the target from an element's `data-*` attributes, then dispatch.
    pub fn execute_from_element(
        &self,
        element: &(impl Element + ?Sized),
    ) -> Result<Outcome, DispatchError> {
        self.dispatcher().execute_from_element(element)
    }

    /// Run only the pre-hook.
    pub fn run_pre_hook_only(&self) -> Result<Outcome, DispatchError> {
        self.dispatcher().run_pre_hook_only()
    }

    /// React to a lifecycle trigger: dispatch the current page config,
    /// unless inert mode is on, in which case nothing runs.
    pub fn handle_trigger(&self, trigger: Trigger) -> Result<Option<Outcome>, DispatchError> {
        if self.is_test_mode() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?trigger, "test mode, trigger ignored");
            #[cfg(not(feature = "tracing"))]
            let _ = trigger;
            return Ok(None);
        }
        self.execute_current().map(Some)
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Empty the registries, the data tree, the global helpers and the
    /// pre-hook. The page config and test flag are kept.
    pub fn clear(&self) {
        self.controllers.write().clear();
        self.namespaces.write().clear();
        self.data.write().clear();
        *self.globals.write() = Arc::new(HelperBundle::new());
        *self.pre_hook.write() = None;
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("controllers", &*self.controllers.read())
            .field("namespaces", &*self.namespaces.read())
            .field("page", &*self.page.read())
            .finish_non_exhaustive()
    }
}
