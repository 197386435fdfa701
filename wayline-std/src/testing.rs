//! Testing utilities for Wayline.
//!
//! This module provides doubles that make it easy to check which actions,
//! helpers and hooks ran, and in what order.
//!
//! # Features
//!
//! - [`CallRecorder`]: A shared, ordered log of labels with action/hook/helper factories
//! - [`CountingAction`]: An action that counts invocations
//! - [`CountingHook`]: A hook that counts invocations
//! - [`SpyHelper`]: A helper that records its arguments and returns a programmed value
//! - [`MockElement`]: An attribute map standing in for a DOM element
//! - [`NullFacade`]: A façade with no data and no callables

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use wayline_core::{
    ACTION_ATTRIBUTE, Action, BoxError, CONTROLLER_ATTRIBUTE, Element, Facade, Helper, Hook,
    InvocationError, NAMESPACE_ATTRIBUTE, Scope, Value,
};

// ============================================================================
// Call Recorder
// ============================================================================

/// A shared, ordered log of call labels.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = CallRecorder::new();
/// let actions = Actions::new().action("index", recorder.action("users#index"));
///
/// // dispatch...
///
/// assert_eq!(recorder.calls(), vec!["users#index"]);
/// ```
#[derive(Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label.
    pub fn record(&self, label: impl Into<String>) {
        self.calls.lock().unwrap().push(label.into());
    }

    /// All labels, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `label` was recorded.
    pub fn count(&self, label: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == label).count()
    }

    /// Forget all labels.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// An action that records `label`.
    pub fn action(
        &self,
        label: &str,
    ) -> impl Fn(&Scope<'_>) -> Result<(), BoxError> + Send + Sync + 'static {
        let recorder = self.clone();
        let label = label.to_owned();
        move |_scope| {
            recorder.record(label.as_str());
            Ok(())
        }
    }

    /// A hook that records `label`.
    pub fn hook(
        &self,
        label: &str,
    ) -> impl Fn(&dyn Facade) -> Result<(), BoxError> + Send + Sync + 'static {
        let recorder = self.clone();
        let label = label.to_owned();
        move |_facade| {
            recorder.record(label.as_str());
            Ok(())
        }
    }

    /// A helper that records `label` and returns `output`.
    pub fn helper(
        &self,
        label: &str,
        output: Value,
    ) -> impl Fn(&Scope<'_>, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static {
        let recorder = self.clone();
        let label = label.to_owned();
        move |_scope, _args| {
            recorder.record(label.as_str());
            Ok(output.clone())
        }
    }
}

// ============================================================================
// Counting Action / Hook
// ============================================================================

/// An action that counts invocations.
#[derive(Clone, Default)]
pub struct CountingAction {
    count: Arc<AtomicUsize>,
}

impl CountingAction {
    /// Create a new counting action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Action for CountingAction {
    fn call(&self, _scope: &Scope<'_>) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A hook that counts invocations.
#[derive(Clone, Default)]
pub struct CountingHook {
    count: Arc<AtomicUsize>,
}

impl CountingHook {
    /// Create a new counting hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Hook for CountingHook {
    fn run(&self, _facade: &dyn Facade) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Spy Helper
// ============================================================================

/// A helper that records every argument list and returns a programmed value.
///
/// It also records the owner of the scope it ran in, so tests can check
/// which bundle served as its context.
#[derive(Clone)]
pub struct SpyHelper {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
    owners: Arc<Mutex<Vec<Option<String>>>>,
    output: Arc<Mutex<Value>>,
}

impl SpyHelper {
    /// Create a spy returning `null`.
    pub fn new() -> Self {
        Self::returning(Value::Null)
    }

    /// Create a spy returning `output`.
    pub fn returning(output: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            owners: Arc::new(Mutex::new(Vec::new())),
            output: Arc::new(Mutex::new(output)),
        }
    }

    /// Change the returned value.
    pub fn set_output(&self, output: Value) {
        *self.output.lock().unwrap() = output;
    }

    /// Recorded argument lists.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().unwrap().clone()
    }

    /// Scope owners seen, one per call.
    pub fn owners(&self) -> Vec<Option<String>> {
        self.owners.lock().unwrap().clone()
    }

    /// Number of calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for SpyHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for SpyHelper {
    fn call(&self, scope: &Scope<'_>, args: &[Value]) -> Result<Value, BoxError> {
        self.calls.lock().unwrap().push(args.to_vec());
        self.owners
            .lock()
            .unwrap()
            .push(scope.owner().map(str::to_owned));
        Ok(self.output.lock().unwrap().clone())
    }
}

// ============================================================================
// Mock Element
// ============================================================================

/// An attribute map standing in for a DOM element.
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    attributes: HashMap<String, String>,
}

impl MockElement {
    /// An element with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A link pointing at `controller#action`.
    pub fn link(controller: &str, action: &str) -> Self {
        Self::new()
            .with(CONTROLLER_ATTRIBUTE, controller)
            .with(ACTION_ATTRIBUTE, action)
    }

    /// Set the `data-namespace` attribute.
    pub fn namespace(self, namespace: &str) -> Self {
        self.with(NAMESPACE_ATTRIBUTE, namespace)
    }

    /// Set any attribute.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl Element for MockElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

// ============================================================================
// Null Facade
// ============================================================================

/// A façade with an always-empty data tree and nothing to invoke.
///
/// Useful for running hooks and helpers in isolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFacade;

impl Facade for NullFacade {
    fn data(&self) -> Value {
        Value::Object(Default::default())
    }

    fn get(&self, _path: &str) -> Option<Value> {
        None
    }

    fn set(&self, _path: &str, value: Value) -> Value {
        value
    }

    fn invoke_helper(
        &self,
        controller: Option<&str>,
        helper: &str,
        _args: &[Value],
    ) -> Result<Value, InvocationError> {
        Err(InvocationError::UndefinedHelper {
            controller: controller.map(str::to_owned),
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
