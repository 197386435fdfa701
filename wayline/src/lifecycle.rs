//! # Lifecycle Triggers
//!
//! Dispatch is started by host lifecycle signals rather than called by page
//! code. Two signals are understood:
//!
//! - [`Trigger::DocumentReady`]: the document finished loading.
//! - [`Trigger::PageChange`]: a client-side navigation replaced the page
//!   without a full load.
//!
//! A [`Lifecycle`] is whatever delivers those signals. The crate ships
//! [`ManualLifecycle`], which fires them on request; embedders wire their
//! own host events through the same trait.

use crate::dispatcher::Outcome;
use bitflags::bitflags;
use std::fmt;
use wayline_core::DispatchError;

bitflags! {
    /// The set of lifecycle signals an app reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        /// Initial document load.
        const DOCUMENT_READY = 1;
        /// Client-side page replacement.
        const PAGE_CHANGE = 1 << 1;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Triggers::DOCUMENT_READY
    }
}

/// A single lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Initial document load.
    DocumentReady,
    /// Client-side page replacement.
    PageChange,
}

impl Trigger {
    /// Every trigger, in firing order.
    pub const ALL: [Trigger; 2] = [Trigger::DocumentReady, Trigger::PageChange];

    /// The flag for this trigger.
    pub fn flag(self) -> Triggers {
        match self {
            Trigger::DocumentReady => Triggers::DOCUMENT_READY,
            Trigger::PageChange => Triggers::PAGE_CHANGE,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::DocumentReady => f.write_str("document-ready"),
            Trigger::PageChange => f.write_str("page-change"),
        }
    }
}

/// Result of one listener reacting to a trigger. `Ok(None)` means the
/// listener stayed inert.
pub type TriggerResult = Result<Option<Outcome>, DispatchError>;

/// A callback attached to a trigger.
pub type Listener = Box<dyn Fn(Trigger) -> TriggerResult + Send + Sync>;

/// A source of lifecycle signals.
pub trait Lifecycle {
    /// Call `listener` every time `trigger` fires.
    fn listen(&mut self, trigger: Trigger, listener: Listener);
}

/// A lifecycle whose triggers are fired by hand.
///
/// # Example
///
/// ```rust,ignore
/// let mut lifecycle = ManualLifecycle::new();
/// let app = App::builder().start(&mut lifecycle)?;
///
/// let results = lifecycle.fire(Trigger::DocumentReady);
/// ```
#[derive(Default)]
pub struct ManualLifecycle {
    listeners: Vec<(Trigger, Listener)>,
}

impl ManualLifecycle {
    /// Create a lifecycle with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `trigger`, returning one result per listener in attach order.
    pub fn fire(&self, trigger: Trigger) -> Vec<TriggerResult> {
        self.listeners
            .iter()
            .filter(|(on, _)| *on == trigger)
            .map(|(_, listener)| listener(trigger))
            .collect()
    }

    /// Number of listeners attached to `trigger`.
    pub fn listener_count(&self, trigger: Trigger) -> usize {
        self.listeners.iter().filter(|(on, _)| *on == trigger).count()
    }
}

impl Lifecycle for ManualLifecycle {
    fn listen(&mut self, trigger: Trigger, listener: Listener) {
        self.listeners.push((trigger, listener));
    }
}

impl fmt::Debug for ManualLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.listeners.iter().map(|(trigger, _)| trigger))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_default_triggers() {
        let triggers = Triggers::default();

        assert!(triggers.contains(Trigger::DocumentReady.flag()));
        assert!(!triggers.contains(Trigger::PageChange.flag()));
        assert!(Triggers::all().contains(Trigger::PageChange.flag()));
    }

    #[test]
    fn test_fire_reaches_only_matching_listeners() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut lifecycle = ManualLifecycle::new();
        let counter = Arc::clone(&fired);
        lifecycle.listen(
            Trigger::PageChange,
            Box::new(move |_trigger: Trigger| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(None)
            }),
        );

        assert!(lifecycle.fire(Trigger::DocumentReady).is_empty());
        assert_eq!(lifecycle.fire(Trigger::PageChange).len(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(lifecycle.listener_count(Trigger::PageChange), 1);
        assert_eq!(lifecycle.listener_count(Trigger::DocumentReady), 0);
    }
}
