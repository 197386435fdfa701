//! Generic write-once registry keyed by name.

use std::{collections::HashMap, fmt, sync::Arc};
use wayline_core::{EntryKind, RegistrationError};

/// Types that can be stored in a [`NamedRegistry`].
pub trait Named: Send + Sync + 'static {
    /// Which registry the type lives in; used in duplicate errors.
    const KIND: EntryKind;
}

/// A registry mapping names to shared entries.
///
/// Lookups hand out `Arc` clones so callers can release any surrounding
/// lock before running the entry.
pub struct NamedRegistry<V: ?Sized> {
    entries: HashMap<String, Arc<V>>,
}

impl<V: ?Sized> Default for NamedRegistry<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Named + ?Sized> NamedRegistry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entry` under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        entry: Arc<V>,
    ) -> Result<(), RegistrationError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistrationError::Duplicate {
                kind: V::KIND,
                name,
            });
        }

        #[cfg(feature = "tracing")]
        {
            let kind = V::KIND;
            tracing::trace!(%kind, %name, "registered");
        }

        self.entries.insert(name, entry);
        Ok(())
    }

    /// Look up an entry.
    pub fn lookup(&self, name: &str) -> Option<Arc<V>> {
        self.entries.get(name).cloned()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Remove every entry, so names can be registered again.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V: Named + ?Sized> fmt::Debug for NamedRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedRegistry")
            .field("kind", &V::KIND)
            .field("names", &self.names())
            .finish()
    }
}
