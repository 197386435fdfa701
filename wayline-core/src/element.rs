//! Attribute source for element-driven dispatch.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Something that carries string attributes, like a DOM element.
///
/// Used by element-driven dispatch to read `data-controller`,
/// `data-action` and `data-namespace`.
pub trait Element {
    /// The attribute's value, or `None` when it is not set.
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<S: BuildHasher> Element for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Element for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Element for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}
