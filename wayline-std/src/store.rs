//! # Global Data Store
//!
//! A single JSON object tree addressed by dot-delimited paths.
//!
//! - `get("a.b.c")` walks object keys (and array indices) and yields `None`
//!   as soon as a segment is missing; it never fails.
//! - `set("a.b.c", v)` follows the same walk. Arrays are entered by numeric
//!   segment and padded with `null` up to that index. Missing or `null`
//!   intermediates become empty objects. Only a scalar intermediate, or an
//!   array addressed by a non-numeric segment, is replaced by an empty object.

use wayline_core::{ConfigError, Value, serde_json::Map};

/// The shared data tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTree {
    root: Map<String, Value>,
}

impl DataTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree from initial data. `null` gives an empty tree; any
    /// other non-object value is rejected.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            Value::Null => Ok(Self::new()),
            other => Err(ConfigError::InitialData {
                found: type_name(&other),
            }),
        }
    }

    /// The root object.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// The whole tree as a value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Read the value at `path`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Write `value` at `path` and return a reference to the stored value.
    pub fn set(&mut self, path: &str, value: Value) -> &Value {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or(path);
        let mut slot = self.root.entry(first.to_owned()).or_insert(Value::Null);
        for segment in segments {
            slot = child_slot(slot, segment);
        }
        *slot = value;
        slot
    }

    /// Whether a value exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.root.clear();
    }
}

impl From<Map<String, Value>> for DataTree {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

/// The slot for `segment` under `node`, created if missing.
fn child_slot<'v>(node: &'v mut Value, segment: &str) -> &'v mut Value {
    let index = match &*node {
        Value::Array(_) => segment.parse::<usize>().ok(),
        _ => None,
    };
    match (node, index) {
        (Value::Array(items), Some(index)) => {
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        }
        (Value::Object(map), _) => map.entry(segment.to_owned()).or_insert(Value::Null),
        (node, _) => {
            *node = Value::Object(Map::new());
            let Value::Object(map) = node else {
                unreachable!("slot was just replaced by an object")
            };
            map.entry(segment.to_owned()).or_insert(Value::Null)
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayline_core::serde_json::json;

    fn tree(value: Value) -> DataTree {
        DataTree::from_value(value).unwrap()
    }

    #[test]
    fn test_set_materializes_intermediates() {
        let mut data = DataTree::new();
        assert_eq!(data.set("a.global.variable", json!("foo")), &json!("foo"));

        assert_eq!(data.get("a.global.variable"), Some(&json!("foo")));
        assert_eq!(data.get("a.global"), Some(&json!({"variable": "foo"})));
        assert!(data.get("a").is_some_and(Value::is_object));
    }

    #[test]
    fn test_missing_path_is_none() {
        let data = tree(json!({"foo": "bar"}));

        assert_eq!(data.get("foo"), Some(&json!("bar")));
        assert_eq!(data.get("nope"), None);
        assert_eq!(data.get("nope.deeper"), None);
        assert_eq!(data.get("foo.length"), None);
    }

    #[test]
    fn test_initial_data_is_kept() {
        let mut data = tree(json!({"foo": "bar"}));
        data.set("a.b", json!(1));

        assert_eq!(data.to_value(), json!({"foo": "bar", "a": {"b": 1}}));
    }

    #[test]
    fn test_falsy_values_are_real_writes() {
        let mut data = DataTree::new();
        data.set("zero", json!(0));
        data.set("empty", json!(""));
        data.set("no", json!(false));
        data.set("nothing", Value::Null);

        assert_eq!(data.get("zero"), Some(&json!(0)));
        assert_eq!(data.get("empty"), Some(&json!("")));
        assert_eq!(data.get("no"), Some(&json!(false)));
        assert_eq!(data.get("nothing"), Some(&Value::Null));
    }

    #[test]
    fn test_set_through_array_keeps_siblings() {
        let mut data = tree(json!({"list": [{"name": "first"}, {"name": "second"}]}));
        data.set("list.1.name", json!("changed"));

        assert_eq!(data.get("list.0.name"), Some(&json!("first")));
        assert_eq!(data.get("list.1.name"), Some(&json!("changed")));
        assert_eq!(
            data.to_value(),
            json!({"list": [{"name": "first"}, {"name": "changed"}]})
        );
    }

    #[test]
    fn test_set_array_element() {
        let mut data = tree(json!({"list": [1, 2]}));
        assert_eq!(data.set("list.0", json!(9)), &json!(9));

        assert_eq!(data.get("list"), Some(&json!([9, 2])));
    }

    #[test]
    fn test_set_past_array_end_pads_with_null() {
        let mut data = tree(json!({"list": [1]}));
        data.set("list.3.flag", json!(true));

        assert_eq!(data.get("list"), Some(&json!([1, null, null, {"flag": true}])));
    }

    #[test]
    fn test_null_intermediate_is_materialized() {
        let mut data = tree(json!({"a": null}));
        data.set("a.b", json!("x"));

        assert_eq!(data.get("a"), Some(&json!({"b": "x"})));
    }

    #[test]
    fn test_scalar_intermediate_becomes_object() {
        let mut data = tree(json!({"a": 5, "list": [1, 2]}));
        data.set("a.b", json!("x"));
        data.set("list.name", json!("y"));

        assert_eq!(data.get("a"), Some(&json!({"b": "x"})));
        assert_eq!(data.get("list"), Some(&json!({"name": "y"})));
    }

    #[test]
    fn test_set_overwrites_and_keeps_siblings() {
        let mut data = tree(json!({"a": {"b": 1, "c": 2}}));
        data.set("a.b", json!(10));

        assert_eq!(data.get("a"), Some(&json!({"b": 10, "c": 2})));
    }

    #[test]
    fn test_get_indexes_arrays() {
        let data = tree(json!({"list": [{"name": "first"}, {"name": "second"}]}));

        assert_eq!(data.get("list.1.name"), Some(&json!("second")));
        assert_eq!(data.get("list.7.name"), None);
        assert_eq!(data.get("list.x"), None);
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        assert!(DataTree::from_value(Value::Null).unwrap().root().is_empty());
        assert!(matches!(
            DataTree::from_value(json!([1, 2])),
            Err(ConfigError::InitialData { found: "array" })
        ));
    }

    #[test]
    fn test_clear() {
        let mut data = tree(json!({"foo": "bar"}));
        data.clear();

        assert!(!data.contains("foo"));
        assert_eq!(data.to_value(), json!({}));
    }
}
