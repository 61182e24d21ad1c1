//! Input loading — converts untyped YAML or JSON trees into a typed [`Map`].
//!
//! This is the only place where a value of an unregistered kind can appear.
//! Nulls, booleans and YAML tagged nodes are rejected with
//! [`UsdaError::UnsupportedType`], naming the dotted key path of the entry
//! (`lights.key.intensity`, list elements as `points[2]`).
//!
//! ```
//! use usda_core::input::from_yaml_str;
//! use usda_core::Value;
//! let doc = from_yaml_str("name: hero\nscale: 2.5\n").unwrap();
//! assert_eq!(doc["name"], Value::from("hero"));
//! assert_eq!(doc["scale"], Value::Float(2.5));
//! ```

use crate::error::{Result, UsdaError};
use crate::registry;
use crate::types::{Map, Value};

/// Parse a YAML document and convert its root mapping.
///
/// Merge keys (`<<: *anchor`) are resolved before conversion. An empty
/// document has a null root and is rejected like any other non-mapping root.
pub fn from_yaml_str(yaml: &str) -> Result<Map> {
    let mut value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    value.apply_merge()?;
    from_yaml_value(value)
}

/// Convert an already-parsed YAML value. The root must be a mapping.
pub fn from_yaml_value(value: serde_yaml::Value) -> Result<Map> {
    match value {
        serde_yaml::Value::Mapping(mapping) => yaml_mapping(mapping, ""),
        other => Err(UsdaError::RootType {
            found: yaml_kind(&other).to_string(),
        }),
    }
}

/// Parse a JSON document and convert its root object.
pub fn from_json_str(json: &str) -> Result<Map> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    from_json_value(value)
}

/// Convert an already-parsed JSON value. The root must be an object.
pub fn from_json_value(value: serde_json::Value) -> Result<Map> {
    match value {
        serde_json::Value::Object(object) => json_object(object, ""),
        other => Err(UsdaError::RootType {
            found: json_kind(&other).to_string(),
        }),
    }
}

fn yaml_mapping(mapping: serde_yaml::Mapping, path: &str) -> Result<Map> {
    let mut map = Map::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = yaml_key(&key, path)?;
        let child_path = join_path(path, &name);
        if map.contains_key(&name) {
            return Err(UsdaError::DuplicateKey { key: child_path });
        }
        let converted = yaml_to_value(value, &child_path)?;
        map.insert(name, converted);
    }
    Ok(map)
}

fn yaml_to_value(value: serde_yaml::Value, path: &str) -> Result<Value> {
    match value {
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if n.is_f64() {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            } else {
                Err(UsdaError::IntegerRange {
                    key: path.to_string(),
                    value: n.to_string(),
                })
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| yaml_to_value(item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        serde_yaml::Value::Mapping(mapping) => yaml_mapping(mapping, path).map(Value::Map),
        other => Err(unsupported(path, yaml_text(&other), yaml_kind(&other))),
    }
}

/// Mapping keys become names: strings as-is, numbers and booleans by their
/// YAML text. Anything else cannot name an attribute or scope. Two keys that
/// end up with the same name are rejected by the caller.
fn yaml_key(key: &serde_yaml::Value, parent: &str) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(UsdaError::InvalidKey {
            parent: parent.to_string(),
            kind: yaml_kind(other).to_string(),
        }),
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(n) if n.is_f64() => "float",
        serde_yaml::Value::Number(_) => "integer",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "list",
        serde_yaml::Value::Mapping(_) => "map",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}

/// Short text for an offending value in error messages.
fn yaml_text(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Tagged(tagged) => format!("{} {}", tagged.tag, yaml_text(&tagged.value)),
        other => format!("{:?}", other),
    }
}

fn json_object(object: serde_json::Map<String, serde_json::Value>, path: &str) -> Result<Map> {
    let mut map = Map::with_capacity(object.len());
    for (key, value) in object {
        let child_path = join_path(path, &key);
        let converted = json_to_value(value, &child_path)?;
        map.insert(key, converted);
    }
    Ok(map)
}

fn json_to_value(value: serde_json::Value, path: &str) -> Result<Value> {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if n.is_f64() {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            } else {
                Err(UsdaError::IntegerRange {
                    key: path.to_string(),
                    value: n.to_string(),
                })
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| json_to_value(item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        serde_json::Value::Object(object) => json_object(object, path).map(Value::Map),
        other => Err(unsupported(path, other.to_string(), json_kind(&other))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "float",
        serde_json::Value::Number(_) => "integer",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "map",
    }
}

fn unsupported(path: &str, value: String, kind: &str) -> UsdaError {
    UsdaError::UnsupportedType {
        key: path.to_string(),
        value,
        kind: kind.to_string(),
        supported: registry::supported_kinds(),
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}
