//! # usda-core
//!
//! Type-directed serializer from nested YAML/JSON mappings to **USDA**, the
//! ASCII flavour of Pixar's Universal Scene Description.
//!
//! Each value kind has a registered formatter: integers, floats and strings
//! become typed attributes, lists become typed arrays (element type taken from
//! the first element), and nested mappings become nested `def Scope` blocks.
//! The whole document is wrapped in a fixed layer header with a `World` scope.
//!
//! ## Quick start
//!
//! ```rust
//! use usda_core::yaml_to_usda;
//!
//! let usda = yaml_to_usda("name: hero\nids: [1, 2, 3]\n").unwrap();
//! assert!(usda.contains("token name = \"hero\""));
//! assert!(usda.contains("int[] ids = [1,2,3]"));
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — typed `Map` → USDA string
//! - [`input`] — YAML / JSON text → typed `Map`
//! - [`registry`] — kind → formatter and type tag table
//! - [`types`] — `Value`, `Kind` and the ordered `Map`
//! - [`error`] — error type for loading and serialization failures

pub mod encoder;
pub mod error;
pub mod input;
pub mod registry;
pub mod types;

pub use encoder::{serialize, serialize_value};
pub use error::UsdaError;
pub use types::{Kind, Map, Value};

/// Parse a YAML document and serialize it to USDA.
pub fn yaml_to_usda(yaml: &str) -> error::Result<String> {
    let document = input::from_yaml_str(yaml)?;
    serialize(&document)
}

/// Parse a JSON document and serialize it to USDA.
pub fn json_to_usda(json: &str) -> error::Result<String> {
    let document = input::from_json_str(json)?;
    serialize(&document)
}
