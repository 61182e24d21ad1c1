//! Error types for USDA serialization and input loading.

use thiserror::Error;

/// Errors that can occur while loading a document or serializing it to USDA.
#[derive(Error, Debug)]
pub enum UsdaError {
    /// The document root was not a mapping.
    #[error("expected a dictionary-like mapping at the document root, found {found}")]
    RootType { found: String },

    /// A value's kind has no registered formatter.
    #[error("unsupported type for key '{key}': value {value} is of kind {kind} (supported kinds: {supported})")]
    UnsupportedType {
        key: String,
        value: String,
        kind: String,
        supported: String,
    },

    /// A list's first element has a kind with no short USDA type tag.
    #[error("cannot infer array type for key '{key}': element kind {kind} has no type tag (supported element kinds: {supported})")]
    ListTypeTag {
        key: String,
        kind: String,
        supported: String,
    },

    /// An integer that does not fit in a signed 64-bit value.
    #[error("integer out of range for key '{key}': {value}")]
    IntegerRange { key: String, value: String },

    /// A mapping key that cannot be used as an attribute or scope name.
    #[error("invalid key under '{parent}': keys of kind {kind} cannot be used as names")]
    InvalidKey { parent: String, kind: String },

    /// Two distinct mapping keys with the same name (e.g. `1` and `'1'`).
    #[error("duplicate key '{key}': another key in the same mapping has the same name")]
    DuplicateKey { key: String },

    /// The input was not valid YAML.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// The input was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout usda-core.
pub type Result<T> = std::result::Result<T, UsdaError>;
