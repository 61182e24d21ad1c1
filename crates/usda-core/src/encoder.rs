//! USDA encoder — renders a typed [`Map`] as an ASCII USD layer.
//!
//! Every root entry becomes a child of a fixed `World` scope:
//!
//! - **Scalars**: `int count = 3`, `float scale = 1.0`, `token name = "hero"`
//! - **Lists**: `int[] ids = [1,2,3]`, typed by the first element only
//! - **Mappings**: nested `def Scope "<key>"` blocks, to any depth
//!
//! # Example
//! ```
//! use usda_core::{serialize, Map, Value};
//! let mut doc = Map::new();
//! doc.insert("frames".to_string(), Value::Integer(24));
//! let usda = serialize(&doc).unwrap();
//! assert!(usda.contains("    int frames = 24\n}"));
//! ```

use crate::error::{Result, UsdaError};
use crate::registry;
use crate::types::{Kind, Map, Value};

/// Everything before the rendered body: layer metadata plus the opening of
/// the `World` scope, up to and including the first body line's indent.
pub const HEADER: &str = "#usda 1.0
(
    endFrame = 1
    startFrame = 1
)

def Scope \"World\" (
    customData = {
        bool zUp = 0
    }
)
{
    ";

/// Everything after the rendered body.
pub const FOOTER: &str = "\n}\n";

/// Serialize a document into a complete USDA layer.
///
/// Fails on the first entry that cannot be rendered; no partial document is
/// ever returned.
pub fn serialize(document: &Map) -> Result<String> {
    let mut out = String::from(HEADER);
    render_entries(document, 1, &mut out)?;
    out.push_str(FOOTER);
    Ok(out)
}

/// Serialize an arbitrary value, which must be a [`Value::Map`].
///
/// This is the checked entry point for values whose shape is not known
/// statically; any other kind fails with [`UsdaError::RootType`] before
/// rendering starts.
pub fn serialize_value(value: &Value) -> Result<String> {
    match value {
        Value::Map(map) => serialize(map),
        other => Err(UsdaError::RootType {
            found: other.kind().name().to_string(),
        }),
    }
}

/// Emit the entries of a mapping at the given depth, one per line. The first
/// entry is written at the current position; the caller has already indented.
fn render_entries(map: &Map, depth: usize, out: &mut String) -> Result<()> {
    let indent = make_indent(depth);
    let mut first = true;
    for (key, value) in map {
        if !first {
            out.push('\n');
            out.push_str(&indent);
        }
        first = false;
        dispatch(key, value, depth, out)?;
    }
    Ok(())
}

/// Route one entry to the formatter registered for its kind.
fn dispatch(key: &str, value: &Value, depth: usize, out: &mut String) -> Result<()> {
    let registration = registry::lookup(value.kind());
    (registration.format)(key, value, depth, out)
}

/// `<tag> <name> = <literal>` for integers, floats and strings.
pub(crate) fn render_scalar(name: &str, value: &Value, _depth: usize, out: &mut String) -> Result<()> {
    let kind = value.kind();
    let tag = registry::type_tag(kind).ok_or_else(|| mismatch(name, value))?;
    out.push_str(tag);
    out.push(' ');
    out.push_str(name);
    out.push_str(" = ");
    push_literal(kind, value, out);
    Ok(())
}

/// `<tag>[] <name> = [e0,e1,...]`.
///
/// The element type comes from the first element (integer when empty). Every
/// element is then written with that type's rule, so `["a", 1]` becomes
/// `token[] name = ["a","1"]`.
pub(crate) fn render_list(name: &str, value: &Value, _depth: usize, out: &mut String) -> Result<()> {
    let Value::List(items) = value else {
        return Err(mismatch(name, value));
    };
    let element_kind = items.first().map_or(Kind::Integer, Value::kind);
    let tag = registry::type_tag(element_kind).ok_or_else(|| UsdaError::ListTypeTag {
        key: name.to_string(),
        kind: element_kind.name().to_string(),
        supported: registry::taggable_kinds(),
    })?;

    out.push_str(tag);
    out.push_str("[] ");
    out.push_str(name);
    out.push_str(" = [");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_literal(element_kind, item, out);
    }
    out.push(']');
    Ok(())
}

/// A nested `def Scope "<name>"` block whose body is the mapping's entries.
pub(crate) fn render_scope(name: &str, value: &Value, depth: usize, out: &mut String) -> Result<()> {
    let Value::Map(map) = value else {
        return Err(mismatch(name, value));
    };
    let indent = make_indent(depth);
    out.push_str("def Scope \"");
    out.push_str(name);
    out.push_str("\"\n");
    out.push_str(&indent);
    out.push('{');
    out.push('\n');
    if !map.is_empty() {
        out.push_str(&make_indent(depth + 1));
        render_entries(map, depth + 1, out)?;
        out.push('\n');
    }
    out.push_str(&indent);
    out.push('}');
    Ok(())
}

/// Write `value` using the literal rule of `as_kind`. Strings are quoted
/// without escaping; everything else uses its plain textual form.
fn push_literal(as_kind: Kind, value: &Value, out: &mut String) {
    if as_kind == Kind::String {
        out.push('"');
        out.push_str(&value.to_string());
        out.push('"');
    } else {
        out.push_str(&value.to_string());
    }
}

/// A formatter was handed a value of a kind it is not registered for.
fn mismatch(name: &str, value: &Value) -> UsdaError {
    UsdaError::UnsupportedType {
        key: name.to_string(),
        value: value.to_string(),
        kind: value.kind().name().to_string(),
        supported: registry::supported_kinds(),
    }
}

/// Generate a 4-space-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "    ".repeat(depth)
}
