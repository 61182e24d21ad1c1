//! Type formatter registry: maps each value [`Kind`] to the function that
//! renders it and, for scalar kinds, the short USDA type tag.
//!
//! The table is a `static` built at compile time and never mutated. Lookup is
//! an exhaustive `match`, so adding a `Kind` variant without registering it is
//! a compile error rather than a runtime "unsupported type".

use crate::encoder;
use crate::error::Result;
use crate::types::{Kind, Value};

/// Renders the entry `name: value` at the given nesting depth into `out`.
pub type Formatter = fn(name: &str, value: &Value, depth: usize, out: &mut String) -> Result<()>;

/// One registry entry.
pub struct Registration {
    pub kind: Kind,
    /// Short type tag (`int`, `float`, `token`). `None` for kinds that cannot
    /// be the element type of a USDA array.
    pub type_tag: Option<&'static str>,
    pub format: Formatter,
}

static REGISTRY: [Registration; 5] = [
    Registration {
        kind: Kind::Integer,
        type_tag: Some("int"),
        format: encoder::render_scalar,
    },
    Registration {
        kind: Kind::Float,
        type_tag: Some("float"),
        format: encoder::render_scalar,
    },
    Registration {
        kind: Kind::String,
        type_tag: Some("token"),
        format: encoder::render_scalar,
    },
    Registration {
        kind: Kind::List,
        type_tag: None,
        format: encoder::render_list,
    },
    Registration {
        kind: Kind::Map,
        type_tag: None,
        format: encoder::render_scope,
    },
];

/// Look up the registration for a kind.
pub fn lookup(kind: Kind) -> &'static Registration {
    let index = match kind {
        Kind::Integer => 0,
        Kind::Float => 1,
        Kind::String => 2,
        Kind::List => 3,
        Kind::Map => 4,
    };
    &REGISTRY[index]
}

/// The short type tag for a kind, if it has one.
pub fn type_tag(kind: Kind) -> Option<&'static str> {
    lookup(kind).type_tag
}

/// Comma-separated names of every registered kind, for error messages.
pub fn supported_kinds() -> String {
    join_kinds(REGISTRY.iter().map(|r| r.kind))
}

/// Comma-separated names of the kinds that carry a type tag.
pub fn taggable_kinds() -> String {
    join_kinds(
        REGISTRY
            .iter()
            .filter(|r| r.type_tag.is_some())
            .map(|r| r.kind),
    )
}

fn join_kinds(kinds: impl Iterator<Item = Kind>) -> String {
    kinds.map(Kind::name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_registered_under_its_own_slot() {
        for kind in Kind::ALL {
            assert_eq!(lookup(kind).kind, kind);
        }
    }

    #[test]
    fn only_scalars_have_type_tags() {
        assert_eq!(type_tag(Kind::Integer), Some("int"));
        assert_eq!(type_tag(Kind::Float), Some("float"));
        assert_eq!(type_tag(Kind::String), Some("token"));
        assert_eq!(type_tag(Kind::List), None);
        assert_eq!(type_tag(Kind::Map), None);
    }

    #[test]
    fn supported_kind_lists() {
        assert_eq!(supported_kinds(), "integer, float, string, list, map");
        assert_eq!(taggable_kinds(), "integer, float, string");
    }
}
